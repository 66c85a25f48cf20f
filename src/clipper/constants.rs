/// Null handle for every arena in the engine.
pub const UNASSIGNED: usize = usize::MAX;

/// Row of the `[above, below]` pairs kept on each edge.
pub const ABOVE: usize = 0;

pub const BELOW: usize = 1;
