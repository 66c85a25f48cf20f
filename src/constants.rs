pub const TOL_F64: f64 = 1e-9;

pub const TOL_F32: f32 = 1e-6;

/// Header slots before the per-contour offsets in a packed polygon buffer.
pub const MEM_SEG_HEADER: usize = 1;

/// `[epsilon, flags]`
pub const CONFIG_SIZE: usize = 2;

pub const MATRIX_SIZE: usize = 6;
