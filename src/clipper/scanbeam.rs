use crate::clipper::constants::UNASSIGNED;
use crate::utils::number::Number;

struct ScanbeamNode<T: Number> {
    y: T,
    less: usize,
    more: usize,
}

/// Binary search tree of distinct scanline y values.
pub struct Scanbeam<T: Number> {
    nodes: Vec<ScanbeamNode<T>>,
}

impl<T: Number> Scanbeam<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns `false` when `y` is already present.
    pub fn add(&mut self, y: T) -> bool {
        let new_index = self.nodes.len();

        if new_index == 0 {
            self.push(y);
            return true;
        }

        let mut index = 0;

        loop {
            let node = &mut self.nodes[index];

            let child = if y < node.y {
                &mut node.less
            } else if y > node.y {
                &mut node.more
            } else {
                return false;
            };

            if *child == UNASSIGNED {
                *child = new_index;
                break;
            }

            index = *child;
        }

        self.push(y);

        true
    }

    /// In-order traversal: ascending y values.
    pub fn build(&self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.nodes.len());

        if self.nodes.is_empty() {
            return result;
        }

        let mut stack: Vec<usize> = Vec::new();
        let mut index = 0;

        while index != UNASSIGNED || !stack.is_empty() {
            while index != UNASSIGNED {
                stack.push(index);
                index = self.nodes[index].less;
            }

            if let Some(top) = stack.pop() {
                result.push(self.nodes[top].y);
                index = self.nodes[top].more;
            }
        }

        result
    }

    fn push(&mut self, y: T) {
        self.nodes.push(ScanbeamNode {
            y,
            less: UNASSIGNED,
            more: UNASSIGNED,
        });
    }
}

impl<T: Number> Default for Scanbeam<T> {
    fn default() -> Self {
        Self::new()
    }
}
