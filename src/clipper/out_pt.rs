use crate::clipper::constants::UNASSIGNED;
use crate::geometry::point::Point;
use crate::utils::number::Number;

/// Output vertex, singly linked from the left end of its chain.
#[derive(Debug, Clone, Copy)]
pub struct OutPt<T: Number> {
    pub point: Point<T>,
    pub next: usize,
}

impl<T: Number> OutPt<T> {
    pub fn new(x: T, y: T) -> Self {
        Self {
            point: Point::new(x, y),
            next: UNASSIGNED,
        }
    }
}

/// Arena of output vertices shared by every chain of one operation.
pub struct OutPtPool<T: Number> {
    items: Vec<OutPt<T>>,
}

impl<T: Number> OutPtPool<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn create(&mut self, x: T, y: T) -> usize {
        self.items.push(OutPt::new(x, y));
        self.items.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> &OutPt<T> {
        &self.items[index]
    }

    #[inline]
    pub fn set_next(&mut self, index: usize, next: usize) {
        self.items[index].next = next;
    }

    #[inline]
    pub fn next(&self, index: usize) -> usize {
        self.items[index].next
    }

    #[inline]
    pub fn point(&self, index: usize) -> &Point<T> {
        &self.items[index].point
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Walks `next` links from `start`.
    pub fn chain(&self, start: usize) -> ChainIter<'_, T> {
        ChainIter {
            pool: self,
            current: start,
        }
    }
}

impl<T: Number> Default for OutPtPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ChainIter<'a, T: Number> {
    pool: &'a OutPtPool<T>,
    current: usize,
}

impl<'a, T: Number> Iterator for ChainIter<'a, T> {
    type Item = &'a Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == UNASSIGNED {
            return None;
        }

        let out_pt = self.pool.get(self.current);
        self.current = out_pt.next;

        Some(&out_pt.point)
    }
}
