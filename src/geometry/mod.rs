pub mod bound_rect;
pub mod contour;
pub mod matrix;
pub mod mem_seg;
pub mod point;
pub mod polygon;
