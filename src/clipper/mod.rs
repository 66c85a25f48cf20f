//! Scanline polygon clipper: boolean operations on polygons with holes.

pub mod clipper;
pub mod constants;
pub mod enums;
pub mod intersect_node;
pub mod local_minima;
pub mod out_pt;
pub mod out_rec;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use enums::*;

use crate::clipper::clipper::Clipper;
use crate::clipper_config::ClipperConfig;
use crate::geometry::polygon::Polygon;
use crate::utils::number::Number;

pub fn execute<T: Number>(
    clip_type: ClipType,
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    config: &ClipperConfig<T>,
) -> Polygon<T> {
    Clipper::new(*config).execute(clip_type, subject, clip)
}

pub fn union<T: Number>(subject: &Polygon<T>, clip: &Polygon<T>) -> Polygon<T> {
    union_with_config(subject, clip, &ClipperConfig::default())
}

pub fn intersect<T: Number>(subject: &Polygon<T>, clip: &Polygon<T>) -> Polygon<T> {
    intersect_with_config(subject, clip, &ClipperConfig::default())
}

pub fn subtract<T: Number>(subject: &Polygon<T>, clip: &Polygon<T>) -> Polygon<T> {
    subtract_with_config(subject, clip, &ClipperConfig::default())
}

pub fn xor<T: Number>(subject: &Polygon<T>, clip: &Polygon<T>) -> Polygon<T> {
    xor_with_config(subject, clip, &ClipperConfig::default())
}

pub fn union_with_config<T: Number>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    config: &ClipperConfig<T>,
) -> Polygon<T> {
    execute(ClipType::Union, subject, clip, config)
}

pub fn intersect_with_config<T: Number>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    config: &ClipperConfig<T>,
) -> Polygon<T> {
    execute(ClipType::Intersection, subject, clip, config)
}

pub fn subtract_with_config<T: Number>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    config: &ClipperConfig<T>,
) -> Polygon<T> {
    execute(ClipType::Difference, subject, clip, config)
}

pub fn xor_with_config<T: Number>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    config: &ClipperConfig<T>,
) -> Polygon<T> {
    execute(ClipType::Xor, subject, clip, config)
}
