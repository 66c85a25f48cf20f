use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float64Array;

pub mod clipper;
pub mod clipper_config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod utils;

use crate::clipper::enums::ClipType;
use crate::clipper_config::ClipperConfig;
use crate::error::BooleanError;
use crate::geometry::matrix::Matrix;
use crate::geometry::mem_seg::{pack_polygon, unpack_polygon};
use crate::geometry::point::Point;
use crate::utils::almost_equal::AlmostEqual;
use crate::utils::number::Number;

fn to_float64_array(values: &[f64]) -> Float64Array {
    let out = Float64Array::new_with_length(values.len() as u32);
    out.copy_from(values);
    out
}

fn unwrap_or_log(result: Result<Vec<f64>, BooleanError>, context: &str) -> Vec<f64> {
    match result {
        Ok(values) => values,
        Err(error) => {
            wasm_log!("{}: {}", context, error);
            Vec::new()
        }
    }
}

#[wasm_bindgen]
pub fn polygon_area(points: &[f64]) -> f64 {
    f64::polygon_area(points)
}

#[wasm_bindgen]
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    a.almost_equal(b, Some(tolerance))
}

/// Runs one boolean operation over two packed polygons.
///
/// # Arguments
/// * `op` - 0 intersection, 1 union, 2 difference, 3 xor
/// * `subject` / `clip` - packed polygons, see `geometry::mem_seg`
/// * `config` - `[epsilon, flags]`, missing entries keep defaults
///
/// # Returns
/// Packed result polygon
pub fn boolean_inner(
    op: u8,
    subject: &[f64],
    clip: &[f64],
    config: &[f64],
) -> Result<Vec<f64>, BooleanError> {
    let clip_type = ClipType::from_u8(op).ok_or(BooleanError::UnknownOperation(op))?;
    let subject = unpack_polygon(subject)?;
    let clip = unpack_polygon(clip)?;
    let mut clipper_config = ClipperConfig::new();

    clipper_config.deserialize(config);

    let result = clipper::execute(clip_type, &subject, &clip, &clipper_config);

    Ok(pack_polygon(&result))
}

#[wasm_bindgen]
pub fn boolean_wasm(op: u8, subject: &[f64], clip: &[f64], config: &[f64]) -> Float64Array {
    let result = unwrap_or_log(boolean_inner(op, subject, clip, config), "boolean_wasm");
    to_float64_array(&result)
}

#[wasm_bindgen]
pub fn intersect_wasm(subject: &[f64], clip: &[f64]) -> Float64Array {
    boolean_wasm(ClipType::Intersection as u8, subject, clip, &[])
}

#[wasm_bindgen]
pub fn union_wasm(subject: &[f64], clip: &[f64]) -> Float64Array {
    boolean_wasm(ClipType::Union as u8, subject, clip, &[])
}

#[wasm_bindgen]
pub fn subtract_wasm(subject: &[f64], clip: &[f64]) -> Float64Array {
    boolean_wasm(ClipType::Difference as u8, subject, clip, &[])
}

#[wasm_bindgen]
pub fn xor_wasm(subject: &[f64], clip: &[f64]) -> Float64Array {
    boolean_wasm(ClipType::Xor as u8, subject, clip, &[])
}

pub fn contains_inner(
    polygon: &[f64],
    x: f64,
    y: f64,
    even_odd: bool,
) -> Result<bool, BooleanError> {
    let polygon = unpack_polygon(polygon)?;
    let point = Point::new(x, y);

    Ok(if even_odd {
        polygon.contains_even_odd(&point)
    } else {
        polygon.contains(&point)
    })
}

#[wasm_bindgen]
pub fn contains_wasm(polygon: &[f64], x: f64, y: f64, even_odd: bool) -> bool {
    contains_inner(polygon, x, y, even_odd).unwrap_or_else(|error| {
        wasm_log!("contains_wasm: {}", error);
        false
    })
}

/// `[x, y, width, height]`, empty when the polygon has no points.
pub fn bounds_inner(polygon: &[f64]) -> Result<Vec<f64>, BooleanError> {
    let polygon = unpack_polygon(polygon)?;

    Ok(polygon
        .bounds()
        .map(|rect| vec![rect.x(), rect.y(), rect.width(), rect.height()])
        .unwrap_or_default())
}

#[wasm_bindgen]
pub fn bounds_wasm(polygon: &[f64]) -> Float64Array {
    let result = unwrap_or_log(bounds_inner(polygon), "bounds_wasm");
    to_float64_array(&result)
}

/// Applies `[a, b, c, d, tx, ty]` to every point.
pub fn transform_inner(polygon: &[f64], matrix: &[f64]) -> Result<Vec<f64>, BooleanError> {
    let matrix = Matrix::from_slice(matrix).ok_or(BooleanError::InvalidMatrix(matrix.len()))?;
    let polygon = unpack_polygon(polygon)?;

    Ok(pack_polygon(&polygon.transform(&matrix)))
}

#[wasm_bindgen]
pub fn transform_wasm(polygon: &[f64], matrix: &[f64]) -> Float64Array {
    let result = unwrap_or_log(transform_inner(polygon, matrix), "transform_wasm");
    to_float64_array(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MemSegError;

    // [1 contour, offset 0, square]
    fn packed_square(x: f64, y: f64, size: f64) -> Vec<f64> {
        vec![
            1.0,
            0.0,
            x,
            y,
            x + size,
            y,
            x + size,
            y + size,
            x,
            y + size,
        ]
    }

    fn packed_area(packed: &[f64]) -> f64 {
        unpack_polygon(packed).map(|polygon| polygon.area()).unwrap_or(-1.0)
    }

    #[test]
    fn test_boolean_inner_all_operations() {
        let a = packed_square(0.0, 0.0, 10.0);
        let b = packed_square(5.0, 5.0, 10.0);

        assert_eq!(packed_area(&boolean_inner(0, &a, &b, &[]).unwrap()), 25.0);
        assert_eq!(packed_area(&boolean_inner(1, &a, &b, &[]).unwrap()), 175.0);
        assert_eq!(packed_area(&boolean_inner(2, &a, &b, &[]).unwrap()), 75.0);
        assert_eq!(packed_area(&boolean_inner(2, &b, &a, &[]).unwrap()), 75.0);
    }

    #[test]
    fn test_boolean_inner_with_config() {
        let a = packed_square(0.0, 0.0, 10.0);
        let b = packed_square(5.0, 5.0, 10.0);
        let result = boolean_inner(0, &a, &b, &[0.0, 0.0]).unwrap();

        assert_eq!(result[0], 1.0);
        assert_eq!(packed_area(&result), 25.0);
    }

    #[test]
    fn test_boolean_inner_empty_result_is_packed() {
        let a = packed_square(0.0, 0.0, 10.0);
        let b = packed_square(20.0, 0.0, 10.0);

        assert_eq!(boolean_inner(0, &a, &b, &[]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_boolean_inner_rejects_bad_input() {
        let a = packed_square(0.0, 0.0, 10.0);

        assert_eq!(
            boolean_inner(9, &a, &a, &[]),
            Err(BooleanError::UnknownOperation(9))
        );
        assert_eq!(
            boolean_inner(1, &[], &a, &[]),
            Err(BooleanError::MemSeg(MemSegError::Empty))
        );
    }

    #[test]
    fn test_contains_inner() {
        let ring = vec![
            2.0, 0.0, 8.0, 0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0, 3.0, 3.0, 7.0, 3.0, 7.0,
            7.0, 3.0, 7.0,
        ];

        assert_eq!(contains_inner(&ring, 5.0, 5.0, false), Ok(true));
        assert_eq!(contains_inner(&ring, 5.0, 5.0, true), Ok(false));
        assert_eq!(contains_inner(&ring, 1.0, 1.0, true), Ok(true));
        assert_eq!(contains_inner(&ring, 11.0, 1.0, false), Ok(false));
    }

    #[test]
    fn test_bounds_inner() {
        let square = packed_square(2.0, 3.0, 4.0);

        assert_eq!(bounds_inner(&square), Ok(vec![2.0, 3.0, 4.0, 4.0]));
        assert_eq!(bounds_inner(&[0.0]), Ok(Vec::new()));
    }

    #[test]
    fn test_transform_inner() {
        let square = packed_square(0.0, 0.0, 1.0);
        let moved = transform_inner(&square, &[2.0, 0.0, 0.0, 2.0, 1.0, 1.0]).unwrap();

        assert_eq!(moved, vec![1.0, 0.0, 1.0, 1.0, 3.0, 1.0, 3.0, 3.0, 1.0, 3.0]);
        assert_eq!(
            transform_inner(&square, &[1.0, 0.0]),
            Err(BooleanError::InvalidMatrix(2))
        );
    }

    #[test]
    fn test_polygon_area() {
        assert_eq!(polygon_area(&[0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0]), 16.0);
        assert!(almost_equal(1.0, 1.0 + 1e-12, 1e-9));
    }
}
