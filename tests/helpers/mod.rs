// Shared test utilities for the boolean operation tests.

#![allow(dead_code)]

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use wasm_polybool::geometry::bound_rect::BoundRect;
use wasm_polybool::geometry::contour::Contour;
use wasm_polybool::geometry::point::Point;
use wasm_polybool::geometry::polygon::Polygon;

/// Grid step used for region sampling. Inputs built on a half-unit grid are
/// never hit on a boundary by cell centres.
pub const SAMPLE_STEP: f64 = 0.5;

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Polygon<f64> {
    Polygon::from(Contour::from_coords(&[
        (x, y),
        (x + width, y),
        (x + width, y + height),
        (x, y + height),
    ]))
}

pub fn polygon(contours: &[&[(f64, f64)]]) -> Polygon<f64> {
    Polygon::from_contours(contours.iter().map(|coords| Contour::from_coords(coords)).collect())
}

/// 10x10 square with a 4x4 hole in the middle.
pub fn ring(x: f64, y: f64) -> Polygon<f64> {
    polygon(&[
        &[(x, y), (x + 10.0, y), (x + 10.0, y + 10.0), (x, y + 10.0)],
        &[
            (x + 3.0, y + 3.0),
            (x + 7.0, y + 3.0),
            (x + 7.0, y + 7.0),
            (x + 3.0, y + 7.0),
        ],
    ])
}

pub fn l_shape(x: f64, y: f64) -> Polygon<f64> {
    polygon(&[&[
        (x, y),
        (x + 8.0, y),
        (x + 8.0, y + 3.0),
        (x + 3.0, y + 3.0),
        (x + 3.0, y + 8.0),
        (x, y + 8.0),
    ]])
}

fn joint_bounds(polygons: &[&Polygon<f64>]) -> Option<BoundRect<f64>> {
    polygons
        .iter()
        .filter_map(|polygon| polygon.bounds())
        .reduce(|acc, rect| acc.union(&rect))
}

/// Cell centres of a `SAMPLE_STEP` grid covering every polygon, padded by one cell.
pub fn sample_points(polygons: &[&Polygon<f64>]) -> Vec<Point<f64>> {
    let bounds = match joint_bounds(polygons) {
        Some(bounds) => bounds,
        None => return Vec::new(),
    };
    let columns = (bounds.width() / SAMPLE_STEP).ceil() as usize + 2;
    let rows = (bounds.height() / SAMPLE_STEP).ceil() as usize + 2;
    let mut points = Vec::with_capacity(columns * rows);

    for row in 0..rows {
        for column in 0..columns {
            points.push(Point::new(
                bounds.left() + (column as f64 - 0.5) * SAMPLE_STEP,
                bounds.bottom() + (row as f64 - 0.5) * SAMPLE_STEP,
            ));
        }
    }

    points
}

pub fn even_odd_area(polygon: &Polygon<f64>) -> f64 {
    let inside = sample_points(&[polygon])
        .iter()
        .filter(|point| polygon.contains_even_odd(point))
        .count();

    inside as f64 * SAMPLE_STEP * SAMPLE_STEP
}

/// First sample point where the even-odd regions of `a` and `b` differ.
pub fn region_mismatch(a: &Polygon<f64>, b: &Polygon<f64>) -> Option<Point<f64>> {
    sample_points(&[a, b])
        .into_iter()
        .find(|point| a.contains_even_odd(point) != b.contains_even_odd(point))
}

pub fn assert_same_region(actual: &Polygon<f64>, expected: &Polygon<f64>, label: &str) {
    if let Some(point) = region_mismatch(actual, expected) {
        panic!(
            "{}: regions differ at ({}, {}), actual contains: {}",
            label,
            point.x,
            point.y,
            actual.contains_even_odd(&point)
        );
    }
}

/// Runs `f` on a worker thread and fails the test if it does not finish in time.
pub fn run_with_timeout<F, R>(timeout: Duration, f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let _ = sender.send(f());
    });

    match receiver.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => panic!("operation timed out after {:?}", timeout),
        Err(mpsc::RecvTimeoutError::Disconnected) => panic!("operation panicked"),
    }
}

/// Deterministic LCG so randomized inputs are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// Integer in `[min, max]`.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        min + self.next_u32() % (max - min + 1)
    }
}
