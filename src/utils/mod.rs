pub mod almost_equal;
pub mod interpolate;
pub mod math;
pub mod number;
pub mod wasm_logger;
