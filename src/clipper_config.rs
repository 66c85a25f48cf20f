use crate::constants::CONFIG_SIZE;
use crate::utils::number::Number;

const PREFILTER_FLAG: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipperConfig<T: Number> {
    /// Tolerance for coincident edges and parallel crossings. Zero is exact.
    pub epsilon: T,
    /// Skip contours whose bounds overlap nothing on the other side.
    pub use_prefilter: bool,
}

impl<T: Number> ClipperConfig<T> {
    pub fn new() -> Self {
        Self {
            epsilon: T::epsilon(),
            use_prefilter: true,
        }
    }

    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    pub fn with_prefilter(mut self, use_prefilter: bool) -> Self {
        self.use_prefilter = use_prefilter;
        self
    }

    /// Missing or malformed entries keep their defaults.
    pub fn deserialize(&mut self, packed: &[f64]) {
        if let Some(epsilon) = packed.first().copied().and_then(T::from_f64) {
            if epsilon.is_finite() {
                self.epsilon = epsilon.abs();
            }
        }

        if let Some(&flags) = packed.get(1) {
            if flags.is_finite() && flags >= 0.0 {
                self.use_prefilter = (flags as u32) & PREFILTER_FLAG != 0;
            }
        }
    }

    pub fn serialize(&self) -> [f64; CONFIG_SIZE] {
        let mut flags: u32 = 0;

        if self.use_prefilter {
            flags |= PREFILTER_FLAG;
        }

        [self.epsilon.to_f64().unwrap_or(0.0), flags as f64]
    }
}

impl<T: Number> Default for ClipperConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}
