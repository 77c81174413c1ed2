//! Quantity stepper for `+`/`-` buttons next to a quantity input.

/// Upper bound used when the input declares no maximum.
pub const DEFAULT_MAX_QUANTITY: u32 = 999;

/// A quantity input clamped to `[1, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    value: u32,
    max: u32,
}

impl QuantityStepper {
    /// Create a stepper from the input's current value and its declared
    /// `max` attribute.
    ///
    /// A missing or non-numeric `max` falls back to [`DEFAULT_MAX_QUANTITY`];
    /// the value is clamped into range.
    #[must_use]
    pub fn new(value: &str, max_attr: Option<&str>) -> Self {
        let max = max_attr
            .and_then(|m| m.trim().parse::<u32>().ok())
            .filter(|m| *m >= 1)
            .unwrap_or(DEFAULT_MAX_QUANTITY);
        let value = value.trim().parse::<u32>().unwrap_or(1).clamp(1, max);
        Self { value, max }
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Step up by one, stopping at `max`.
    pub fn increase(&mut self) -> u32 {
        if self.value < self.max {
            self.value += 1;
        }
        self.value
    }

    /// Step down by one, stopping at 1.
    pub fn decrease(&mut self) -> u32 {
        if self.value > 1 {
            self.value -= 1;
        }
        self.value
    }
}
