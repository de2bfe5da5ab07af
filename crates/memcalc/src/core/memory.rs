//! Single-value memory register and its indicator
//!
//! The register only ever holds finite values. Updates that would leave it
//! non-finite are refused and the previous value is kept.

use serde::{Deserialize, Serialize};

use super::format_number;

/// Visual emphasis of the memory indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Memory holds a non-zero value
    Active,
    /// Memory is zero
    Inactive,
}

/// Rendering of the memory register: a label plus an emphasis flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryIndicator {
    /// Text label, `"M: {memory}"`
    pub label: String,
    /// Whether the indicator is emphasised
    pub emphasis: Emphasis,
}

impl MemoryIndicator {
    /// Derives the indicator for a memory value
    #[must_use]
    pub fn for_value(value: f64) -> Self {
        Self {
            label: format!("M: {}", format_number(value)),
            emphasis: if value == 0.0 {
                Emphasis::Inactive
            } else {
                Emphasis::Active
            },
        }
    }

    /// Returns true when the memory holds a non-zero value
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.emphasis == Emphasis::Active
    }
}

/// Memory register (MC / MR / M+ / M-)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    /// Creates a register holding 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Resets the register to 0
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Adds `amount` to the register.
    ///
    /// Returns false, leaving the register unchanged, when the sum is not finite.
    pub fn add(&mut self, amount: f64) -> bool {
        self.store(self.value + amount)
    }

    /// Subtracts `amount` from the register.
    ///
    /// Returns false, leaving the register unchanged, when the difference is not finite.
    pub fn subtract(&mut self, amount: f64) -> bool {
        self.store(self.value - amount)
    }

    /// Derives the indicator for the current value
    #[must_use]
    pub fn indicator(&self) -> MemoryIndicator {
        MemoryIndicator::for_value(self.value)
    }

    fn store(&mut self, candidate: f64) -> bool {
        if candidate.is_finite() {
            self.value = candidate;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_register_starts_at_zero() {
        let memory = MemoryRegister::new();
        assert_eq!(memory.value(), 0.0);
        assert!(!memory.indicator().is_active());
    }

    #[test]
    fn test_add_and_subtract() {
        let mut memory = MemoryRegister::new();
        assert!(memory.add(5.0));
        assert!(memory.subtract(3.0));
        assert_eq!(memory.value(), 2.0);
    }

    #[test]
    fn test_clear() {
        let mut memory = MemoryRegister::new();
        memory.add(42.0);
        memory.clear();
        assert_eq!(memory.value(), 0.0);
    }

    #[test]
    fn test_non_finite_update_refused() {
        let mut memory = MemoryRegister::new();
        memory.add(7.0);
        assert!(!memory.add(f64::INFINITY));
        assert!(!memory.subtract(f64::NEG_INFINITY));
        assert_eq!(memory.value(), 7.0);
    }

    #[test]
    fn test_overflowing_sum_refused() {
        let mut memory = MemoryRegister::new();
        assert!(memory.add(f64::MAX));
        assert!(!memory.add(f64::MAX));
        assert_eq!(memory.value(), f64::MAX);
    }

    #[test]
    fn test_indicator_label() {
        assert_eq!(MemoryIndicator::for_value(0.0).label, "M: 0");
        assert_eq!(MemoryIndicator::for_value(2.0).label, "M: 2");
        assert_eq!(MemoryIndicator::for_value(-0.25).label, "M: -0.25");
    }

    #[test]
    fn test_indicator_emphasis() {
        assert_eq!(MemoryIndicator::for_value(0.0).emphasis, Emphasis::Inactive);
        assert_eq!(MemoryIndicator::for_value(-1.0).emphasis, Emphasis::Active);
        assert_eq!(MemoryIndicator::for_value(1e-9).emphasis, Emphasis::Active);
    }

    #[test]
    fn test_indicator_serializes_lowercase_emphasis() {
        let json = serde_json::to_string(&MemoryIndicator::for_value(3.0)).unwrap();
        assert_eq!(json, r#"{"label":"M: 3","emphasis":"active"}"#);
    }

    proptest! {
        #[test]
        fn prop_register_stays_finite(amounts in proptest::collection::vec(proptest::num::f64::ANY, 0..20)) {
            let mut memory = MemoryRegister::new();
            for (i, amount) in amounts.into_iter().enumerate() {
                if i % 2 == 0 {
                    memory.add(amount);
                } else {
                    memory.subtract(amount);
                }
                prop_assert!(memory.value().is_finite());
            }
        }

        #[test]
        fn prop_indicator_inactive_iff_zero(value in -1e12f64..1e12f64) {
            let indicator = MemoryIndicator::for_value(value);
            prop_assert_eq!(!indicator.is_active(), value == 0.0);
        }
    }
}
