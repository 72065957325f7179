//! Numeric strategies.

use equiv_config::SignedZero;
use equiv_core::value::{DecimalValue, F32Value, F64Value};
use equiv_core::Object;

use crate::registry::EqualityRegistry;
use crate::strategy::{downcast_pair, EqualityStrategy};

/// Compares decimals by numeric value, ignoring scale.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalStrategy;

impl EqualityStrategy for DecimalStrategy {
    fn name(&self) -> &str {
        "decimal"
    }

    fn equals(&self, _registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        match downcast_pair::<DecimalValue>(a, b) {
            // `Decimal`'s `PartialEq` normalizes scale: 5.5 == 5.50.
            Some((x, y)) => x.get() == y.get(),
            None => a.native_equals(b),
        }
    }
}

/// Compares floats by bit pattern, so NaN equals NaN.
///
/// Under [`SignedZero::Distinct`] `+0.0` and `-0.0` differ; under
/// [`SignedZero::Equal`] they are the same value.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatStrategy {
    signed_zero: SignedZero,
}

impl FloatStrategy {
    pub fn new(signed_zero: SignedZero) -> Self {
        Self { signed_zero }
    }

    pub fn signed_zero(&self) -> SignedZero {
        self.signed_zero
    }

    pub fn f64_equal(&self, x: f64, y: f64) -> bool {
        if x.is_nan() && y.is_nan() {
            return true;
        }
        if self.signed_zero == SignedZero::Equal && x == 0.0 && y == 0.0 {
            return true;
        }
        x.to_bits() == y.to_bits()
    }

    pub fn f32_equal(&self, x: f32, y: f32) -> bool {
        if x.is_nan() && y.is_nan() {
            return true;
        }
        if self.signed_zero == SignedZero::Equal && x == 0.0 && y == 0.0 {
            return true;
        }
        x.to_bits() == y.to_bits()
    }
}

impl EqualityStrategy for FloatStrategy {
    fn name(&self) -> &str {
        "float-bits"
    }

    fn equals(&self, _registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        if let Some((x, y)) = downcast_pair::<F64Value>(a, b) {
            return self.f64_equal(*x.get(), *y.get());
        }
        if let Some((x, y)) = downcast_pair::<F32Value>(a, b) {
            return self.f32_equal(*x.get(), *y.get());
        }
        a.native_equals(b)
    }
}
