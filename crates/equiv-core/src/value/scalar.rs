//! Scalar values.
//!
//! Each scalar's own equality is the plain Rust comparison of its payload.
//! For floats that is IEEE `==` (NaN is unequal to itself); for decimals it
//! compares mantissa and scale, so `5.5` and `5.50` differ.

use std::any::Any;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::object::Object;
use crate::types::{well_known, TypeRef};

macro_rules! scalar_value {
    ($(#[$meta:meta])* $name:ident($payload:ty) => $ty:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(pub $payload);

        impl $name {
            pub fn get(&self) -> &$payload {
                &self.0
            }
        }

        impl From<$payload> for $name {
            fn from(value: $payload) -> Self {
                $name(value)
            }
        }

        impl Object for $name {
            fn runtime_type(&self) -> &TypeRef {
                $ty()
            }

            fn native_equals(&self, other: &dyn Object) -> bool {
                other.downcast_ref::<$name>().is_some_and(|o| o == self)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

scalar_value!(BoolValue(bool) => well_known::boolean);
scalar_value!(ByteValue(u8) => well_known::byte);
scalar_value!(I32Value(i32) => well_known::int32);
scalar_value!(I64Value(i64) => well_known::int64);
scalar_value!(
    /// Single precision float; native equality is IEEE `==`.
    F32Value(f32) => well_known::float32
);
scalar_value!(
    /// Double precision float; native equality is IEEE `==`.
    F64Value(f64) => well_known::float64
);
scalar_value!(StringValue(Arc<str>) => well_known::string);

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        StringValue(value.into())
    }
}

/// Arbitrary precision decimal.
///
/// Native equality is representation equality: the same unscaled mantissa at
/// the same scale.
#[derive(Debug, Clone, Copy)]
pub struct DecimalValue(pub Decimal);

impl DecimalValue {
    pub fn get(&self) -> &Decimal {
        &self.0
    }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }
}

impl From<Decimal> for DecimalValue {
    fn from(value: Decimal) -> Self {
        DecimalValue(value)
    }
}

impl Object for DecimalValue {
    fn runtime_type(&self) -> &TypeRef {
        well_known::decimal()
    }

    fn native_equals(&self, other: &dyn Object) -> bool {
        other
            .downcast_ref::<DecimalValue>()
            .is_some_and(|o| o.0.mantissa() == self.0.mantissa() && o.0.scale() == self.0.scale())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
