use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Expected a number, found {found}")]
    NotANumber { found: &'static str },

    #[error("Integer overflow in {op}")]
    Overflow { op: &'static str },

    #[error("Integer {value} does not fit in a 64-bit signed integer")]
    OutOfRange { value: u64 },
}

/// A numeric operand or result: an integer, or a float once any float is involved
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// Add two numbers, promoting to float if either side is a float
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number, ArithmeticError> {
    match (a.into(), b.into()) {
        (Number::Int(a), Number::Int(b)) => a
            .checked_add(b)
            .map(Number::Int)
            .ok_or(ArithmeticError::Overflow { op: "add" }),
        (a, b) => Ok(Number::Float(a.as_f64() + b.as_f64())),
    }
}

/// Multiply two numbers, promoting to float if either side is a float
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number, ArithmeticError> {
    match (a.into(), b.into()) {
        (Number::Int(a), Number::Int(b)) => a
            .checked_mul(b)
            .map(Number::Int)
            .ok_or(ArithmeticError::Overflow { op: "multiply" }),
        (a, b) => Ok(Number::Float(a.as_f64() * b.as_f64())),
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::Int(i64::from(value))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl TryFrom<&Value> for Number {
    type Error = ArithmeticError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let found = match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Number::Int(i));
                }
                if let Some(value) = n.as_u64() {
                    return Err(ArithmeticError::OutOfRange { value });
                }
                return n
                    .as_f64()
                    .map(Number::Float)
                    .ok_or(ArithmeticError::NotANumber { found: "number" });
            }
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(ArithmeticError::NotANumber { found })
    }
}

// Integer and float compare by exact value, so 10 == 10.0 but 2^53 + 1 != 2^53 as f64.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                int_equals_float(i, f)
            }
        }
    }
}

fn int_equals_float(i: i64, f: f64) -> bool {
    // Out-of-range floats saturate in the cast and never match an i64.
    f.is_finite() && f.fract() == 0.0 && f as i128 == i128::from(i)
}

macro_rules! impl_eq_primitive {
    ($($t:ty),*) => {
        $(impl PartialEq<$t> for Number {
            fn eq(&self, other: &$t) -> bool {
                *self == Number::from(*other)
            }
        })*
    };
}

impl_eq_primitive!(i32, i64, f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}
