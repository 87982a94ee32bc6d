// Loosely typed values assigned to widget properties.
// Coerces host input to booleans with truthy/falsy rules.

/// A value a host may assign to a boolean property.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Coerce to a boolean.
    ///
    /// `""`, `0`, `NaN`, `undefined`, `null` and `false` are false; every
    /// other value is true, including the strings `"0"` and `"false"`.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::String(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        let falsy = [
            Value::from(""),
            Value::from(0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            Value::from(()),
            Value::from(None::<bool>),
            Value::from(false),
        ];
        for value in falsy {
            assert!(!value.truthy(), "{:?} should be falsy", value);
        }
    }

    #[test]
    fn test_truthy_values() {
        let truthy = [
            Value::from("0"),
            Value::from("false"),
            Value::from(1),
            Value::from(-3.5),
            Value::from(f64::INFINITY),
            Value::from(Some(true)),
            Value::from(true),
        ];
        for value in truthy {
            assert!(value.truthy(), "{:?} should be truthy", value);
        }
    }

    #[test]
    fn test_default_is_undefined() {
        assert_eq!(Value::default(), Value::Undefined);
    }
}
