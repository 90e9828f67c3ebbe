//! Input payloads accepted by builder operations.

use std::borrow::Cow;
use std::fmt;

/// A payload handed to a builder operation.
///
/// Text, numbers and booleans convert into a `Value` implicitly, and `None`
/// becomes [`Value::Missing`] so that absent arguments can be reported with
/// the operation's own message instead of being impossible to express.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// No value was supplied
    Missing,
    Str(Cow<'a, str>),
    /// A number, kept as its own decimal rendering
    Number(String),
    Bool(bool),
}

impl<'a> Value<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// True for a present string of zero length
    pub fn is_empty_str(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }

    /// Name of the value's kind, as used in type errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Missing => "missing",
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Str(s) => f.write_str(s),
            Value::Number(n) => f.write_str(n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Str(Cow::Owned(c.to_string()))
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! number_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(n: $ty) -> Self {
                    Value::Number(n.to_string())
                }
            }
        )*
    };
}

number_value!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from("hi"), Value::Str(Cow::Borrowed("hi")));
        assert_eq!(Value::from(3), Value::Number("3".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<&str>), Value::Missing);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn test_display_numbers_verbatim() {
        assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Value::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Value::from(12345678901234567891u64).to_string(), "12345678901234567891");
        assert_eq!(Value::from(0.1f32).to_string(), "0.1");
        assert_eq!(Value::from(0.1f64).to_string(), "0.1");
    }

    #[test]
    fn test_empty_str() {
        assert!(Value::from("").is_empty_str());
        assert!(!Value::from(0).is_empty_str());
        assert!(!Value::Missing.is_empty_str());
    }
}
