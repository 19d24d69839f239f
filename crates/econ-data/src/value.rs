//! Cell values and their string and numeric conversions.

use std::{
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use serde::{Serialize, Serializer};

/// A single table cell.
///
/// Every variant has a fixed string form (see [`Value::render`]) so that search can treat
/// any column as text without knowing its type.
#[derive(Debug, Clone)]
pub enum Value {
    /// Free text.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Empty or absent cell.
    Missing,
}

impl Value {
    /// Returns the canonical string form of the value.
    ///
    /// - text is returned verbatim
    /// - integers are rendered in decimal
    /// - integral floats keep one fractional digit (`3.0`), other floats use the
    ///   shortest round-trip form
    /// - booleans render as `true` / `false`
    /// - missing cells render as the empty string
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => render_float(*f),
            Self::Bool(b) => b.to_string(),
            Self::Missing => String::new(),
        }
    }

    /// Coerces the value to a number.
    ///
    /// Integers and floats convert directly and text is parsed after trimming. Booleans,
    /// missing cells, unparseable text and NaN all coerce to `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Bool(_) | Self::Missing => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    /// Returns the text content if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for missing cells.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Renders a float, keeping a trailing `.0` on integral values.
fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Missing, Self::Missing) => true,
            _ => false,
        }
    }
}

// Floats compare by bit pattern, which makes equality reflexive.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Text(s) => s.hash(state),
            Self::Integer(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Bool(b) => b.hash(state),
            Self::Missing => {}
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Missing => serializer.serialize_none(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn render_contract() {
        assert_eq!(Value::from("India").render(), "India");
        assert_eq!(Value::from(2022_i64).render(), "2022");
        assert_eq!(Value::from(3.0).render(), "3.0");
        assert_eq!(Value::from(3385.1).render(), "3385.1");
        assert_eq!(Value::from(-0.25).render(), "-0.25");
        assert_eq!(Value::from(true).render(), "true");
        assert_eq!(Value::Missing.render(), "");
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(Value::from(7_i64).as_f64(), Some(7.0));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from(" 42.5 ").as_f64(), Some(42.5));
        assert_eq!(Value::from("n/a").as_f64(), None);
        assert_eq!(Value::from(f64::NAN).as_f64(), None);
        assert_eq!(Value::from(true).as_f64(), None);
        assert_eq!(Value::Missing.as_f64(), None);
    }

    #[test]
    fn structural_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Value::from(1.5));
        set.insert(Value::from(1.5));
        set.insert(Value::from(f64::NAN));
        set.insert(Value::from(f64::NAN));
        set.insert(Value::Missing);
        set.insert(Value::Missing);
        assert_eq!(set.len(), 3);
        assert_ne!(Value::from(1_i64), Value::from(1.0));
    }

    #[test]
    fn serializes_as_plain_json() {
        let values = vec![
            Value::from("x"),
            Value::from(1_i64),
            Value::from(2.5),
            Value::from(false),
            Value::Missing,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["x",1,2.5,false,null]"#);
    }
}
