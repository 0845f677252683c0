//! Script-facing values
//!
//! Descriptors and listener arguments arrive as loosely typed values, the way
//! page scripts hand them over. `Value` keeps the runtime type so the layers
//! above can reproduce the host's coercions and type checks.

use fos_dom::Listener;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Event handler stored in a `Value::Function`
pub type Handler = Listener;

/// Dynamic value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(AttributeDescriptor),
    Function(Handler),
}

impl Value {
    /// Runtime type name, as `typeof` reports it
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Object(_) | Value::Function(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&AttributeDescriptor> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Handler> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// String conversion used by attribute and style assignment
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_text(*n),
            Value::String(s) => s.clone(),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Function(_) => "function () { [native code] }".to_string(),
        }
    }
}

fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // -0 prints as "0"
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_text(n)
    } else {
        // Shortest round-trip digits, never an exponent in this range
        n.to_string()
    }
}

/// `1e+21`, `-2.5e-7`: explicit sign on the exponent
fn exponent_text(n: f64) -> String {
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<AttributeDescriptor> for Value {
    fn from(d: AttributeDescriptor) -> Self {
        Value::Object(d)
    }
}

impl From<Handler> for Value {
    fn from(h: Handler) -> Self {
        Value::Function(h)
    }
}

impl From<&Handler> for Value {
    fn from(h: &Handler) -> Self {
        Value::Function(h.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Insertion-ordered attribute map. The `style` key may hold a nested
/// descriptor of style properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeDescriptor {
    entries: Vec<(String, Value)>,
}

impl AttributeDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style `style` block
    pub fn style<K, V>(self, props: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.attr("style", props.into_iter().collect::<AttributeDescriptor>())
    }

    /// Insert or replace; a replaced key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow merge: every key of `overrides` replaces the key here
    /// wholesale, nested objects included.
    pub fn merged(&self, overrides: &AttributeDescriptor) -> Self {
        let mut out = self.clone();
        for (k, v) in overrides.iter() {
            out.insert(k, v.clone());
        }
        out
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = Self::new();
        for (k, v) in iter {
            d.insert(k, v);
        }
        d
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for AttributeDescriptor {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

// ----------------------------------------------------------------------
// serde: descriptors can come from configuration files
// ----------------------------------------------------------------------

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(o) => o.serialize(serializer),
            Value::Function(_) => Err(ser::Error::custom("functions cannot be serialized")),
        }
    }
}

impl Serialize for AttributeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, null or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Value, A::Error> {
        Err(de::Error::custom("sequences are not valid attribute values"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut d = AttributeDescriptor::new();
        while let Some((k, v)) = map.next_entry::<String, Value>()? {
            d.insert(k, v);
        }
        Ok(Value::Object(d))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for AttributeDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(d) => Ok(d),
            other => Err(de::Error::custom(format!(
                "expected a map of attributes, found {}",
                other.type_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "object");
        assert_eq!(Value::Undefined.type_name(), "undefined");
        assert_eq!(Value::from(123).type_name(), "number");
        assert_eq!(Value::from("click").type_name(), "string");
        assert_eq!(Value::from(Listener::new(|_| {})).type_name(), "function");
        assert_eq!(Value::from(AttributeDescriptor::new()).type_name(), "object");
    }

    #[test]
    fn test_number_text() {
        assert_eq!(Value::from(0).to_text(), "0");
        assert_eq!(Value::from(1.0).to_text(), "1");
        assert_eq!(Value::from(0.5).to_text(), "0.5");
        assert_eq!(Value::from(-0.0).to_text(), "0");
        assert_eq!(Value::from(f64::NAN).to_text(), "NaN");
    }

    #[test]
    fn test_large_and_small_number_text() {
        assert_eq!(Value::from(1e19).to_text(), "10000000000000000000");
        assert_eq!(Value::from(1e20).to_text(), "100000000000000000000");
        assert_eq!(Value::from(-1e20).to_text(), "-100000000000000000000");
        assert_eq!(Value::from(1e21).to_text(), "1e+21");
        assert_eq!(Value::from(1.5e22).to_text(), "1.5e+22");
        assert_eq!(Value::from(1e-7).to_text(), "1e-7");
        assert_eq!(Value::from(0.000001).to_text(), "0.000001");
        assert_eq!(Value::from(123.25).to_text(), "123.25");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::from(AttributeDescriptor::new()).is_truthy());
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut d = AttributeDescriptor::from([("id", "a"), ("class", "b")]);
        assert_eq!(d.insert("id", "c"), Some(Value::from("a")));
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["id", "class"]);
    }

    #[test]
    fn test_merged_is_shallow() {
        let base = AttributeDescriptor::new()
            .attr("id", "base")
            .style([("color", "white"), ("opacity", "0")]);
        let overrides = AttributeDescriptor::new().style([("color", "red")]);

        let merged = base.merged(&overrides);
        assert_eq!(merged.get("id"), Some(&Value::from("base")));
        let style = merged.get("style").and_then(Value::as_object).unwrap();
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("color"), Some(&Value::from("red")));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
