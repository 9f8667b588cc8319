//! Typed AVP value model.
//!
//! Both representations carry the same scalar payloads; nesting is tagged
//! at construction time (`Grouped` on the pair side, `Object` on the
//! camel side), so conversion never has to sniff runtime shapes.

use indexmap::IndexMap;

/// Opaque scalar payloads.
///
/// Every variant is emitted as-is by both conversion directions. The
/// 64-bit integer variants and `Bytes` are scalars even though many hosts
/// box them; this enum is the closed set of such opaque types, and new
/// ones are added here.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

/// Payload of one AVP: an opaque scalar or a nested (grouped) sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum AvpValue {
    Scalar(Scalar),
    Grouped(Vec<Avp>),
}

/// One attribute-value pair carrying a canonical dictionary name.
#[derive(Debug, Clone, PartialEq)]
pub struct Avp {
    pub name: String,
    pub value: AvpValue,
}

impl Avp {
    pub fn new(name: impl Into<String>, value: impl Into<AvpValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A grouped AVP wrapping a nested pair sequence.
    pub fn grouped(name: impl Into<String>, avps: Vec<Avp>) -> Self {
        Self {
            name: name.into(),
            value: AvpValue::Grouped(avps),
        }
    }
}

/// Value stored under one camel key.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectValue {
    Scalar(Scalar),
    Object(AvpObject),
    /// Values of a name repeated at one nesting level, in occurrence order.
    List(Vec<ObjectValue>),
}

/// Insertion-ordered camel-keyed mapping.
///
/// Key order is part of the conversion contract: forward conversion
/// inserts keys in first-occurrence order, and reverse conversion walks
/// them in that same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvpObject {
    pub(crate) entries: IndexMap<String, ObjectValue>,
}

impl AvpObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ObjectValue>,
    ) -> Option<ObjectValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ObjectValue> {
        self.entries.get(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Scalar> for AvpValue {
    fn from(scalar: Scalar) -> Self {
        AvpValue::Scalar(scalar)
    }
}

impl From<Vec<Avp>> for AvpValue {
    fn from(avps: Vec<Avp>) -> Self {
        AvpValue::Grouped(avps)
    }
}

impl From<Scalar> for ObjectValue {
    fn from(scalar: Scalar) -> Self {
        ObjectValue::Scalar(scalar)
    }
}

impl From<AvpObject> for ObjectValue {
    fn from(object: AvpObject) -> Self {
        ObjectValue::Object(object)
    }
}

impl From<Vec<ObjectValue>> for ObjectValue {
    fn from(values: Vec<ObjectValue>) -> Self {
        ObjectValue::List(values)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Integer(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Integer(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Unsigned(v.into())
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Scalar::Unsigned(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Scalar::Bytes(v)
    }
}

macro_rules! forward_scalar_into {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AvpValue {
                fn from(v: $ty) -> Self {
                    AvpValue::Scalar(v.into())
                }
            }

            impl From<$ty> for ObjectValue {
                fn from(v: $ty) -> Self {
                    ObjectValue::Scalar(v.into())
                }
            }
        )*
    };
}

forward_scalar_into!(bool, i32, i64, u32, u64, f64, &str, String, Vec<u8>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_conversions_pick_the_matching_variant() {
        assert_eq!(Scalar::from(true), Scalar::Bool(true));
        assert_eq!(Scalar::from(-5i32), Scalar::Integer(-5));
        assert_eq!(Scalar::from(7u64), Scalar::Unsigned(7));
        assert_eq!(Scalar::from("imsi"), Scalar::Str("imsi".to_owned()));
        assert_eq!(Scalar::from(vec![1u8, 2]), Scalar::Bytes(vec![1, 2]));
    }

    #[test]
    fn avp_constructors() {
        let avp = Avp::new("Result-Code", 2001u32);
        assert_eq!(avp.value, AvpValue::Scalar(Scalar::Unsigned(2001)));

        let grouped = Avp::grouped("Failed-AVP", vec![avp.clone()]);
        assert_eq!(grouped.value, AvpValue::Grouped(vec![avp]));
    }

    #[test]
    fn object_preserves_insertion_order() {
        let mut object = AvpObject::new();
        object.insert("sessionId", "abc;1");
        object.insert("originHost", "client.example.com");
        object.insert("resultCode", 2001u32);
        let keys: Vec<&str> = object.keys().collect();
        assert_eq!(keys, vec!["sessionId", "originHost", "resultCode"]);
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut object = AvpObject::new();
        assert_eq!(object.insert("ccRequestNumber", 0u32), None);
        let previous = object.insert("ccRequestNumber", 1u32);
        assert_eq!(previous, Some(ObjectValue::Scalar(Scalar::Unsigned(0))));
        assert_eq!(object.len(), 1);
    }
}
