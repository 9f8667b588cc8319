//! JSON bridge for camel-keyed objects.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{Map, Number, Value};

use crate::error::AvpError;
use crate::value::{AvpObject, ObjectValue, Scalar};

/// Render a camel-keyed object as a `serde_json::Value`.
///
/// Scalars map to JSON primitives; raw bytes render as standard-alphabet
/// base64 text. Key order carries over unchanged.
pub fn object_to_json(object: &AvpObject) -> Value {
    let mut map = Map::new();
    for (key, value) in object.iter() {
        map.insert(key.to_owned(), value_to_json(value));
    }
    Value::Object(map)
}

fn value_to_json(value: &ObjectValue) -> Value {
    match value {
        ObjectValue::Scalar(scalar) => scalar_to_json(scalar),
        ObjectValue::Object(inner) => object_to_json(inner),
        ObjectValue::List(values) => Value::Array(values.iter().map(value_to_json).collect()),
    }
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Integer(i) => Value::Number((*i).into()),
        Scalar::Unsigned(u) => Value::Number((*u).into()),
        // non-finite floats have no JSON number form
        Scalar::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        Scalar::Str(s) => Value::String(s.clone()),
        Scalar::Bytes(b) => Value::String(STANDARD.encode(b)),
    }
}

/// Parse a JSON object into a camel-keyed [`AvpObject`].
///
/// Integral numbers become 64-bit integer scalars, other numbers floats.
/// `null` and non-object roots have no AVP form and are rejected. Byte
/// payloads are not recovered from text; base64 strings stay [`Scalar::Str`].
pub fn json_to_object(json: &Value) -> Result<AvpObject, AvpError> {
    let Value::Object(map) = json else {
        return Err(AvpError::UnsupportedJson("document root must be an object"));
    };
    let mut object = AvpObject::new();
    for (key, value) in map {
        object.insert(key.clone(), json_to_value(value)?);
    }
    Ok(object)
}

fn json_to_value(json: &Value) -> Result<ObjectValue, AvpError> {
    match json {
        Value::Null => Err(AvpError::UnsupportedJson("null has no AVP form")),
        Value::Bool(b) => Ok(ObjectValue::Scalar(Scalar::Bool(*b))),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(ObjectValue::Scalar(Scalar::Integer(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(ObjectValue::Scalar(Scalar::Unsigned(u)))
            } else if let Some(f) = n.as_f64() {
                Ok(ObjectValue::Scalar(Scalar::Float(f)))
            } else {
                Err(AvpError::UnsupportedJson("unrepresentable number"))
            }
        }
        Value::String(s) => Ok(ObjectValue::Scalar(Scalar::Str(s.clone()))),
        Value::Array(values) => {
            let values = values
                .iter()
                .map(json_to_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ObjectValue::List(values))
        }
        Value::Object(_) => Ok(ObjectValue::Object(json_to_object(json)?)),
    }
}
