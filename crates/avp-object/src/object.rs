//! Forward and reverse structural conversion.

use indexmap::map::Entry;

use diameter_dictionary::Dictionary;

use crate::error::AvpError;
use crate::name_table::NameTable;
use crate::value::{Avp, AvpObject, AvpValue, ObjectValue};

/// Converts AVP pair sequences to camel-keyed objects and back.
///
/// Owns the immutable [`NameTable`] both directions share. Names absent
/// from the table fail with [`AvpError::UnknownName`] or
/// [`AvpError::UnknownKey`] instead of passing through.
#[derive(Debug, Clone)]
pub struct AvpTranslator {
    names: NameTable,
}

impl AvpTranslator {
    /// Build a translator over a dictionary's name set.
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            names: NameTable::from_dictionary(dictionary),
        }
    }

    /// Build a translator over an existing name table.
    pub fn with_table(names: NameTable) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Convert a pair sequence into a camel-keyed object.
    ///
    /// Keys appear in first-occurrence order. A name repeated at one level
    /// folds into a single key holding the values in occurrence order; a
    /// name occurring once stores its value bare, never as a one-element
    /// list. Grouped values convert recursively into nested objects.
    pub fn to_object(&self, avps: &[Avp]) -> Result<AvpObject, AvpError> {
        let mut object = AvpObject::new();
        for avp in avps {
            let key = self
                .names
                .camel(&avp.name)
                .ok_or_else(|| AvpError::UnknownName(avp.name.clone()))?;
            let value = match &avp.value {
                AvpValue::Scalar(scalar) => ObjectValue::Scalar(scalar.clone()),
                AvpValue::Grouped(inner) => ObjectValue::Object(self.to_object(inner)?),
            };
            match object.entries.entry(key.to_owned()) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => match slot.get_mut() {
                    ObjectValue::List(values) => values.push(value),
                    existing => {
                        let first = std::mem::replace(existing, ObjectValue::List(Vec::new()));
                        *existing = ObjectValue::List(vec![first, value]);
                    }
                },
            }
        }
        Ok(object)
    }

    /// Convert a camel-keyed object back into a pair sequence.
    ///
    /// Output follows the object's key order; a list value expands into
    /// one pair per element under the same canonical name, in list order.
    /// Object values recurse into grouped sequences; scalars — 64-bit
    /// integers and raw bytes included — are emitted unchanged.
    pub fn from_object(&self, object: &AvpObject) -> Result<Vec<Avp>, AvpError> {
        let mut avps = Vec::new();
        for (key, value) in object.iter() {
            let name = self
                .names
                .canonical(key)
                .ok_or_else(|| AvpError::UnknownKey(key.to_owned()))?;
            match value {
                ObjectValue::List(values) => {
                    for element in values {
                        avps.push(self.emit(key, name, element)?);
                    }
                }
                single => avps.push(self.emit(key, name, single)?),
            }
        }
        Ok(avps)
    }

    fn emit(&self, key: &str, name: &str, value: &ObjectValue) -> Result<Avp, AvpError> {
        let value = match value {
            ObjectValue::Scalar(scalar) => AvpValue::Scalar(scalar.clone()),
            ObjectValue::Object(inner) => AvpValue::Grouped(self.from_object(inner)?),
            ObjectValue::List(_) => return Err(AvpError::NestedList(key.to_owned())),
        };
        Ok(Avp {
            name: name.to_owned(),
            value,
        })
    }
}
