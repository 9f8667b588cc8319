//! Diameter AVP dictionary.
//!
//! An ordered catalog of known AVP descriptors (code, canonical name, data
//! type), consumed by `diameter-avp-object` when it builds its name
//! translation table. Ships an embedded base catalog covering the Diameter
//! base protocol (RFC 6733) and the credit-control application (RFC 4006);
//! alternate catalogs load from the same JSON document shape.

mod error;
mod types;

pub use error::DictionaryError;
pub use types::{AvpDataType, AvpDescriptor};

use serde::{Deserialize, Serialize};

static BASE_DICTIONARY_JSON: &str = include_str!("../data/base.json");

/// An ordered catalog of AVP descriptors.
///
/// Catalog order is preserved from the source document; later entries with
/// a duplicate name shadow earlier ones when a name table is built from
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    avps: Vec<AvpDescriptor>,
}

impl Dictionary {
    /// Parse a dictionary document of the form `{"avps": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded base catalog: RFC 6733 base-protocol AVPs plus the
    /// RFC 4006 credit-control application.
    pub fn base() -> Result<Self, DictionaryError> {
        Self::from_json(BASE_DICTIONARY_JSON)
    }

    /// Build a catalog directly from descriptors, preserving their order.
    pub fn from_descriptors(avps: Vec<AvpDescriptor>) -> Self {
        Self { avps }
    }

    /// Descriptors in catalog order.
    pub fn avps(&self) -> &[AvpDescriptor] {
        &self.avps
    }

    /// Look up a descriptor by its canonical hyphenated name.
    pub fn find(&self, name: &str) -> Option<&AvpDescriptor> {
        self.avps.iter().find(|avp| avp.name == name)
    }

    pub fn len(&self) -> usize {
        self.avps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avps.is_empty()
    }
}
