//! Bidirectional canonical/camel name table.

use std::collections::HashMap;

use diameter_dictionary::Dictionary;

use crate::camel::camelize;

/// Immutable two-way lookup table between canonical hyphenated names and
/// their camel forms.
///
/// Built once from a dictionary and never mutated afterwards, so a shared
/// reference is safe across threads. Lookups are total only over the
/// names the table was built from; anything else resolves to `None` and
/// conversion surfaces it as an error. Duplicate canonical names (or two
/// names colliding on one camel form) resolve last-write-wins, matching
/// dictionary shadowing.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    to_camel: HashMap<String, String>,
    from_camel: HashMap<String, String>,
}

impl NameTable {
    /// Build a table over a dictionary's name set.
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        Self::from_names(dictionary.avps().iter().map(|avp| avp.name.clone()))
    }

    /// Build a table from bare canonical names, for catalogs that do not
    /// come from a [`Dictionary`] and for isolated tests.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut to_camel = HashMap::new();
        let mut from_camel = HashMap::new();
        for name in names {
            let name = name.into();
            let camel = camelize(&name);
            to_camel.insert(name.clone(), camel.clone());
            from_camel.insert(camel, name);
        }
        Self {
            to_camel,
            from_camel,
        }
    }

    /// Camel form of a canonical name, if the name is known.
    pub fn camel(&self, canonical: &str) -> Option<&str> {
        self.to_camel.get(canonical).map(String::as_str)
    }

    /// Canonical form of a camel name, if the name is known.
    pub fn canonical(&self, camel: &str) -> Option<&str> {
        self.from_camel.get(camel).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.to_camel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_camel.is_empty()
    }
}
