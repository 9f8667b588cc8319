//! Diameter AVP pair sequences as camelCase objects, and back.
//!
//! The wire-facing representation of Diameter message data is an ordered
//! sequence of `(name, value)` pairs under the dictionary's hyphenated
//! names; the application-facing one is a nested camel-keyed object in
//! which a repeated name collapses into an ordered list. [`AvpTranslator`]
//! converts between the two using a name table built once from a
//! [`diameter_dictionary::Dictionary`].
//!
//! ```
//! use diameter_avp_object::{Avp, AvpTranslator};
//! use diameter_dictionary::Dictionary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let translator = AvpTranslator::new(&Dictionary::base()?);
//! let avps = vec![
//!     Avp::new("Auth-Application-Id", 4u32),
//!     Avp::new("CC-Request-Type", "INITIAL_REQUEST"),
//! ];
//! let object = translator.to_object(&avps)?;
//! assert_eq!(object.keys().collect::<Vec<_>>(), ["authApplicationId", "ccRequestType"]);
//! assert_eq!(translator.from_object(&object)?, avps);
//! # Ok(())
//! # }
//! ```

mod camel;
mod error;
mod json;
mod name_table;
mod object;
mod value;

pub use camel::camelize;
pub use error::AvpError;
pub use json::{json_to_object, object_to_json};
pub use name_table::NameTable;
pub use object::AvpTranslator;
pub use value::{Avp, AvpObject, AvpValue, ObjectValue, Scalar};
