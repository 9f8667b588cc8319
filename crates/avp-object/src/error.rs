//! Conversion error type.

use thiserror::Error;

/// Errors surfaced by AVP/object conversion.
///
/// Names absent from the dictionary fail loudly in both directions;
/// passing them through or dropping them would corrupt protocol data
/// without a trace.
#[derive(Debug, Error)]
pub enum AvpError {
    #[error("unknown AVP name `{0}`")]
    UnknownName(String),
    #[error("unknown camelCase key `{0}`")]
    UnknownKey(String),
    /// A repeated-value list nested directly inside another list; no pair
    /// sequence represents that shape.
    #[error("nested repetition list under key `{0}`")]
    NestedList(String),
    #[error("unsupported JSON shape: {0}")]
    UnsupportedJson(&'static str),
}
