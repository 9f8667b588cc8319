//! AVP descriptor types.

use serde::{Deserialize, Serialize};

/// Diameter base data formats (RFC 6733 sections 4.2 and 4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvpDataType {
    OctetString,
    Integer32,
    Integer64,
    Unsigned32,
    Unsigned64,
    Float32,
    Float64,
    Grouped,
    Address,
    Time,
    UTF8String,
    DiameterIdentity,
    DiameterURI,
    Enumerated,
    IPFilterRule,
}

/// One dictionary entry for a known AVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AvpDescriptor {
    pub code: u32,
    /// Canonical hyphen-separated name, e.g. `CC-Request-Type`.
    pub name: String,
    pub data_type: AvpDataType,
    /// Vendor id for vendor-specific AVPs; absent for IETF-assigned codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u32>,
}
