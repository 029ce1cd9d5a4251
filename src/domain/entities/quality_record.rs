//! # Quality Record Entity
//!
//! Opaque metrics payload published by the quality oracle.
//!
//! A record is a JSON object with a `proposalId` member pointing at the
//! proposal it describes. Everything else in the object is the metrics
//! payload, which this service forwards without interpretation.
//! A missing or null reference, or missing reference fields, decode as
//! empty strings; such a record is indexed under a key no proposal has.
//!
//! ```text
//! { "proposalId": { "providerId": "0xP1", "serviceType": "openvpn" },
//!   "connectCount": { "success": 10, "fail": 1 } }
//! ```
//!
//! # Examples
//!
//! ```
//! use proposal_discovery::domain::entities::QualityRecord;
//! use proposal_discovery::domain::value_objects::ProposalKey;
//! use serde_json::json;
//!
//! let record = QualityRecord::new(json!({
//!     "proposalId": {"providerId": "0xP1", "serviceType": "openvpn"},
//!     "latency": 42
//! }));
//!
//! let decoded = record.decode().unwrap();
//! assert_eq!(decoded.key(), &ProposalKey::new("0xP1", "openvpn"));
//! assert_eq!(decoded.payload(), &json!({"latency": 42}));
//! ```

use crate::domain::errors::{DecodeResult, QualityDecodeError};
use crate::domain::value_objects::{ProposalKey, ProviderId, ServiceType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the member carrying the proposal reference.
pub const PROPOSAL_REFERENCE_FIELD: &str = "proposalId";

/// An undecoded quality record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityRecord(Value);

/// Reference embedded in a record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProposalReference {
    #[serde(default)]
    provider_id: Option<ProviderId>,
    #[serde(default)]
    service_type: Option<ServiceType>,
}

/// A record split into its join key and its metrics payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedQuality {
    key: ProposalKey,
    payload: Value,
}

impl DecodedQuality {
    /// Returns the join key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &ProposalKey {
        &self.key
    }

    /// Returns the metrics payload.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Splits into key and payload.
    #[must_use]
    pub fn into_parts(self) -> (ProposalKey, Value) {
        (self.key, self.payload)
    }
}

impl QualityRecord {
    /// Wraps a raw JSON value.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Returns the raw JSON value.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Decodes the proposal reference and strips it from the payload.
    ///
    /// # Errors
    ///
    /// - `NotAnObject` if the record is not a JSON object
    /// - `InvalidReference` if the reference is not an object or its
    ///   `providerId`/`serviceType` are not strings
    pub fn decode(&self) -> DecodeResult<DecodedQuality> {
        let mut payload = self
            .0
            .as_object()
            .cloned()
            .ok_or(QualityDecodeError::NotAnObject)?;

        let reference = match payload.remove(PROPOSAL_REFERENCE_FIELD) {
            None | Some(Value::Null) => ProposalReference::default(),
            Some(reference) => serde_json::from_value(reference)
                .map_err(|e| QualityDecodeError::invalid_reference(e.to_string()))?,
        };

        Ok(DecodedQuality {
            key: ProposalKey::new(
                reference.provider_id.unwrap_or_default(),
                reference.service_type.unwrap_or_default(),
            ),
            payload: Value::Object(payload),
        })
    }
}

impl From<Value> for QualityRecord {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}
