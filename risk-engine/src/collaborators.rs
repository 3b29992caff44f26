//! External collaborator interfaces
//!
//! The engine consults two out-of-process services: a geolocation resolver
//! that classifies the location behind a device signature, and a signature
//! validator that checks the token itself. Both are trait objects so a
//! deployment can plug in real clients. The placeholder implementations
//! mirror the stub services used in development.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Result of a geolocation lookup
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLookup {
    /// Whether the device location is anomalous for this user
    pub is_anomaly: bool,
}

/// Resolves a device signature to a location classification
#[async_trait]
pub trait GeolocationResolver: Send + Sync {
    /// Classify the location behind a device signature
    async fn resolve(&self, device_signature: &str) -> Result<GeoLookup>;
}

/// Validates device signature tokens
#[async_trait]
pub trait SignatureValidator: Send + Sync {
    /// Check whether a device signature is well-formed and authentic
    async fn validate(&self, device_signature: &str) -> Result<bool>;
}

/// Development resolver that never reports an anomaly
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGeolocationResolver;

#[async_trait]
impl GeolocationResolver for StaticGeolocationResolver {
    async fn resolve(&self, _device_signature: &str) -> Result<GeoLookup> {
        Ok(GeoLookup { is_anomaly: false })
    }
}

/// Validator that accepts any non-empty signature token
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthSignatureValidator;

#[async_trait]
impl SignatureValidator for LengthSignatureValidator {
    async fn validate(&self, device_signature: &str) -> Result<bool> {
        Ok(!device_signature.is_empty())
    }
}
