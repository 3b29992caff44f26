//! Device integrity verification

use std::sync::Arc;

use tracing::warn;

use crate::collaborators::SignatureValidator;

/// Contribution for a valid device signature
pub const VALID_SIGNATURE_RISK: u32 = 10;
/// Contribution for an invalid device signature
pub const INVALID_SIGNATURE_RISK: u32 = 50;
/// Contribution when the validator is unreachable, between the two extremes
pub const SIGNATURE_FALLBACK_RISK: u32 = 40;

/// Verifies device signatures through the signature validator
pub struct DeviceIntegrityVerifier {
    validator: Arc<dyn SignatureValidator>,
}

impl DeviceIntegrityVerifier {
    /// Create a verifier backed by the given validator
    pub fn new(validator: Arc<dyn SignatureValidator>) -> Self {
        Self { validator }
    }

    /// Risk contribution for the device that signed this request
    pub async fn contribution(&self, device_signature: &str) -> u32 {
        match self.validator.validate(device_signature).await {
            Ok(true) => VALID_SIGNATURE_RISK,
            Ok(false) => INVALID_SIGNATURE_RISK,
            Err(e) => {
                warn!("Signature validation failed, using fallback risk: {}", e);
                SIGNATURE_FALLBACK_RISK
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::LengthSignatureValidator;
    use crate::{Error, Result};
    use async_trait::async_trait;

    struct FailingValidator;

    #[async_trait]
    impl SignatureValidator for FailingValidator {
        async fn validate(&self, _device_signature: &str) -> Result<bool> {
            Err(Error::SignatureValidation("service timeout".to_string()))
        }
    }

    fn verifier() -> DeviceIntegrityVerifier {
        DeviceIntegrityVerifier::new(Arc::new(LengthSignatureValidator))
    }

    #[tokio::test]
    async fn test_valid_signature() {
        assert_eq!(verifier().contribution("device-abc").await, VALID_SIGNATURE_RISK);
    }

    #[tokio::test]
    async fn test_empty_signature_rejected() {
        assert_eq!(verifier().contribution("").await, INVALID_SIGNATURE_RISK);
    }

    #[tokio::test]
    async fn test_validator_failure_uses_fallback() {
        let verifier = DeviceIntegrityVerifier::new(Arc::new(FailingValidator));
        assert_eq!(
            verifier.contribution("device-abc").await,
            SIGNATURE_FALLBACK_RISK
        );
    }
}
