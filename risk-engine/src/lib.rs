//! Risk Engine for NameGuard
//!
//! Real-time risk assessment for domain marketplace transactions

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod config;
pub mod history;
pub mod collaborators;
pub mod reputation;
pub mod anomaly;
pub mod device;
pub mod engine;

pub use error::{Error, Result};
pub use types::*;
pub use config::RiskConfig;
pub use collaborators::{GeoLookup, GeolocationResolver, SignatureValidator};
pub use engine::RiskAssessmentEngine;
