//! Stable DTOs and IDs used across the sarifw workspace.
//!
//! This crate is intentionally boring:
//! - the SARIF 2.1.0 subset sarifw emits
//! - stable string IDs for the wrapped tools

#![forbid(unsafe_code)]

pub mod ids;
pub mod sarif;

pub use sarif::{
    SARIF_SCHEMA, SARIF_VERSION, SarifArtifactLocation, SarifDriver, SarifLevel, SarifLocation,
    SarifLog, SarifMessage, SarifPhysicalLocation, SarifRegion, SarifResult, SarifRule, SarifRun,
    SarifTool,
};
