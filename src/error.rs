//! Error types for cable sizing

use thiserror::Error;

/// Main error type for cable sizing operations
#[derive(Error, Debug)]
pub enum CableError {
    #[error("Unknown phase type '{0}' - expected 'single' or 'three'")]
    UnknownPhaseType(String),

    #[error("Unknown conductor material '{0}' - expected 'copper' or 'aluminum'")]
    UnknownConductor(String),

    #[error("Unknown insulation material '{0}' - expected 'PVC' or 'XLPE'")]
    UnknownInsulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Current of {current_a:.2} A exceeds the largest standard cable size \
         (max ampacity {max_ampacity_a:.0} A)"
    )]
    CurrentOutOfRange { current_a: f64, max_ampacity_a: f64 },
}

/// Result type for cable sizing operations
pub type CableResult<T> = Result<T, CableError>;
