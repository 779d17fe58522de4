//! Cable Sizing - electrical cable cross-section calculation library
//!
//! Given a circuit's load parameters this library derives the line current,
//! applies installation derating factors, selects the smallest standard
//! cross-section from simplified IEC/ABB ampacity tables, and evaluates the
//! voltage drop along the cable run. All computation is pure and synchronous.
//!
//! ## Example
//! ```rust
//! use cable_sizing::prelude::*;
//!
//! let params = CircuitParameters::new(
//!     5000.0,            // power in W
//!     230.0,             // voltage in V
//!     0.9,               // power factor
//!     PhaseType::Single,
//!     25.0,              // cable length in m
//!     Conductor::Copper,
//! )
//! .with_derating(1.0, 1.0);
//!
//! let result = compute_cable_sizing(&params).unwrap();
//! assert_eq!(result.cross_section_mm2, 4.0);
//! println!("{}", result.summary());
//! ```

pub mod ampacity;
pub mod circuit;
pub mod error;
pub mod results;
pub mod sizing;

// Re-export common types
pub mod prelude {
    pub use crate::ampacity::{select_cross_section, AmpacityEntry};
    pub use crate::circuit::{CircuitParameters, Conductor, Insulation, PhaseType};
    pub use crate::error::{CableError, CableResult};
    pub use crate::results::{SizingResult, VoltageDrop};
    pub use crate::sizing::{apply_derating, compute_cable_sizing, line_current, voltage_drop};
}
