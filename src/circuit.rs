//! Circuit input parameters: phase type, conductor material, load data

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CableError, CableResult};

/// AC supply phase configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseType {
    /// Single-phase (line to neutral)
    Single,
    /// Three-phase (balanced load)
    Three,
}

impl FromStr for PhaseType {
    type Err = CableError;

    fn from_str(s: &str) -> CableResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "three" => Ok(Self::Three),
            other => Err(CableError::UnknownPhaseType(other.to_string())),
        }
    }
}

impl fmt::Display for PhaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Three => write!(f, "three"),
        }
    }
}

/// Conductor material of the cable cores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conductor {
    Copper,
    Aluminum,
}

impl Conductor {
    /// Resistivity at 20 °C in Ω·mm²/m
    pub fn resistivity(&self) -> f64 {
        match self {
            Self::Copper => 0.0178,
            Self::Aluminum => 0.029,
        }
    }
}

impl FromStr for Conductor {
    type Err = CableError;

    fn from_str(s: &str) -> CableResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "copper" => Ok(Self::Copper),
            "aluminum" | "aluminium" => Ok(Self::Aluminum),
            other => Err(CableError::UnknownConductor(other.to_string())),
        }
    }
}

impl fmt::Display for Conductor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copper => write!(f, "Copper"),
            Self::Aluminum => write!(f, "Aluminum"),
        }
    }
}

/// Cable insulation material. Descriptive only - the simplified ampacity
/// tables do not distinguish insulation classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Insulation {
    Pvc,
    Xlpe,
}

impl FromStr for Insulation {
    type Err = CableError;

    fn from_str(s: &str) -> CableResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pvc" => Ok(Self::Pvc),
            "xlpe" => Ok(Self::Xlpe),
            other => Err(CableError::UnknownInsulation(other.to_string())),
        }
    }
}

impl fmt::Display for Insulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pvc => write!(f, "PVC"),
            Self::Xlpe => write!(f, "XLPE"),
        }
    }
}

/// Input parameters for a single cable sizing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitParameters {
    /// Load power in W
    pub power_w: f64,
    /// Nominal supply voltage in V
    pub voltage_v: f64,
    /// Load power factor, 0 < pf ≤ 1
    pub power_factor: f64,
    /// Phase configuration
    pub phase: PhaseType,
    /// Cable route length in m
    pub length_m: f64,
    /// Conductor material
    pub conductor: Conductor,
    /// Insulation material (reported in results, no effect on sizing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation: Option<Insulation>,
    /// Grouping correction factor, 0 < k1 ≤ 1
    pub k1: f64,
    /// Ambient temperature correction factor, 0 < k2 ≤ 1
    pub k2: f64,
}

impl CircuitParameters {
    /// Create parameters with no derating (k1 = k2 = 1) and no insulation tag
    pub fn new(
        power_w: f64,
        voltage_v: f64,
        power_factor: f64,
        phase: PhaseType,
        length_m: f64,
        conductor: Conductor,
    ) -> Self {
        Self {
            power_w,
            voltage_v,
            power_factor,
            phase,
            length_m,
            conductor,
            insulation: None,
            k1: 1.0,
            k2: 1.0,
        }
    }

    /// Set the derating correction factors
    pub fn with_derating(mut self, k1: f64, k2: f64) -> Self {
        self.k1 = k1;
        self.k2 = k2;
        self
    }

    /// Tag the insulation material
    pub fn with_insulation(mut self, insulation: Insulation) -> Self {
        self.insulation = Some(insulation);
        self
    }

    /// Check all numeric inputs are in their valid domains.
    ///
    /// The arithmetic in [`crate::sizing`] divides by voltage, power factor
    /// and k1·k2, so zeros here would propagate as infinities.
    pub fn validate(&self) -> CableResult<()> {
        if !(self.power_w > 0.0) || !self.power_w.is_finite() {
            return Err(CableError::InvalidInput(format!(
                "power must be a positive number of watts, got {}",
                self.power_w
            )));
        }
        if !(self.voltage_v > 0.0) || !self.voltage_v.is_finite() {
            return Err(CableError::InvalidInput(format!(
                "voltage must be a positive number of volts, got {}",
                self.voltage_v
            )));
        }
        if !(self.power_factor > 0.0 && self.power_factor <= 1.0) {
            return Err(CableError::InvalidInput(format!(
                "power factor must be in (0, 1], got {}",
                self.power_factor
            )));
        }
        if !(self.length_m > 0.0) || !self.length_m.is_finite() {
            return Err(CableError::InvalidInput(format!(
                "cable length must be a positive number of meters, got {}",
                self.length_m
            )));
        }
        for (name, k) in [("k1", self.k1), ("k2", self.k2)] {
            if !(k > 0.0 && k <= 1.0) {
                return Err(CableError::InvalidInput(format!(
                    "correction factor {} must be in (0, 1], got {}",
                    name, k
                )));
            }
        }
        Ok(())
    }
}
