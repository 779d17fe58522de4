//! Result types for cable sizing

use serde::{Deserialize, Serialize};

use crate::circuit::{Conductor, Insulation};

/// Voltage lost along the cable run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoltageDrop {
    /// Absolute drop in V
    pub volts: f64,
    /// Drop as a percentage of the nominal supply voltage
    pub percent: f64,
}

/// Outcome of one sizing calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingResult {
    /// Line current in A
    pub current_a: f64,
    /// Derated design current in A (after k1, k2)
    pub corrected_current_a: f64,
    /// Selected standard cross-section in mm²
    pub cross_section_mm2: f64,
    /// Conductor material the selection was made for
    pub conductor: Conductor,
    /// Insulation material, if specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation: Option<Insulation>,
    /// Voltage drop in V
    pub voltage_drop_v: f64,
    /// Voltage drop as a percentage of the supply voltage
    pub voltage_drop_percent: f64,
}

impl SizingResult {
    /// Human-readable report of the calculation
    pub fn summary(&self) -> String {
        let cable = match self.insulation {
            Some(ins) => format!("{}/{}", self.conductor, ins),
            None => self.conductor.to_string(),
        };
        format!(
            "Calculated current: {:.2} A\n\
             Corrected current (with k1, k2): {:.2} A\n\
             Recommended cable cross-section: {} mm² ({})\n\
             Voltage drop: {:.2} V ({:.2}%)",
            self.current_a,
            self.corrected_current_a,
            self.cross_section_mm2,
            cable,
            self.voltage_drop_v,
            self.voltage_drop_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_insulation_when_tagged() {
        let result = SizingResult {
            current_a: 24.15,
            corrected_current_a: 24.15,
            cross_section_mm2: 4.0,
            conductor: Conductor::Copper,
            insulation: Some(Insulation::Pvc),
            voltage_drop_v: 8.01,
            voltage_drop_percent: 3.48,
        };
        let text = result.summary();
        assert!(text.contains("4 mm² (Copper/PVC)"));
        assert!(text.contains("24.15 A"));
    }
}
