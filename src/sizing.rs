//! Sizing calculation chain: line current, derating, voltage drop
//!
//! The individual steps are pure arithmetic with no input guarding; callers
//! that want domain checking go through [`compute_cable_sizing`], which
//! validates the parameter set first.

use log::debug;

use crate::ampacity;
use crate::circuit::{CircuitParameters, Conductor, PhaseType};
use crate::error::CableResult;
use crate::results::{SizingResult, VoltageDrop};

/// Line current in A drawn by a load of `power_w` at `voltage_v` and
/// `power_factor`, for the given phase configuration.
pub fn line_current(power_w: f64, voltage_v: f64, power_factor: f64, phase: PhaseType) -> f64 {
    match phase {
        PhaseType::Single => power_w / (voltage_v * power_factor),
        PhaseType::Three => power_w / (3.0_f64.sqrt() * voltage_v * power_factor),
    }
}

/// Derated design current: the table lookup current after applying the
/// installation correction factors k1 and k2.
pub fn apply_derating(current_a: f64, k1: f64, k2: f64) -> f64 {
    current_a / (k1 * k2)
}

/// Voltage drop along the cable, using the uncorrected line current.
///
/// R = ρ·L/S, then 2·I·R·pf single-phase or √3·I·R·pf three-phase.
pub fn voltage_drop(
    length_m: f64,
    current_a: f64,
    voltage_v: f64,
    cross_section_mm2: f64,
    conductor: Conductor,
    phase: PhaseType,
    power_factor: f64,
) -> VoltageDrop {
    let resistance = conductor.resistivity() * length_m / cross_section_mm2;
    let volts = match phase {
        PhaseType::Single => 2.0 * current_a * resistance * power_factor,
        PhaseType::Three => 3.0_f64.sqrt() * current_a * resistance * power_factor,
    };
    VoltageDrop {
        volts,
        percent: 100.0 * volts / voltage_v,
    }
}

/// Run the full sizing chain for one parameter set.
///
/// Validates the inputs, computes the line current, applies derating,
/// selects the smallest standard cross-section that carries the derated
/// current, and evaluates the voltage drop at the selected size.
pub fn compute_cable_sizing(params: &CircuitParameters) -> CableResult<SizingResult> {
    params.validate()?;

    let current_a = line_current(
        params.power_w,
        params.voltage_v,
        params.power_factor,
        params.phase,
    );
    let corrected_current_a = apply_derating(current_a, params.k1, params.k2);
    debug!(
        "line current {:.2} A, derated {:.2} A (k1={}, k2={})",
        current_a, corrected_current_a, params.k1, params.k2
    );

    let cross_section_mm2 = ampacity::select_cross_section(corrected_current_a, params.conductor)?;
    let drop = voltage_drop(
        params.length_m,
        current_a,
        params.voltage_v,
        cross_section_mm2,
        params.conductor,
        params.phase,
        params.power_factor,
    );
    debug!(
        "selected {} mm² {}, drop {:.2} V ({:.2} %)",
        cross_section_mm2, params.conductor, drop.volts, drop.percent
    );

    Ok(SizingResult {
        current_a,
        corrected_current_a,
        cross_section_mm2,
        conductor: params.conductor,
        insulation: params.insulation,
        voltage_drop_v: drop.volts,
        voltage_drop_percent: drop.percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_phase_current() {
        let i = line_current(5000.0, 230.0, 0.9, PhaseType::Single);
        assert_relative_eq!(i, 5000.0 / (230.0 * 0.9), max_relative = 1e-12);
        assert_relative_eq!(i, 24.1546, max_relative = 1e-4);
    }

    #[test]
    fn test_three_phase_current() {
        let i = line_current(15000.0, 400.0, 0.85, PhaseType::Three);
        let expected = 15000.0 / (3.0_f64.sqrt() * 400.0 * 0.85);
        assert_relative_eq!(i, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_derating_divides_by_factor_product() {
        assert_relative_eq!(apply_derating(40.0, 0.8, 0.5), 100.0, max_relative = 1e-12);
        // k1 = k2 = 1 leaves the current unchanged
        assert_relative_eq!(apply_derating(24.15, 1.0, 1.0), 24.15, max_relative = 1e-12);
    }

    #[test]
    fn test_voltage_drop_worked_example() {
        // 50 m, 20 A, 230 V, 4 mm² copper, single phase, pf 0.9
        let drop = voltage_drop(
            50.0,
            20.0,
            230.0,
            4.0,
            Conductor::Copper,
            PhaseType::Single,
            0.9,
        );
        // R = 0.0178 * 50 / 4 = 0.2225 Ω, V = 2 * 20 * 0.2225 * 0.9
        assert_relative_eq!(drop.volts, 8.01, max_relative = 1e-10);
        assert_relative_eq!(drop.percent, 8.01 / 230.0 * 100.0, max_relative = 1e-10);
    }

    #[test]
    fn test_three_phase_drop_uses_sqrt3() {
        let single = voltage_drop(
            50.0,
            20.0,
            400.0,
            4.0,
            Conductor::Copper,
            PhaseType::Single,
            1.0,
        );
        let three = voltage_drop(
            50.0,
            20.0,
            400.0,
            4.0,
            Conductor::Copper,
            PhaseType::Three,
            1.0,
        );
        assert_relative_eq!(
            three.volts / single.volts,
            3.0_f64.sqrt() / 2.0,
            max_relative = 1e-12
        );
    }
}
