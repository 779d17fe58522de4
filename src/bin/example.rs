//! Cable Sizing Example - 5 kW single-phase feeder

use anyhow::Context;
use cable_sizing::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Cable Sizing Example: 5 kW Single-Phase Feeder ===\n");

    // Grouped with one other circuit (k1) at 35 °C ambient (k2)
    let params = CircuitParameters::new(
        5000.0,            // W
        230.0,             // V
        0.9,               // power factor
        PhaseType::Single,
        25.0,              // m
        Conductor::Copper,
    )
    .with_derating(0.8, 0.94)
    .with_insulation(Insulation::Pvc);

    let result = compute_cable_sizing(&params).context("sizing calculation failed")?;

    println!("{}\n", result.summary());
    println!(
        "JSON: {}",
        serde_json::to_string_pretty(&result).context("failed to serialize result")?
    );

    Ok(())
}
