//! Standard cross-section ampacity tables and selection
//!
//! Values are simplified according to ABB and IEC standards. Each table is
//! ordered ascending by cross-section; ampacity increases with it.

use serde::{Deserialize, Serialize};

use crate::circuit::Conductor;
use crate::error::{CableError, CableResult};

/// One row of an ampacity table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmpacityEntry {
    /// Conductor cross-section in mm²
    pub cross_section_mm2: f64,
    /// Maximum continuous current in A
    pub ampacity_a: f64,
}

const fn entry(cross_section_mm2: f64, ampacity_a: f64) -> AmpacityEntry {
    AmpacityEntry {
        cross_section_mm2,
        ampacity_a,
    }
}

/// Copper conductor ampacities, 1.5 mm² through 240 mm²
pub static COPPER_TABLE: [AmpacityEntry; 15] = [
    entry(1.5, 18.0),
    entry(2.5, 24.0),
    entry(4.0, 32.0),
    entry(6.0, 41.0),
    entry(10.0, 57.0),
    entry(16.0, 76.0),
    entry(25.0, 101.0),
    entry(35.0, 125.0),
    entry(50.0, 151.0),
    entry(70.0, 192.0),
    entry(95.0, 232.0),
    entry(120.0, 269.0),
    entry(150.0, 300.0),
    entry(185.0, 341.0),
    entry(240.0, 400.0),
];

/// Aluminum conductor ampacities, 16 mm² through 240 mm²
pub static ALUMINUM_TABLE: [AmpacityEntry; 10] = [
    entry(16.0, 61.0),
    entry(25.0, 80.0),
    entry(35.0, 99.0),
    entry(50.0, 119.0),
    entry(70.0, 150.0),
    entry(95.0, 179.0),
    entry(120.0, 207.0),
    entry(150.0, 230.0),
    entry(185.0, 263.0),
    entry(240.0, 308.0),
];

/// Get the ampacity table for a conductor material
pub fn table(conductor: Conductor) -> &'static [AmpacityEntry] {
    match conductor {
        Conductor::Copper => &COPPER_TABLE,
        Conductor::Aluminum => &ALUMINUM_TABLE,
    }
}

/// Select the smallest standard cross-section whose ampacity covers the
/// given (already derated) current. Returns the cross-section in mm².
///
/// Errors with [`CableError::CurrentOutOfRange`] when the current exceeds
/// the 240 mm² tier of the material's table.
pub fn select_cross_section(current_a: f64, conductor: Conductor) -> CableResult<f64> {
    let table = table(conductor);
    table
        .iter()
        .find(|e| current_a <= e.ampacity_a)
        .map(|e| e.cross_section_mm2)
        .ok_or_else(|| CableError::CurrentOutOfRange {
            current_a,
            // Tables are non-empty by construction
            max_ampacity_a: table[table.len() - 1].ampacity_a,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_strictly_increasing() {
        for table in [&COPPER_TABLE[..], &ALUMINUM_TABLE[..]] {
            for pair in table.windows(2) {
                assert!(pair[0].cross_section_mm2 < pair[1].cross_section_mm2);
                assert!(pair[0].ampacity_a < pair[1].ampacity_a);
            }
        }
    }

    #[test]
    fn test_selects_smallest_satisfying_entry() {
        // 24.15 A fits in 2.5 mm² copper (24 A) only at the boundary; it
        // exceeds it, so 4 mm² (32 A) is the smallest valid size.
        let size = select_cross_section(24.15, Conductor::Copper).unwrap();
        assert_eq!(size, 4.0);
    }

    #[test]
    fn test_exact_ampacity_boundary_is_inclusive() {
        let size = select_cross_section(24.0, Conductor::Copper).unwrap();
        assert_eq!(size, 2.5);
    }

    #[test]
    fn test_aluminum_table_starts_at_16mm2() {
        let size = select_cross_section(5.0, Conductor::Aluminum).unwrap();
        assert_eq!(size, 16.0);
    }

    #[test]
    fn test_current_above_largest_tier_errors() {
        let err = select_cross_section(401.0, Conductor::Copper).unwrap_err();
        assert!(matches!(
            err,
            CableError::CurrentOutOfRange {
                max_ampacity_a, ..
            } if max_ampacity_a == 400.0
        ));

        let err = select_cross_section(309.0, Conductor::Aluminum).unwrap_err();
        assert!(matches!(err, CableError::CurrentOutOfRange { .. }));
    }
}
