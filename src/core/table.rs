use crate::domain::model::{Replacement, ReplacementTable};

/// Listing file rewritten when no `--target` is given.
pub const DEFAULT_TARGET_PATH: &str = "app/_data/calculators.ts";

const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // Acceleration Calculator
    (
        r"description: 'Calculate acceleration, initial velocity, final velocity, and time using a = (v - u) / t.',",
        r"description: 'Calculate acceleration, velocity, and time using a = (v - u) / t formula.',",
    ),
    // Watt Calculator
    (
        r"description: 'Calculate electrical power, voltage, current, or resistance using P = V × I, P = V²/R, and P = I²R formulas.',",
        r"description: 'Calculate power, voltage, current, or resistance using P = V × I.',",
    ),
    // Watt Hour Calculator
    (
        r"description: 'Calculate energy (watt-hours), power, or time using E = P × t with support for kWh, Wh, Joules, and BTU.',",
        r"description: 'Calculate energy, power, or time using E = P × t.',",
    ),
    // Force Calculator
    (
        r"description: 'Calculate force, mass, or acceleration using Newton\'s second law: F = m × a with comprehensive unit support.',",
        r"description: 'Calculate force, mass, or acceleration using F = m × a.',",
    ),
    // Kinetic Energy Calculator
    (
        r"description: 'Calculate kinetic energy, mass, or velocity using KE = ½mv² with multiple unit support and step-by-step solutions.',",
        r"description: 'Calculate kinetic energy, mass, or velocity using KE = ½mv².',",
    ),
    // Free Fall Calculator
    (
        r"description: 'Calculate free fall motion: velocity, time, and height using gravity acceleration with step-by-step solutions.',",
        r"description: 'Calculate free fall velocity, time, and height.',",
    ),
];

pub fn builtin_table() -> ReplacementTable {
    BUILTIN_ENTRIES
        .iter()
        .map(|(old, new)| Replacement::new(*old, *new))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_unique_keys;

    #[test]
    fn test_builtin_table_is_well_formed() {
        let table = builtin_table();
        assert_eq!(table.len(), BUILTIN_ENTRIES.len());
        assert!(validate_unique_keys(table.iter().map(|r| r.old.as_str())).is_ok());
        assert!(table.overlapping_pairs().is_empty());
        for entry in &table {
            assert!(entry.old.starts_with("description: '"));
            assert!(entry.new.starts_with("description: '"));
            assert!(entry.new.len() < entry.old.len());
        }
    }
}
