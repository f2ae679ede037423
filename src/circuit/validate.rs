//! Circuit validation.

use crate::error::{MnaError, Result};

use super::Circuit;

/// Validate a circuit before any matrix is built.
///
/// Checks:
/// - At least one component is present
/// - Every resistance is strictly positive (zero would stamp an infinite conductance)
/// - Every source value is finite
pub fn validate_circuit<N>(circuit: &Circuit<N>) -> Result<()> {
    if circuit.resistors.is_empty()
        && circuit.voltage_sources.is_empty()
        && circuit.current_sources.is_empty()
    {
        return Err(MnaError::EmptyCircuit);
    }

    for (index, r) in circuit.resistors.iter().enumerate() {
        check_resistance(index, r.resistance)?;
    }

    for (index, v) in circuit.voltage_sources.iter().enumerate() {
        if !v.voltage.is_finite() {
            return Err(MnaError::invalid_component(
                "voltage source",
                index,
                format!("voltage must be finite, got {}", v.voltage),
            ));
        }
    }

    for (index, i) in circuit.current_sources.iter().enumerate() {
        if !i.current.is_finite() {
            return Err(MnaError::invalid_component(
                "current source",
                index,
                format!("current must be finite, got {}", i.current),
            ));
        }
    }

    Ok(())
}

/// Reject resistances that would stamp an infinite or NaN conductance.
pub(crate) fn check_resistance(index: usize, resistance: f64) -> Result<()> {
    // NaN fails this comparison as well
    if !(resistance > 0.0) {
        return Err(MnaError::invalid_component(
            "resistor",
            index,
            format!("resistance must be positive, got {resistance}"),
        ));
    }
    // Subnormal values overflow 1/R
    if !(1.0 / resistance).is_finite() {
        return Err(MnaError::invalid_component(
            "resistor",
            index,
            format!("resistance {resistance:e} is too small, its conductance overflows"),
        ));
    }
    Ok(())
}
