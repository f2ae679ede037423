//! Element stamps for the MNA blocks.
//!
//! Node arguments are matrix indices, with `None` standing for the
//! reference node. Entries for the reference node are simply omitted.

use nalgebra::{DMatrix, DVector};

use crate::circuit::{check_resistance, CurrentSource, NodeIndex, NodeLabel, Resistor, VoltageSource};
use crate::error::Result;

/// Stamp a conductance between two nodes into the G block.
///
/// For a conductance g between nodes n1 and n2:
///   G[n1,n1] += g
///   G[n2,n2] += g
///   G[n1,n2] -= g
///   G[n2,n1] -= g
pub fn stamp_conductance(g_m: &mut DMatrix<f64>, n1: Option<usize>, n2: Option<usize>, g: f64) {
    if let Some(i) = n1 {
        g_m[(i, i)] += g;
    }
    if let Some(j) = n2 {
        g_m[(j, j)] += g;
    }
    if let (Some(i), Some(j)) = (n1, n2) {
        g_m[(i, j)] -= g;
        g_m[(j, i)] -= g;
    }
}

/// Stamp voltage source `k` into the B block and its row of z.
///
/// Enforces V[pos] - V[neg] = voltage on row `n_nodes + k`.
pub fn stamp_voltage_source(
    b_m: &mut DMatrix<f64>,
    z: &mut DVector<f64>,
    n_neg: Option<usize>,
    n_pos: Option<usize>,
    k: usize,
    voltage: f64,
) {
    if let Some(i) = n_neg {
        b_m[(i, k)] -= 1.0;
    }
    if let Some(i) = n_pos {
        b_m[(i, k)] += 1.0;
    }
    let n_nodes = b_m.nrows();
    z[n_nodes + k] = voltage;
}

/// Stamp a current source into the node rows of z.
///
/// The source drives `current` from n_neg to n_pos.
pub fn stamp_current_source(z: &mut DVector<f64>, n_neg: Option<usize>, n_pos: Option<usize>, current: f64) {
    if let Some(i) = n_neg {
        z[i] -= current;
    }
    if let Some(i) = n_pos {
        z[i] += current;
    }
}

/// Fold every resistor into G.
pub fn stamp_resistors<N: NodeLabel>(
    g_m: &mut DMatrix<f64>,
    nodes: &NodeIndex<N>,
    resistors: &[Resistor<N>],
) -> Result<()> {
    for (index, r) in resistors.iter().enumerate() {
        check_resistance(index, r.resistance)?;
        let n1 = nodes.index(&r.nodes[0])?;
        let n2 = nodes.index(&r.nodes[1])?;
        stamp_conductance(g_m, n1, n2, r.conductance());
    }
    Ok(())
}

/// Fold every voltage source into B and the source rows of z.
pub fn stamp_voltage_sources<N: NodeLabel>(
    b_m: &mut DMatrix<f64>,
    z: &mut DVector<f64>,
    nodes: &NodeIndex<N>,
    sources: &[VoltageSource<N>],
) -> Result<()> {
    for (k, v) in sources.iter().enumerate() {
        let n_neg = nodes.index(v.negative())?;
        let n_pos = nodes.index(v.positive())?;
        stamp_voltage_source(b_m, z, n_neg, n_pos, k, v.voltage);
    }
    Ok(())
}

/// Fold every current source into the node rows of z.
pub fn stamp_current_sources<N: NodeLabel>(
    z: &mut DVector<f64>,
    nodes: &NodeIndex<N>,
    sources: &[CurrentSource<N>],
) -> Result<()> {
    for i in sources {
        let n_neg = nodes.index(i.negative())?;
        let n_pos = nodes.index(i.positive())?;
        stamp_current_source(z, n_neg, n_pos, i.current);
    }
    Ok(())
}
