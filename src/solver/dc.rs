//! DC operating point analysis.

use crate::circuit::{validate_circuit, Circuit, NodeIndex, NodeLabel, ReferenceChoice};
use crate::error::{MnaError, Result};

use super::linear::solve_dense;
use super::mna::MnaSystem;
use super::PIVOT_TOLERANCE;

/// Configuration for a DC solve.
#[derive(Debug, Clone)]
pub struct DcConfig<N> {
    /// Which node is held at 0 V.
    pub reference: ReferenceChoice<N>,
    /// Relative pivot threshold below which the system counts as singular.
    pub pivot_tolerance: f64,
}

impl<N> Default for DcConfig<N> {
    fn default() -> Self {
        Self {
            reference: ReferenceChoice::Lowest,
            pivot_tolerance: PIVOT_TOLERANCE,
        }
    }
}

impl<N> DcConfig<N> {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a specific reference node.
    pub fn with_reference(mut self, node: N) -> Self {
        self.reference = ReferenceChoice::Node(node);
        self
    }

    /// Set the relative pivot tolerance.
    ///
    /// The check runs after each row is scaled to unit maximum, so a
    /// wide spread of resistances alone does not trip it. Larger values
    /// reject ill-conditioned circuits earlier.
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }
}

/// A stamped circuit together with the node numbering used to stamp it.
#[derive(Debug, Clone)]
pub struct AssembledSystem<N: NodeLabel> {
    pub nodes: NodeIndex<N>,
    pub system: MnaSystem,
}

/// DC analysis of one circuit.
///
/// Runs the pipeline: validate, index nodes, stamp, assemble, solve.
/// Nothing is cached between calls.
pub struct DcAnalysis<'a, N> {
    circuit: &'a Circuit<N>,
    config: DcConfig<N>,
}

impl<'a, N: NodeLabel> DcAnalysis<'a, N> {
    /// Create an analysis with the default configuration.
    pub fn new(circuit: &'a Circuit<N>) -> Self {
        Self::with_config(circuit, DcConfig::default())
    }

    /// Create an analysis with a custom configuration.
    pub fn with_config(circuit: &'a Circuit<N>, config: DcConfig<N>) -> Self {
        Self { circuit, config }
    }

    /// Stamp the MNA blocks without solving.
    pub fn assemble(&self) -> Result<AssembledSystem<N>> {
        validate_circuit(self.circuit)?;

        let nodes = NodeIndex::build(self.circuit, &self.config.reference)?;
        log::debug!(
            "dc: {} unknown node voltages, {} voltage sources, reference {:?}",
            nodes.len(),
            self.circuit.voltage_sources.len(),
            nodes.reference()
        );

        let system = MnaSystem::stamp(self.circuit, &nodes)?;
        Ok(AssembledSystem { nodes, system })
    }

    /// Solve for node voltages and voltage source branch currents.
    pub fn solve(&self) -> Result<DcSolution<N>> {
        let AssembledSystem { nodes, system } = self.assemble()?;

        let a = system.matrix();
        log::trace!("dc: A = {a}");
        log::trace!("dc: z = {}", system.z);

        let x = solve_dense(&a, &system.z, self.config.pivot_tolerance)?;
        Ok(DcSolution {
            x: x.as_slice().to_vec(),
            nodes,
        })
    }
}

/// Result of a DC solve.
///
/// The unknown vector holds node voltages relative to the reference in
/// node index order, followed by one branch current per voltage source
/// in input order. A branch current is positive when it flows from the
/// external circuit into the source's positive terminal, so a source
/// delivering power reports a negative current.
#[derive(Debug, Clone, PartialEq)]
pub struct DcSolution<N: NodeLabel> {
    x: Vec<f64>,
    nodes: NodeIndex<N>,
}

impl<N: NodeLabel> DcSolution<N> {
    /// The raw unknown vector.
    pub fn as_slice(&self) -> &[f64] {
        &self.x
    }

    /// Consume the solution, returning the raw unknown vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.x
    }

    /// Length of the unknown vector (`n_n + n_vs`).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The node numbering the solution is expressed in.
    pub fn node_index(&self) -> &NodeIndex<N> {
        &self.nodes
    }

    /// The reference node.
    pub fn reference(&self) -> &N {
        self.nodes.reference()
    }

    /// Node voltages in node index order.
    pub fn node_voltages(&self) -> &[f64] {
        &self.x[..self.nodes.len()]
    }

    /// Voltage source branch currents in source order.
    pub fn branch_currents(&self) -> &[f64] {
        &self.x[self.nodes.len()..]
    }

    /// Voltage at a node. The reference reads 0; unknown labels give `None`.
    pub fn voltage(&self, node: &N) -> Option<f64> {
        match self.nodes.index(node) {
            Ok(Some(i)) => Some(self.x[i]),
            Ok(None) => Some(0.0),
            Err(_) => None,
        }
    }

    /// Voltage of `a` relative to `b`.
    pub fn voltage_between(&self, a: &N, b: &N) -> Option<f64> {
        Some(self.voltage(a)? - self.voltage(b)?)
    }

    /// Branch current of voltage source `k`.
    pub fn branch_current(&self, k: usize) -> Option<f64> {
        self.branch_currents().get(k).copied()
    }

    /// Net current leaving each non-reference node, in node index order.
    ///
    /// Every entry is zero up to rounding for a consistent solve of
    /// `circuit`.
    pub fn kcl_residuals(&self, circuit: &Circuit<N>) -> Result<Vec<f64>> {
        let mut residuals = vec![0.0; self.nodes.len()];
        let mut leave = |node: &N, current: f64| -> Result<()> {
            if let Some(i) = self.nodes.index(node)? {
                residuals[i] += current;
            }
            Ok(())
        };

        for r in &circuit.resistors {
            let v = self.voltage_at(&r.nodes[0])? - self.voltage_at(&r.nodes[1])?;
            let i = v / r.resistance;
            leave(&r.nodes[0], i)?;
            leave(&r.nodes[1], -i)?;
        }

        for i in &circuit.current_sources {
            leave(i.negative(), i.current)?;
            leave(i.positive(), -i.current)?;
        }

        for (k, v) in circuit.voltage_sources.iter().enumerate() {
            let j = self
                .branch_current(k)
                .ok_or(MnaError::DimensionMismatch {
                    expected: self.branch_currents().len(),
                    actual: circuit.voltage_sources.len(),
                })?;
            leave(v.positive(), j)?;
            leave(v.negative(), -j)?;
        }

        Ok(residuals)
    }

    fn voltage_at(&self, node: &N) -> Result<f64> {
        Ok(self.nodes.index(node)?.map_or(0.0, |i| self.x[i]))
    }
}
