//! MNA block assembly.

use nalgebra::{DMatrix, DVector};

use crate::circuit::{Circuit, NodeIndex, NodeLabel};
use crate::error::Result;

use super::stamp::{stamp_current_sources, stamp_resistors, stamp_voltage_sources};

/// Stamped MNA blocks for one circuit.
///
/// Only G, B and z are stored: C is the transpose of B and D is
/// always zero for ideal independent voltage sources.
#[derive(Debug, Clone, PartialEq)]
pub struct MnaSystem {
    /// Conductance block G (n_n x n_n)
    pub g: DMatrix<f64>,
    /// Voltage source coupling block B (n_n x n_vs)
    pub b: DMatrix<f64>,
    /// Excitation vector z (n_n + n_vs)
    pub z: DVector<f64>,
}

impl MnaSystem {
    /// Create zeroed blocks for `n_nodes` unknown voltages and `n_sources` branch currents.
    pub fn new(n_nodes: usize, n_sources: usize) -> Self {
        Self {
            g: DMatrix::zeros(n_nodes, n_nodes),
            b: DMatrix::zeros(n_nodes, n_sources),
            z: DVector::zeros(n_nodes + n_sources),
        }
    }

    /// Stamp every component of `circuit` using the given node numbering.
    ///
    /// Order: conductances, then voltage source couplings, then current sources.
    pub fn stamp<N: NodeLabel>(circuit: &Circuit<N>, nodes: &NodeIndex<N>) -> Result<Self> {
        let mut system = Self::new(nodes.len(), circuit.voltage_sources.len());

        stamp_resistors(&mut system.g, nodes, &circuit.resistors)?;
        stamp_voltage_sources(&mut system.b, &mut system.z, nodes, &circuit.voltage_sources)?;
        stamp_current_sources(&mut system.z, nodes, &circuit.current_sources)?;

        Ok(system)
    }

    /// Number of non-reference nodes (`n_n`).
    pub fn num_nodes(&self) -> usize {
        self.g.nrows()
    }

    /// Number of voltage sources (`n_vs`).
    pub fn num_sources(&self) -> usize {
        self.b.ncols()
    }

    /// Dimension of the assembled system.
    pub fn size(&self) -> usize {
        self.num_nodes() + self.num_sources()
    }

    /// The C block, `B` transposed.
    pub fn c(&self) -> DMatrix<f64> {
        self.b.transpose()
    }

    /// The D block, always zero.
    pub fn d(&self) -> DMatrix<f64> {
        DMatrix::zeros(self.num_sources(), self.num_sources())
    }

    /// Compose `A = [[G, B], [C, D]]`.
    pub fn matrix(&self) -> DMatrix<f64> {
        let n = self.num_nodes();
        let m = self.num_sources();
        let mut a = DMatrix::zeros(n + m, n + m);

        a.view_mut((0, 0), (n, n)).copy_from(&self.g);
        a.view_mut((0, n), (n, m)).copy_from(&self.b);
        a.view_mut((n, 0), (m, n)).copy_from(&self.c());
        // D block stays zero
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ReferenceChoice;
    use approx::assert_relative_eq;

    fn bundled() -> Circuit<u32> {
        Circuit::from_parts(
            [(1, 2, 5.0), (2, 0, 3.0), (3, 0, 10.0)],
            [(0, 1, 5.0), (2, 3, 10.0)],
            [(1, 2, 2.0)],
        )
    }

    #[test]
    fn test_block_shapes() {
        let circuit = bundled();
        let nodes = NodeIndex::build(&circuit, &ReferenceChoice::Lowest).unwrap();
        let system = MnaSystem::stamp(&circuit, &nodes).unwrap();

        assert_eq!(system.g.shape(), (3, 3));
        assert_eq!(system.b.shape(), (3, 2));
        assert_eq!(system.c().shape(), (2, 3));
        assert_eq!(system.d().shape(), (2, 2));
        assert_eq!(system.z.len(), 5);
        assert_eq!(system.matrix().shape(), (5, 5));
    }

    #[test]
    fn test_bundled_matrix_entries() {
        let circuit = bundled();
        let nodes = NodeIndex::build(&circuit, &ReferenceChoice::Lowest).unwrap();
        let system = MnaSystem::stamp(&circuit, &nodes).unwrap();
        let a = system.matrix();

        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(5, 5, &[
             0.2, -0.2,                     0.0, 1.0,  0.0,
            -0.2,  0.2 + 1.0 / 3.0,         0.0, 0.0, -1.0,
             0.0,  0.0,                     0.1, 0.0,  1.0,
             1.0,  0.0,                     0.0, 0.0,  0.0,
             0.0, -1.0,                     1.0, 0.0,  0.0,
        ]);
        for (got, want) in a.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-15);
        }
        assert_eq!(system.z.as_slice(), &[-2.0, 2.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_no_voltage_sources() {
        let mut circuit = Circuit::new();
        circuit.add_resistor(1, 0, 4.0).add_current_source(0, 1, 1.0);
        let nodes = NodeIndex::build(&circuit, &ReferenceChoice::Lowest).unwrap();
        let system = MnaSystem::stamp(&circuit, &nodes).unwrap();

        assert_eq!(system.size(), 1);
        assert_relative_eq!(system.matrix()[(0, 0)], 0.25);
    }
}
