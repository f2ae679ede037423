//! Circuit container.

use super::types::{CurrentSource, Element, NodeLabel, Resistor, VoltageSource};

/// A complete linear resistive circuit ready for DC analysis.
///
/// Components are kept in three ordered lists. The order of
/// `voltage_sources` fixes the order of the branch-current unknowns.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit<N> {
    pub resistors: Vec<Resistor<N>>,
    pub voltage_sources: Vec<VoltageSource<N>>,
    pub current_sources: Vec<CurrentSource<N>>,
}

impl<N> Default for Circuit<N> {
    fn default() -> Self {
        Self {
            resistors: Vec::new(),
            voltage_sources: Vec::new(),
            current_sources: Vec::new(),
        }
    }
}

impl<N: NodeLabel> Circuit<N> {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from the three component lists.
    pub fn from_parts<R, V, I>(resistors: R, voltage_sources: V, current_sources: I) -> Self
    where
        R: IntoIterator,
        R::Item: Into<Resistor<N>>,
        V: IntoIterator,
        V::Item: Into<VoltageSource<N>>,
        I: IntoIterator,
        I::Item: Into<CurrentSource<N>>,
    {
        Self {
            resistors: resistors.into_iter().map(Into::into).collect(),
            voltage_sources: voltage_sources.into_iter().map(Into::into).collect(),
            current_sources: current_sources.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a circuit from a mixed element list.
    ///
    /// Relative order within each kind is preserved.
    pub fn from_elements(elements: impl IntoIterator<Item = Element<N>>) -> Self {
        let mut circuit = Self::new();
        for element in elements {
            match element {
                Element::Resistor(r) => circuit.resistors.push(r),
                Element::VoltageSource(v) => circuit.voltage_sources.push(v),
                Element::CurrentSource(i) => circuit.current_sources.push(i),
            }
        }
        circuit
    }

    /// Add a resistor between `a` and `b`.
    pub fn add_resistor(&mut self, a: N, b: N, resistance: f64) -> &mut Self {
        self.resistors.push(Resistor::new(a, b, resistance));
        self
    }

    /// Add a voltage source; its branch current gets the next branch index.
    pub fn add_voltage_source(&mut self, neg: N, pos: N, voltage: f64) -> &mut Self {
        self.voltage_sources.push(VoltageSource::new(neg, pos, voltage));
        self
    }

    /// Add a current source driving `current` from `neg` to `pos`.
    pub fn add_current_source(&mut self, neg: N, pos: N, current: f64) -> &mut Self {
        self.current_sources.push(CurrentSource::new(neg, pos, current));
        self
    }

    /// Total number of components.
    pub fn element_count(&self) -> usize {
        self.resistors.len() + self.voltage_sources.len() + self.current_sources.len()
    }

    /// True if the circuit has no components at all.
    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Every terminal in input order: resistors, then voltage sources,
    /// then current sources. Labels repeat once per incident terminal.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.resistors
            .iter()
            .flat_map(|r| r.nodes.iter())
            .chain(self.voltage_sources.iter().flat_map(|v| v.nodes.iter()))
            .chain(self.current_sources.iter().flat_map(|i| i.nodes.iter()))
    }

    /// Return a copy with every source value multiplied by `k`.
    ///
    /// Resistors are untouched, so the solution scales linearly with `k`.
    pub fn scaled_sources(&self, k: f64) -> Self {
        let mut scaled = self.clone();
        for v in &mut scaled.voltage_sources {
            v.voltage *= k;
        }
        for i in &mut scaled.current_sources {
            i.current *= k;
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_elements_partitions_in_order() {
        let circuit = Circuit::from_elements(vec![
            Resistor::new(1, 2, 5.0).into(),
            VoltageSource::new(0, 1, 5.0).into(),
            CurrentSource::new(1, 2, 2.0).into(),
            VoltageSource::new(2, 3, 10.0).into(),
            Resistor::new(2, 0, 3.0).into(),
        ]);

        assert_eq!(circuit.resistors.len(), 2);
        assert_eq!(circuit.voltage_sources[0].voltage, 5.0);
        assert_eq!(circuit.voltage_sources[1].voltage, 10.0);
        assert_eq!(circuit.current_sources.len(), 1);
        assert_eq!(circuit.element_count(), 5);
    }

    #[test]
    fn test_nodes_traversal_order() {
        let mut circuit = Circuit::new();
        circuit
            .add_current_source(9, 8, 1.0)
            .add_voltage_source(5, 4, 1.0)
            .add_resistor(2, 1, 1.0);

        let seen: Vec<u32> = circuit.nodes().copied().collect();
        assert_eq!(seen, vec![2, 1, 5, 4, 9, 8]);
    }

    #[test]
    fn test_scaled_sources_leaves_resistors() {
        let circuit: Circuit<u32> = Circuit::from_parts([(1, 0, 2.0)], [(0, 1, 3.0)], [(0, 1, 0.5)]);
        let scaled = circuit.scaled_sources(-2.0);

        assert_eq!(scaled.resistors[0].resistance, 2.0);
        assert_eq!(scaled.voltage_sources[0].voltage, -6.0);
        assert_eq!(scaled.current_sources[0].current, -1.0);
    }

    #[test]
    fn test_empty() {
        assert!(Circuit::<u32>::new().is_empty());
    }
}
