//! WASM bindings for MNA Core.
//!
//! Components are passed as flat `Float64Array`s of triples
//! `[n_a, n_b, value, n_a, n_b, value, ...]` with integer node labels.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDcSolver } from 'mna_core';
//!
//! await init();
//!
//! const solver = new WasmDcSolver(
//!   new Float64Array([1, 2, 5, 2, 0, 5]), // resistors
//!   new Float64Array([0, 1, 10]),         // voltage sources
//!   new Float64Array([]),                 // current sources
//! );
//! const x = solver.solve(); // Float64Array [10, 5, -1]
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::error::MnaError;
use crate::solver::{DcAnalysis, DcConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: MnaError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Split a flat triple list, converting the node columns to labels.
fn triples(kind: &'static str, flat: &[f64]) -> Result<Vec<(u32, u32, f64)>, JsValue> {
    if flat.len() % 3 != 0 {
        return Err(to_js(MnaError::invalid_component(
            kind,
            flat.len() / 3,
            "expected (node, node, value) triples",
        )));
    }

    flat.chunks_exact(3)
        .enumerate()
        .map(|(index, t)| {
            let node = |v: f64| {
                if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
                    Ok(v as u32)
                } else {
                    Err(to_js(MnaError::invalid_component(
                        kind,
                        index,
                        format!("node label {v} is not a non-negative integer"),
                    )))
                }
            };
            Ok((node(t[0])?, node(t[1])?, t[2]))
        })
        .collect()
}

/// WASM-compatible DC solver.
#[wasm_bindgen]
pub struct WasmDcSolver {
    circuit: Circuit<u32>,
    reference: Option<u32>,
}

#[wasm_bindgen]
impl WasmDcSolver {
    /// Create a solver from flat component triples.
    ///
    /// # Arguments
    /// * `resistors` - `(a, b, ohms)` triples
    /// * `voltage_sources` - `(neg, pos, volts)` triples
    /// * `current_sources` - `(neg, pos, amps)` triples
    #[wasm_bindgen(constructor)]
    pub fn new(
        resistors: &[f64],
        voltage_sources: &[f64],
        current_sources: &[f64],
    ) -> Result<WasmDcSolver, JsValue> {
        let circuit = Circuit::from_parts(
            triples("resistor", resistors)?,
            triples("voltage source", voltage_sources)?,
            triples("current source", current_sources)?,
        );
        Ok(WasmDcSolver {
            circuit,
            reference: None,
        })
    }

    /// Force the reference node; by default the lowest label is used.
    #[wasm_bindgen]
    pub fn set_reference(&mut self, node: u32) {
        self.reference = Some(node);
    }

    /// Solve and return the unknown vector (node voltages, then branch currents).
    #[wasm_bindgen]
    pub fn solve(&self) -> Result<Vec<f64>, JsValue> {
        let solution = DcAnalysis::with_config(&self.circuit, self.config())
            .solve()
            .map_err(to_js)?;
        Ok(solution.into_vec())
    }

    /// Non-reference node labels in the order their voltages appear.
    #[wasm_bindgen]
    pub fn node_order(&self) -> Result<Vec<u32>, JsValue> {
        let assembled = DcAnalysis::with_config(&self.circuit, self.config())
            .assemble()
            .map_err(to_js)?;
        Ok(assembled.nodes.nodes().to_vec())
    }
}

impl WasmDcSolver {
    fn config(&self) -> DcConfig<u32> {
        match self.reference {
            Some(node) => DcConfig::new().with_reference(node),
            None => DcConfig::new(),
        }
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
