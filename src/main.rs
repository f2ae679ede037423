//! mna - DC operating point of a resistive circuit
//!
//! Solves a bundled example circuit with Modified Nodal Analysis and
//! prints the node voltages and voltage source branch currents.
//!
//! # Usage
//!
//! ```bash
//! mna --reference 2 --show-system -vv
//! ```

use clap::Parser;
use log::LevelFilter;
use mna_core::{
    circuit::Circuit,
    error::Result,
    solver::{DcAnalysis, DcConfig, PIVOT_TOLERANCE},
};

/// Solve the DC operating point of the bundled example circuit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Node held at 0 V (defaults to the lowest node label)
    #[arg(short, long, value_name = "NODE")]
    reference: Option<u32>,

    /// Print the assembled MNA matrix and source vector
    #[arg(long)]
    show_system: bool,

    /// Relative pivot threshold for singularity detection
    #[arg(long, default_value_t = PIVOT_TOLERANCE)]
    pivot_tolerance: f64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Resistors (1,2,5) (2,0,3) (3,0,10), sources V(0,1,5) V(2,3,10) I(1,2,2).
fn bundled_circuit() -> Circuit<u32> {
    let mut circuit = Circuit::new();
    circuit
        .add_resistor(1, 2, 5.0)
        .add_resistor(2, 0, 3.0)
        .add_resistor(3, 0, 10.0)
        .add_voltage_source(0, 1, 5.0)
        .add_voltage_source(2, 3, 10.0)
        .add_current_source(1, 2, 2.0);
    circuit
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let circuit = bundled_circuit();

    let mut config = DcConfig::new().with_pivot_tolerance(args.pivot_tolerance);
    if let Some(node) = args.reference {
        config = config.with_reference(node);
    }
    let analysis = DcAnalysis::with_config(&circuit, config);

    if args.show_system {
        let assembled = analysis.assemble()?;
        println!("A ={}", assembled.system.matrix());
        println!("z ={}", assembled.system.z);
    }

    let solution = analysis.solve()?;

    println!("reference node: {}", solution.reference());
    println!("node voltages:");
    for (node, v) in solution.node_index().nodes().iter().zip(solution.node_voltages()) {
        println!("  V({node}) = {v:.6} V");
    }
    println!("voltage source currents:");
    for (k, (source, j)) in circuit
        .voltage_sources
        .iter()
        .zip(solution.branch_currents())
        .enumerate()
    {
        println!(
            "  I(V{k}: {} -> {}) = {j:.6} A",
            source.negative(),
            source.positive()
        );
    }

    let worst = solution
        .kcl_residuals(&circuit)?
        .into_iter()
        .fold(0.0_f64, |acc, r| acc.max(r.abs()));
    log::debug!("max KCL residual: {worst:e}");

    Ok(())
}
