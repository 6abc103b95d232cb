//! # Twelve-coin puzzle walkthrough
//!
//! Runs the solver against an oracle judge hiding a secret counterfeit and
//! prints every weighing the engine asked for. Shows the three partitioning
//! regimes in action: the blind first split, candidate pairing, and the
//! final elimination.

use balance_core::script::OracleJudge;
use balance_core::{CoinId, Deviation, Resolution, SolverConfig, SolverLoop};

fn pan(ids: &[CoinId]) -> String {
    if ids.is_empty() {
        return "(empty)".to_string();
    }
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_puzzle(secret: CoinId, deviation: Deviation) {
    println!("── 12 coins, secret: #{secret} ({deviation:?}) ──────────────────────");

    let judge = OracleJudge::new(secret, deviation);
    let mut solver = SolverLoop::new(SolverConfig::new(12), judge).expect("valid configuration");
    let result = solver.run().expect("pools stay in sync");

    for (round, plan) in solver.channel().plans().iter().enumerate() {
        println!(
            "  weighing {}: [{}]  vs  [{}]   aside: {}",
            round + 1,
            pan(&plan.left),
            pan(&plan.right),
            pan(&plan.aside),
        );
    }

    match result {
        Resolution::Resolved { coin, deviation } => {
            println!("  => counterfeit is #{coin}, {deviation:?}\n");
        }
        Resolution::Unsolvable => println!("  => no consistent counterfeit\n"),
    }
}

fn main() {
    run_puzzle(4, Deviation::Heavier);
    run_puzzle(7, Deviation::Lighter);
    run_puzzle(12, Deviation::Lighter);
}
