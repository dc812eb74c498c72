// Allow dead code: demo library exposes Hamiltonians that may not all be used in every binary
#![allow(dead_code)]

//! Alsvid Demo Suite
//!
//! Runnable demonstrations of depth-constrained Hamiltonian-exponential
//! synthesis:
//!
//! - **demo-evolution**: build a molecular Hamiltonian, allocate a register,
//!   synthesize `exp(-iHt)` under a depth budget, print the circuit
//! - **demo-budget-sweep**: show how the selected formula and its error
//!   bound change as the depth budget varies

pub mod molecules;

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}
