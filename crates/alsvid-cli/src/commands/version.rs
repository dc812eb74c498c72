//! Version command implementation.

use console::style;

/// Print version information.
pub fn execute() {
    println!(
        "{} {}",
        style("alsvid").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Depth-constrained Hamiltonian-exponential synthesis");
}
