//! QASM3 emitter for serializing circuits.

use alsvid_ir::{Circuit, Instruction, InstructionKind, QubitId};

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::default();
    emitter.emit_circuit(circuit)
}

/// QASM3 emitter.
#[derive(Default)]
struct Emitter {
    output: String,
}

impl Emitter {
    fn emit_circuit(&mut self, circuit: &Circuit) -> String {
        self.writeln("OPENQASM 3.0;");
        self.writeln("");

        let num_qubits = circuit.num_qubits();
        if num_qubits > 0 {
            self.writeln(&format!("qubit[{num_qubits}] q;"));
        }

        let num_clbits = circuit.num_clbits();
        if num_clbits > 0 {
            self.writeln(&format!("bit[{num_clbits}] c;"));
        }

        if num_qubits > 0 || num_clbits > 0 {
            self.writeln("");
        }

        if circuit.global_phase() != 0.0 {
            self.writeln(&format!("gphase({});", format_angle(circuit.global_phase())));
        }

        for instruction in circuit.instructions() {
            self.emit_instruction(instruction);
        }

        std::mem::take(&mut self.output)
    }

    fn emit_instruction(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let name = gate.name();
                let qubits = emit_qubits(&instruction.qubits);
                match gate.angle() {
                    Some(theta) => {
                        self.writeln(&format!("{name}({}) {qubits};", format_angle(theta)));
                    }
                    None => self.writeln(&format!("{name} {qubits};")),
                }
            }

            InstructionKind::Measure => {
                for (q, c) in instruction.qubits.iter().zip(instruction.clbits.iter()) {
                    self.writeln(&format!("c[{}] = measure q[{}];", c.0, q.0));
                }
            }

            InstructionKind::Barrier => {
                let qubits = emit_qubits(&instruction.qubits);
                if qubits.is_empty() {
                    self.writeln("barrier;");
                } else {
                    self.writeln(&format!("barrier {qubits};"));
                }
            }
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn emit_qubits(qubits: &[QubitId]) -> String {
    qubits
        .iter()
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rust's float `Display` prints the shortest string that round-trips, which
/// is exactly what the QASM text needs.
fn format_angle(theta: f64) -> String {
    format!("{theta}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::{ClbitId, QubitId};

    #[test]
    fn test_header_and_registers() {
        let circuit = Circuit::with_size("t", 3, 2);
        let qasm = emit(&circuit);
        assert!(qasm.starts_with("OPENQASM 3.0;"));
        assert!(qasm.contains("qubit[3] q;"));
        assert!(qasm.contains("bit[2] c;"));
    }

    #[test]
    fn test_gates_and_angles() {
        let mut circuit = Circuit::with_size("t", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.rz(0.5, QubitId(1)).unwrap();
        circuit.rzz(-0.25, QubitId(0), QubitId(1)).unwrap();

        let qasm = emit(&circuit);
        assert!(qasm.contains("h q[0];"));
        assert!(qasm.contains("rz(0.5) q[1];"));
        assert!(qasm.contains("rzz(-0.25) q[0], q[1];"));
    }

    #[test]
    fn test_measure_and_barrier() {
        let mut circuit = Circuit::with_size("t", 2, 2);
        circuit.barrier_all().unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        circuit.measure(QubitId(1), ClbitId(1)).unwrap();

        let qasm = emit(&circuit);
        assert!(qasm.contains("barrier q[0], q[1];"));
        assert!(qasm.contains("c[0] = measure q[0];"));
        assert!(qasm.contains("c[1] = measure q[1];"));
    }

    #[test]
    fn test_global_phase_emitted_when_nonzero() {
        let mut circuit = Circuit::with_size("t", 1, 0);
        circuit.add_global_phase(1.25);
        let qasm = emit(&circuit);
        assert!(qasm.contains("gphase(1.25);"));

        let silent = Circuit::with_size("t", 1, 0);
        assert!(!emit(&silent).contains("gphase"));
    }

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new("empty");
        let qasm = emit(&circuit);
        assert_eq!(qasm, "OPENQASM 3.0;\n\n");
    }
}
