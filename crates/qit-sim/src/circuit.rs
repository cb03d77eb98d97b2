//! Circuit builder: applies gates to a computer and records a readable log.

use std::fmt;

use rand::Rng;

use crate::computer::QuantumComputer;
use crate::error::{SimError, SimResult};

/// One logged circuit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitOp {
    Hadamard(usize),
    PauliX(usize),
    PauliZ(usize),
    Cnot { control: usize, target: usize },
    Measure { qubit: usize, outcome: u8 },
    BellPair(usize, usize),
}

impl fmt::Display for CircuitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitOp::Hadamard(q) => write!(f, "H(q{q})"),
            CircuitOp::PauliX(q) => write!(f, "X(q{q})"),
            CircuitOp::PauliZ(q) => write!(f, "Z(q{q})"),
            CircuitOp::Cnot { control, target } => write!(f, "CNOT(q{control}, q{target})"),
            CircuitOp::Measure { qubit, outcome } => write!(f, "Measure(q{qubit}) = {outcome}"),
            CircuitOp::BellPair(a, b) => write!(f, "Bell Pair(q{a}, q{b})"),
        }
    }
}

/// Chaining wrapper around a [`QuantumComputer`].
///
/// Only operations that succeed are logged.
///
/// ```rust
/// use qit_sim::{CircuitBuilder, QuantumComputer};
///
/// let mut qc = QuantumComputer::seeded("alice", 2, 1).unwrap();
/// let mut builder = CircuitBuilder::new(&mut qc);
/// builder.hadamard(0)?.cnot(0, 1)?;
/// assert_eq!(builder.log(), "Circuit for alice:\n  H(q0)\n  CNOT(q0, q1)\n");
/// # Ok::<(), qit_sim::SimError>(())
/// ```
pub struct CircuitBuilder<'a, R> {
    computer: &'a mut QuantumComputer<R>,
    ops: Vec<CircuitOp>,
}

impl<'a, R: Rng> CircuitBuilder<'a, R> {
    /// Start an empty log over `computer`.
    pub fn new(computer: &'a mut QuantumComputer<R>) -> Self {
        Self {
            computer,
            ops: Vec::new(),
        }
    }

    /// Apply and log a Hadamard gate.
    pub fn hadamard(&mut self, qubit: usize) -> SimResult<&mut Self> {
        self.computer.apply_hadamard(qubit)?;
        self.ops.push(CircuitOp::Hadamard(qubit));
        Ok(self)
    }

    /// Apply and log a Pauli-X gate.
    pub fn pauli_x(&mut self, qubit: usize) -> SimResult<&mut Self> {
        self.computer.apply_pauli_x(qubit)?;
        self.ops.push(CircuitOp::PauliX(qubit));
        Ok(self)
    }

    /// Apply and log a Pauli-Z gate.
    pub fn pauli_z(&mut self, qubit: usize) -> SimResult<&mut Self> {
        self.computer.apply_pauli_z(qubit)?;
        self.ops.push(CircuitOp::PauliZ(qubit));
        Ok(self)
    }

    /// Apply and log a CNOT gate.
    pub fn cnot(&mut self, control: usize, target: usize) -> SimResult<&mut Self> {
        self.computer.apply_cnot(control, target)?;
        self.ops.push(CircuitOp::Cnot { control, target });
        Ok(self)
    }

    /// Measure a qubit and log the outcome.
    pub fn measure(&mut self, qubit: usize) -> SimResult<u8> {
        let outcome = self.computer.measure(qubit)?;
        self.ops.push(CircuitOp::Measure { qubit, outcome });
        Ok(outcome)
    }

    /// Entangle two qubits into (|00⟩ + |11⟩)/√2 (from |00⟩): Hadamard on
    /// `first`, then CNOT(first, second). Logged as a single entry.
    pub fn bell_pair(&mut self, first: usize, second: usize) -> SimResult<&mut Self> {
        // Validate both before mutating so a bad pair leaves the state alone.
        let sv = self.computer.statevector();
        sv.validate_qubit(first)?;
        sv.validate_qubit(second)?;
        if first == second {
            return Err(SimError::ControlIsTarget(first));
        }

        self.computer.apply_hadamard(first)?;
        self.computer.apply_cnot(first, second)?;
        self.ops.push(CircuitOp::BellPair(first, second));
        Ok(self)
    }

    /// Recorded operations, oldest first.
    pub fn ops(&self) -> &[CircuitOp] {
        &self.ops
    }

    /// Clear the log without touching the computer's state.
    pub fn reset_log(&mut self) {
        self.ops.clear();
    }

    /// Rendered log: a header line, then one indented line per operation.
    pub fn log(&self) -> String {
        let mut out = format!("Circuit for {}:\n", self.computer.name());
        for op in &self.ops {
            out.push_str("  ");
            out.push_str(&op.to_string());
            out.push('\n');
        }
        out
    }

    /// Get the underlying computer.
    pub fn computer(&self) -> &QuantumComputer<R> {
        &*self.computer
    }
}
