//! Named simulation engine.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::complex::Complex;
use crate::config::EngineConfig;
use crate::error::SimResult;
use crate::statevector::Statevector;

/// A named quantum computer: a statevector plus the random source used for
/// measurement.
///
/// The engine exclusively owns its amplitudes. [`state`](Self::state)
/// returns a copy and [`set_state`](Self::set_state) copies its input, so no
/// caller can alias engine storage.
///
/// # Example
///
/// ```rust
/// use qit_sim::QuantumComputer;
///
/// let mut qc = QuantumComputer::seeded("alice", 2, 7).unwrap();
/// qc.apply_hadamard(0).unwrap();
/// qc.apply_cnot(0, 1).unwrap();
///
/// let first = qc.measure(0).unwrap();
/// // Bell pair: the second qubit always agrees.
/// assert_eq!(qc.measure(1).unwrap(), first);
/// ```
#[derive(Debug)]
pub struct QuantumComputer<R = StdRng> {
    name: String,
    state: Statevector,
    rng: R,
}

impl QuantumComputer<StdRng> {
    /// Create an engine seeded from OS entropy.
    pub fn new(name: impl Into<String>, num_qubits: usize) -> SimResult<Self> {
        Self::with_rng(name, num_qubits, StdRng::from_entropy())
    }

    /// Create an engine with a reproducible measurement sequence.
    pub fn seeded(name: impl Into<String>, num_qubits: usize, seed: u64) -> SimResult<Self> {
        Self::with_rng(name, num_qubits, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuantumComputer<R> {
    /// Create an engine with a caller-supplied random source and the
    /// default [`EngineConfig`].
    pub fn with_rng(name: impl Into<String>, num_qubits: usize, rng: R) -> SimResult<Self> {
        Self::with_config(name, num_qubits, rng, &EngineConfig::default())
    }

    /// Create an engine, rejecting registers above `config.max_qubits`.
    pub fn with_config(
        name: impl Into<String>,
        num_qubits: usize,
        rng: R,
        config: &EngineConfig,
    ) -> SimResult<Self> {
        config.check_qubits(num_qubits)?;
        Ok(Self {
            name: name.into(),
            state: Statevector::new(num_qubits)?,
            rng,
        })
    }

    /// Get the computer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the computer.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Read-only access to the underlying statevector.
    pub fn statevector(&self) -> &Statevector {
        &self.state
    }

    /// Apply a Hadamard gate to `qubit`.
    pub fn apply_hadamard(&mut self, qubit: usize) -> SimResult<()> {
        self.state.apply_hadamard(qubit)
    }

    /// Apply a Pauli-X gate to `qubit`.
    pub fn apply_pauli_x(&mut self, qubit: usize) -> SimResult<()> {
        self.state.apply_pauli_x(qubit)
    }

    /// Apply a Pauli-Z gate to `qubit`.
    pub fn apply_pauli_z(&mut self, qubit: usize) -> SimResult<()> {
        self.state.apply_pauli_z(qubit)
    }

    /// Apply CNOT; `control` and `target` must differ.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> SimResult<()> {
        self.state.apply_cnot(control, target)
    }

    /// Measure `qubit`, collapsing the state. Returns 0 or 1.
    pub fn measure(&mut self, qubit: usize) -> SimResult<u8> {
        self.state.measure(qubit, &mut self.rng)
    }

    /// Marginal probability of observing `qubit` as 0, without collapsing.
    pub fn probability_of_zero(&self, qubit: usize) -> SimResult<f64> {
        self.state.probability_of_zero(qubit)
    }

    /// Reinitialise to |0...0⟩.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Independent copy of the amplitudes.
    pub fn state(&self) -> Vec<Complex> {
        self.state.amplitudes().to_vec()
    }

    /// Replace the amplitudes with a copy of `amplitudes`.
    ///
    /// The length must be 2^n. Normalisation is the caller's responsibility,
    /// which lets raw payloads be transplanted between engines.
    pub fn set_state(&mut self, amplitudes: &[Complex]) -> SimResult<()> {
        self.state.set_amplitudes(amplitudes.to_vec())
    }

    /// Human-readable listing of the non-negligible amplitudes.
    pub fn state_string(&self) -> String {
        self.state.to_string()
    }
}

impl<R> fmt::Display for QuantumComputer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} qubits)", self.name, self.state.num_qubits())
    }
}
