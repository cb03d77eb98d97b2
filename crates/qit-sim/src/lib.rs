//! `qit-sim`: statevector quantum computer simulation.
//!
//! A [`QuantumComputer`] owns 2^n complex amplitudes and applies Hadamard,
//! Pauli-X, Pauli-Z and CNOT gates as bitmask-indexed pairwise transforms
//! (O(2^n) per gate), plus projective single-qubit measurement with
//! collapse and renormalisation.
//!
//! # Quick start
//!
//! ```rust
//! use qit_sim::{Complex, QuantumComputer};
//!
//! let mut qc = QuantumComputer::seeded("alice", 2, 42).unwrap();
//! qc.apply_hadamard(0).unwrap();
//! qc.apply_cnot(0, 1).unwrap();
//!
//! let state = qc.state();
//! let h = std::f64::consts::FRAC_1_SQRT_2;
//! assert!(state[0].approx_eq(Complex::from_real(h), 1e-12));
//! assert!(state[3].approx_eq(Complex::from_real(h), 1e-12));
//! ```
//!
//! # Memory
//!
//! | Qubits | Amplitudes | Memory |
//! |--------|------------|--------|
//! | 10 | 1K | ~16 KB |
//! | 20 | 1M | ~16 MB |
//! | 24 | 16M | ~256 MB |
//! | 30 | 1G | ~16 GB |
//!
//! Non-diagonal gates allocate a second vector of the same size. Engines
//! refuse registers above [`EngineConfig::max_qubits`] (24 by default).
//!
//! The engine never logs or prints; callers decide how to report errors.

pub mod basis;
pub mod circuit;
pub mod complex;
pub mod computer;
pub mod config;
pub mod error;
pub mod matrix;
pub mod statevector;

pub use circuit::{CircuitBuilder, CircuitOp};
pub use complex::Complex;
pub use computer::QuantumComputer;
pub use config::EngineConfig;
pub use error::{SimError, SimResult};
pub use statevector::Statevector;
