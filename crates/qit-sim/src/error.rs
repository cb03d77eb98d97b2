//! Error types for the simulation engine.

use thiserror::Error;

/// Errors produced by the complex scalar, the statevector engine and the
/// dense reference algebra.
///
/// Every engine operation validates its arguments before touching the
/// amplitude vector, so a returned error always leaves the state unchanged.
///
/// Rejected qubit indices come in two variants: [`IndexOutOfRange`] and
/// [`ControlIsTarget`]. Match on [`SimError::is_index_error`] to catch both.
///
/// [`IndexOutOfRange`]: SimError::IndexOutOfRange
/// [`ControlIsTarget`]: SimError::ControlIsTarget
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A qubit index lies outside `[0, num_qubits)`.
    #[error("Qubit index {qubit} out of range for a {num_qubits}-qubit register")]
    IndexOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Number of qubits in the register.
        num_qubits: usize,
    },

    /// CNOT was called with the same qubit as control and target. An index
    /// error alongside [`SimError::IndexOutOfRange`].
    #[error("CNOT control and target must differ (both are qubit {0})")]
    ControlIsTarget(usize),

    /// A replacement amplitude vector has the wrong length.
    #[error("State size mismatch: expected {expected} amplitudes, got {got}")]
    SizeMismatch {
        /// Required length (2^n).
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },

    /// Division by a factor whose magnitude is below the scalar epsilon.
    #[error("Division by zero (divisor {divisor:e})")]
    DivisionByZero {
        /// The rejected divisor.
        divisor: f64,
    },

    /// The observed outcome has vanishing probability, so the collapsed
    /// state cannot be renormalised.
    #[error(
        "Measurement of qubit {qubit} observed {outcome} with probability {probability:e}; cannot renormalise"
    )]
    MeasurementDegenerate {
        /// Measured qubit.
        qubit: usize,
        /// Observed bit.
        outcome: u8,
        /// Probability of the observed bit.
        probability: f64,
    },

    /// A register must hold at least one qubit.
    #[error("Qubit count must be at least 1, got {0}")]
    InvalidQubitCount(usize),

    /// Requested register exceeds the configured ceiling.
    #[error("Requested {requested} qubits but the engine is limited to {max}")]
    TooManyQubits {
        /// Requested qubit count.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Operation requires a square matrix.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Matrix has no inverse.
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// Operand shapes are incompatible.
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Shape the operation required.
        expected: (usize, usize),
        /// Shape that was supplied.
        got: (usize, usize),
    },
}

impl SimError {
    /// Whether this error rejected a qubit index (out of range, or CNOT
    /// control equal to target).
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            SimError::IndexOutOfRange { .. } | SimError::ControlIsTarget(_)
        )
    }
}

/// Result type for engine operations.
pub type SimResult<T> = Result<T, SimError>;
