//! Statevector simulation kernels.
//!
//! Gates are applied as pairwise transforms over index pairs that differ
//! only in the target qubit's bit, so every gate costs O(2^n) instead of the
//! O(4^n) of a full matrix-vector product.

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use rand::Rng;

use crate::basis::{basis_label, dimension, index_pairs, qubit_mask};
use crate::complex::{Complex, EPSILON};
use crate::error::{SimError, SimResult};

/// Amplitudes with magnitude at or below this are omitted from displays.
pub const DISPLAY_THRESHOLD: f64 = 1e-10;

/// Largest register the index arithmetic supports: 32 qubits, or one less
/// than the pointer width so that `2^n` still fits in a `usize`.
pub const MAX_SUPPORTED_QUBITS: usize = if (usize::BITS as usize) - 1 < 32 {
    usize::BITS as usize - 1
} else {
    32
};

/// A pure quantum state of `n` qubits: 2^n complex amplitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes, indexed by basis state.
    amplitudes: Vec<Complex>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a statevector initialised to |0...0⟩.
    ///
    /// Only [`MAX_SUPPORTED_QUBITS`] is checked here, which still permits
    /// multi-GiB allocations. Engines should be built through
    /// [`QuantumComputer::with_config`](crate::QuantumComputer::with_config),
    /// which applies the configured ceiling first.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits == 0 {
            return Err(SimError::InvalidQubitCount(num_qubits));
        }
        if num_qubits > MAX_SUPPORTED_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_SUPPORTED_QUBITS,
            });
        }
        Ok(Self {
            amplitudes: ground_state(num_qubits),
            num_qubits,
        })
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^n).
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the amplitudes.
    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    /// Sum of squared magnitudes; 1 for a normalised state.
    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.magnitude_squared()).sum()
    }

    /// Reinitialise to |0...0⟩.
    pub fn reset(&mut self) {
        self.amplitudes = ground_state(self.num_qubits);
    }

    /// Replace the amplitudes wholesale. No normalisation check is made.
    pub fn set_amplitudes(&mut self, amplitudes: Vec<Complex>) -> SimResult<()> {
        if amplitudes.len() != self.dimension() {
            return Err(SimError::SizeMismatch {
                expected: self.dimension(),
                got: amplitudes.len(),
            });
        }
        self.amplitudes = amplitudes;
        Ok(())
    }

    /// Fail with [`SimError::IndexOutOfRange`] unless `qubit < n`.
    pub fn validate_qubit(&self, qubit: usize) -> SimResult<()> {
        if qubit >= self.num_qubits {
            return Err(SimError::IndexOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Hadamard: `new[i0] = (a + b)/√2`, `new[i1] = (a - b)/√2`.
    pub fn apply_hadamard(&mut self, qubit: usize) -> SimResult<()> {
        self.validate_qubit(qubit)?;
        let mut next = vec![Complex::ZERO; self.dimension()];
        for (i0, i1) in index_pairs(self.num_qubits, qubit) {
            let a = self.amplitudes[i0];
            let b = self.amplitudes[i1];
            next[i0] = (a + b) * FRAC_1_SQRT_2;
            next[i1] = (a - b) * FRAC_1_SQRT_2;
        }
        self.amplitudes = next;
        Ok(())
    }

    /// Pauli-X: swap the two amplitudes of every pair.
    pub fn apply_pauli_x(&mut self, qubit: usize) -> SimResult<()> {
        self.validate_qubit(qubit)?;
        let mut next = vec![Complex::ZERO; self.dimension()];
        for (i0, i1) in index_pairs(self.num_qubits, qubit) {
            next[i0] = self.amplitudes[i1];
            next[i1] = self.amplitudes[i0];
        }
        self.amplitudes = next;
        Ok(())
    }

    /// Pauli-Z: negate every amplitude whose `qubit` bit is 1. Diagonal, so
    /// it runs in place.
    pub fn apply_pauli_z(&mut self, qubit: usize) -> SimResult<()> {
        self.validate_qubit(qubit)?;
        for (_, i1) in index_pairs(self.num_qubits, qubit) {
            self.amplitudes[i1] = -self.amplitudes[i1];
        }
        Ok(())
    }

    /// CNOT: flip the target bit of every index whose control bit is set.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> SimResult<()> {
        self.validate_qubit(control)?;
        self.validate_qubit(target)?;
        if control == target {
            return Err(SimError::ControlIsTarget(control));
        }

        let ctrl_mask = qubit_mask(control);
        let tgt_mask = qubit_mask(target);
        let mut next = vec![Complex::ZERO; self.dimension()];
        for (i, &amp) in self.amplitudes.iter().enumerate() {
            if i & ctrl_mask != 0 {
                next[i ^ tgt_mask] = amp;
            } else {
                next[i] = amp;
            }
        }
        self.amplitudes = next;
        Ok(())
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Marginal probability of observing `qubit` as 0, clamped into `[0, 1]`.
    pub fn probability_of_zero(&self, qubit: usize) -> SimResult<f64> {
        self.validate_qubit(qubit)?;
        Ok(self.marginal(qubit, 0))
    }

    /// Measure `qubit`, collapse the state onto the observed outcome and
    /// renormalise.
    ///
    /// One uniform draw `r ∈ [0, 1)` decides the outcome: 0 if
    /// `r < P(0)`, else 1.
    pub fn measure<R: Rng>(&mut self, qubit: usize, rng: &mut R) -> SimResult<u8> {
        self.validate_qubit(qubit)?;

        let prob_zero = self.marginal(qubit, 0);
        let r: f64 = rng.r#gen();
        let outcome = u8::from(r >= prob_zero);
        let probability = if outcome == 0 {
            prob_zero
        } else {
            self.marginal(qubit, 1)
        };

        self.amplitudes = self.collapsed(qubit, outcome, probability)?;
        Ok(outcome)
    }

    /// Sum of squared magnitudes over indices whose `qubit` bit equals
    /// `value`, clamped to absorb floating drift.
    fn marginal(&self, qubit: usize, value: u8) -> f64 {
        let sum: f64 = index_pairs(self.num_qubits, qubit)
            .map(|(i0, i1)| {
                let index = if value == 0 { i0 } else { i1 };
                self.amplitudes[index].magnitude_squared()
            })
            .sum();
        sum.clamp(0.0, 1.0)
    }

    /// Fresh vector keeping only amplitudes consistent with `outcome`,
    /// scaled by `1/sqrt(probability)`.
    fn collapsed(&self, qubit: usize, outcome: u8, probability: f64) -> SimResult<Vec<Complex>> {
        if probability < EPSILON {
            return Err(SimError::MeasurementDegenerate {
                qubit,
                outcome,
                probability,
            });
        }
        let norm = probability.sqrt();

        let mut next = vec![Complex::ZERO; self.dimension()];
        for (i0, i1) in index_pairs(self.num_qubits, qubit) {
            let kept = if outcome == 0 { i0 } else { i1 };
            next[kept] = self.amplitudes[kept].checked_div_real(norm)?;
        }
        Ok(next)
    }
}

fn ground_state(num_qubits: usize) -> Vec<Complex> {
    let mut amplitudes = vec![Complex::ZERO; dimension(num_qubits)];
    amplitudes[0] = Complex::ONE;
    amplitudes
}

impl fmt::Display for Statevector {
    /// One line per amplitude with magnitude above [`DISPLAY_THRESHOLD`]:
    /// `|label>: amplitude (prob p)`, with a single space before `(prob`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, amp) in self.amplitudes.iter().enumerate() {
            if amp.magnitude() > DISPLAY_THRESHOLD {
                writeln!(
                    f,
                    "|{}>: {} (prob {:.4})",
                    basis_label(index, self.num_qubits),
                    amp,
                    amp.magnitude_squared()
                )?;
            }
        }
        Ok(())
    }
}
