//! Dense complex matrix algebra.
//!
//! A reference implementation of gate application as full 2^n × 2^n
//! operators. It costs O(4^n) per gate and is never used by the engine; it
//! exists to cross-check the bitmask kernels in [`crate::statevector`] and
//! for small ad-hoc calculations (tensor products, inverses).

use std::f64::consts::FRAC_1_SQRT_2;

use ndarray::{Array1, Array2, array, s};
use num_complex::Complex64;

use crate::basis::{dimension, qubit_mask};
use crate::complex::Complex;
use crate::error::{SimError, SimResult};

/// Pivots smaller than this are treated as zero during inversion.
pub const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Dense complex matrix.
pub type Matrix = Array2<Complex64>;

fn re(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

/// `n × n` identity.
pub fn identity(n: usize) -> Matrix {
    Array2::eye(n)
}

/// Hadamard gate matrix.
pub fn hadamard() -> Matrix {
    let h = FRAC_1_SQRT_2;
    array![[re(h), re(h)], [re(h), re(-h)]]
}

/// Pauli-X gate matrix.
pub fn pauli_x() -> Matrix {
    array![[re(0.0), re(1.0)], [re(1.0), re(0.0)]]
}

/// Pauli-Z gate matrix.
pub fn pauli_z() -> Matrix {
    array![[re(1.0), re(0.0)], [re(0.0), re(-1.0)]]
}

/// Kronecker (tensor) product `a ⊗ b`.
pub fn kron(a: &Matrix, b: &Matrix) -> Matrix {
    ndarray::linalg::kron(a, b)
}

/// Matrix product `a · b`.
pub fn matmul(a: &Matrix, b: &Matrix) -> SimResult<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(SimError::ShapeMismatch {
            expected: (a.ncols(), b.ncols()),
            got: b.dim(),
        });
    }
    Ok(a.dot(b))
}

/// Full operator for a single-qubit `gate` acting on `qubit` of an
/// `num_qubits`-qubit register.
///
/// Qubit `q` is bit `q` of the basis index, so the most significant qubit
/// is the leftmost Kronecker factor: `I ⊗ … ⊗ gate ⊗ … ⊗ I`.
pub fn embed_single_qubit(gate: &Matrix, qubit: usize, num_qubits: usize) -> SimResult<Matrix> {
    if gate.dim() != (2, 2) {
        return Err(SimError::ShapeMismatch {
            expected: (2, 2),
            got: gate.dim(),
        });
    }
    if qubit >= num_qubits {
        return Err(SimError::IndexOutOfRange { qubit, num_qubits });
    }

    let eye = identity(2);
    let operator = (0..num_qubits).rev().fold(identity(1), |acc, q| {
        let factor = if q == qubit { gate } else { &eye };
        kron(&acc, factor)
    });
    Ok(operator)
}

/// Permutation matrix of CNOT(control, target) on `num_qubits` qubits.
pub fn cnot_operator(control: usize, target: usize, num_qubits: usize) -> SimResult<Matrix> {
    for qubit in [control, target] {
        if qubit >= num_qubits {
            return Err(SimError::IndexOutOfRange { qubit, num_qubits });
        }
    }
    if control == target {
        return Err(SimError::ControlIsTarget(control));
    }

    let dim = dimension(num_qubits);
    let ctrl_mask = qubit_mask(control);
    let tgt_mask = qubit_mask(target);
    let mut operator = Matrix::zeros((dim, dim));
    for i in 0..dim {
        let j = if i & ctrl_mask != 0 { i ^ tgt_mask } else { i };
        operator[[j, i]] = re(1.0);
    }
    Ok(operator)
}

/// Multiply an amplitude vector by `operator`.
pub fn apply(operator: &Matrix, amplitudes: &[Complex]) -> SimResult<Vec<Complex>> {
    if operator.ncols() != amplitudes.len() {
        return Err(SimError::SizeMismatch {
            expected: operator.ncols(),
            got: amplitudes.len(),
        });
    }
    let v: Array1<Complex64> = amplitudes.iter().map(|&a| a.into()).collect();
    Ok(operator.dot(&v).iter().map(|&c| c.into()).collect())
}

/// Conjugate transpose.
pub fn adjoint(m: &Matrix) -> Matrix {
    m.t().mapv(|c| c.conj())
}

/// Whether `m† m` is the identity within `tolerance`.
pub fn is_unitary(m: &Matrix, tolerance: f64) -> bool {
    if !m.is_square() {
        return false;
    }
    let product = adjoint(m).dot(m);
    let eye = identity(m.nrows());
    product
        .iter()
        .zip(eye.iter())
        .all(|(a, b)| (a - b).norm() < tolerance)
}

/// Inverse by Gauss-Jordan elimination with partial pivoting.
pub fn inverse(m: &Matrix) -> SimResult<Matrix> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(SimError::NotSquare { rows, cols });
    }
    let n = rows;

    // [m | I] -> [I | m⁻¹]
    let mut aug = Matrix::zeros((n, 2 * n));
    aug.slice_mut(s![.., ..n]).assign(m);
    aug.slice_mut(s![.., n..]).assign(&identity(n));

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| aug[[a, col]].norm().total_cmp(&aug[[b, col]].norm()))
            .unwrap_or(col);
        if aug[[pivot_row, col]].norm() < SINGULAR_TOLERANCE {
            return Err(SimError::SingularMatrix);
        }
        if pivot_row != col {
            for j in 0..2 * n {
                aug.swap([col, j], [pivot_row, j]);
            }
        }

        let pivot = aug[[col, col]];
        aug.row_mut(col).mapv_inplace(|x| x / pivot);

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = aug[[r, col]];
            if factor.norm() == 0.0 {
                continue;
            }
            for j in 0..2 * n {
                let v = aug[[col, j]];
                aug[[r, j]] -= factor * v;
            }
        }
    }

    Ok(aug.slice(s![.., n..]).to_owned())
}
