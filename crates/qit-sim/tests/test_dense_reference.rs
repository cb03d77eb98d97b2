//! Cross-check of the bitmask gate kernels against full dense operators
//! built from Kronecker products.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qit_sim::matrix::{self, Matrix};
use qit_sim::{Complex, SimError, Statevector};

/// Random normalised state of `num_qubits` qubits.
fn random_state(num_qubits: usize, rng: &mut StdRng) -> Vec<Complex> {
    let raw: Vec<Complex> = (0..1 << num_qubits)
        .map(|_| Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let norm = raw.iter().map(|a| a.magnitude_squared()).sum::<f64>().sqrt();
    raw.into_iter()
        .map(|a| a.checked_div_real(norm).unwrap())
        .collect()
}

fn assert_states_close(a: &[Complex], b: &[Complex]) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(x.approx_eq(*y, 1e-12), "index {i}: {x} != {y}");
    }
}

fn check_single_qubit<F>(gate: &Matrix, kernel: F)
where
    F: Fn(&mut Statevector, usize) -> Result<(), SimError>,
{
    let mut rng = StdRng::seed_from_u64(11);
    for num_qubits in 1..=5 {
        for qubit in 0..num_qubits {
            let input = random_state(num_qubits, &mut rng);
            let mut sv = Statevector::new(num_qubits).unwrap();
            sv.set_amplitudes(input.clone()).unwrap();
            kernel(&mut sv, qubit).unwrap();

            let operator = matrix::embed_single_qubit(gate, qubit, num_qubits).unwrap();
            let expected = matrix::apply(&operator, &input).unwrap();
            assert_states_close(sv.amplitudes(), &expected);
        }
    }
}

#[test]
fn hadamard_matches_dense_operator() {
    check_single_qubit(&matrix::hadamard(), Statevector::apply_hadamard);
}

#[test]
fn pauli_x_matches_dense_operator() {
    check_single_qubit(&matrix::pauli_x(), Statevector::apply_pauli_x);
}

#[test]
fn pauli_z_matches_dense_operator() {
    check_single_qubit(&matrix::pauli_z(), Statevector::apply_pauli_z);
}

#[test]
fn cnot_matches_dense_operator() {
    let mut rng = StdRng::seed_from_u64(12);
    for num_qubits in 2..=5 {
        for control in 0..num_qubits {
            for target in (0..num_qubits).filter(|&t| t != control) {
                let input = random_state(num_qubits, &mut rng);
                let mut sv = Statevector::new(num_qubits).unwrap();
                sv.set_amplitudes(input.clone()).unwrap();
                sv.apply_cnot(control, target).unwrap();

                let operator = matrix::cnot_operator(control, target, num_qubits).unwrap();
                let expected = matrix::apply(&operator, &input).unwrap();
                assert_states_close(sv.amplitudes(), &expected);
            }
        }
    }
}

#[test]
fn embedded_operators_are_unitary() {
    for num_qubits in 1..=4 {
        for qubit in 0..num_qubits {
            for gate in [matrix::hadamard(), matrix::pauli_x(), matrix::pauli_z()] {
                let op = matrix::embed_single_qubit(&gate, qubit, num_qubits).unwrap();
                assert!(matrix::is_unitary(&op, 1e-12));
                let inv = matrix::inverse(&op).unwrap();
                assert!(
                    inv.iter()
                        .zip(matrix::adjoint(&op).iter())
                        .all(|(a, b)| (a - b).norm() < 1e-9)
                );
            }
        }
    }
}

#[test]
fn bell_circuit_as_dense_product() {
    let h0 = matrix::embed_single_qubit(&matrix::hadamard(), 0, 2).unwrap();
    let cx = matrix::cnot_operator(0, 1, 2).unwrap();
    let circuit = matrix::matmul(&cx, &h0).unwrap();

    let mut sv = Statevector::new(2).unwrap();
    let expected = matrix::apply(&circuit, sv.amplitudes()).unwrap();
    sv.apply_hadamard(0).unwrap();
    sv.apply_cnot(0, 1).unwrap();
    assert_states_close(sv.amplitudes(), &expected);
}
