//! Benchmarks for statevector gate kernels
//!
//! Run with: cargo bench -p qit-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use qit_sim::Statevector;

/// Benchmark single-qubit gates across register sizes
fn bench_single_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gates");

    for num_qubits in &[4, 8, 12, 16, 20] {
        group.bench_with_input(
            BenchmarkId::new("hadamard", num_qubits),
            num_qubits,
            |b, &n| {
                let mut sv = Statevector::new(n).unwrap();
                b.iter(|| sv.apply_hadamard(black_box(n / 2)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("pauli_x", num_qubits),
            num_qubits,
            |b, &n| {
                let mut sv = Statevector::new(n).unwrap();
                b.iter(|| sv.apply_pauli_x(black_box(n - 1)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("pauli_z", num_qubits),
            num_qubits,
            |b, &n| {
                let mut sv = Statevector::new(n).unwrap();
                b.iter(|| sv.apply_pauli_z(black_box(0)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark CNOT
fn bench_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot");

    for num_qubits in &[4, 8, 12, 16, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), num_qubits, |b, &n| {
            let mut sv = Statevector::new(n).unwrap();
            sv.apply_hadamard(0).unwrap();
            b.iter(|| sv.apply_cnot(black_box(0), black_box(n - 1)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark measurement with collapse
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    for num_qubits in &[4, 12, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), num_qubits, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            let mut sv = Statevector::new(n).unwrap();
            b.iter(|| {
                sv.reset();
                sv.apply_hadamard(0).unwrap();
                sv.measure(black_box(0), &mut rng).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_qubit_gates, bench_cnot, bench_measure);
criterion_main!(benches);
