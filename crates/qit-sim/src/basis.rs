//! Qubit-to-index convention.
//!
//! Qubit `q` is bit `q` of a basis-state index (qubit 0 is the least
//! significant bit). Gate kernels address amplitudes and displays print
//! labels through these functions only, so the two can never disagree.

/// Single-bit mask selecting qubit `qubit` within a basis index.
#[inline]
pub const fn qubit_mask(qubit: usize) -> usize {
    1 << qubit
}

/// Classical value (0 or 1) of `qubit` in the basis state `index`.
#[inline]
pub const fn qubit_value(index: usize, qubit: usize) -> u8 {
    ((index >> qubit) & 1) as u8
}

/// Number of amplitudes in an `num_qubits`-qubit register.
#[inline]
pub const fn dimension(num_qubits: usize) -> usize {
    1 << num_qubits
}

/// Index pairs `(i0, i1)` that differ only in `qubit`'s bit, with that bit
/// clear in `i0` and set in `i1`.
///
/// Every index of the register appears in exactly one pair. Pairs are
/// produced by inserting a zero bit at position `qubit` into each counter
/// value below `2^(n-1)`.
pub fn index_pairs(num_qubits: usize, qubit: usize) -> impl Iterator<Item = (usize, usize)> {
    let mask = qubit_mask(qubit);
    let low = mask - 1;
    (0..dimension(num_qubits) >> 1).map(move |k| {
        let i0 = ((k & !low) << 1) | (k & low);
        (i0, i0 | mask)
    })
}

/// Basis label for `index`, most significant qubit first.
///
/// `basis_label(1, 3) == "001"`: qubit 0 is set and is printed last.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    (0..num_qubits)
        .rev()
        .map(|q| if qubit_value(index, q) == 1 { '1' } else { '0' })
        .collect()
}
