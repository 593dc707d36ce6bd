//! Dense unitary extraction and comparison.
//!
//! Builds the full `2^n × 2^n` matrix of a circuit (qubit 0 is the most
//! significant bit of the basis index) and compares unitaries for
//! equality up to global phase. Width is capped at
//! [`MAX_DENSE_QUBITS`]: these matrices exist to verify rewrites on
//! small circuits, not to simulate at scale.

use ndarray::Array2;
use num_complex::Complex64;

use huldra_ir::{Circuit, Gate, Pauli, PauliWord};

use crate::error::{SimError, SimResult};

/// Tolerance used by [`compare_unitaries`].
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Maximum circuit width for dense unitary extraction.
pub const MAX_DENSE_QUBITS: u32 = 12;

/// A dense complex matrix.
pub type Unitary = Array2<Complex64>;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// The 2x2 matrix of a single-qubit Pauli operator.
pub fn pauli_matrix(pauli: Pauli) -> Unitary {
    match pauli {
        Pauli::I => Array2::eye(2),
        Pauli::X => ndarray::array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]],
        Pauli::Y => ndarray::array![[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, 1.0), c(0.0, 0.0)]],
        Pauli::Z => ndarray::array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(-1.0, 0.0)]],
    }
}

fn rz_matrix(theta: f64) -> Unitary {
    ndarray::array![
        [Complex64::from_polar(1.0, -theta / 2.0), c(0.0, 0.0)],
        [c(0.0, 0.0), Complex64::from_polar(1.0, theta / 2.0)],
    ]
}

fn rx_matrix(theta: f64) -> Unitary {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    ndarray::array![[c(cos, 0.0), c(0.0, -sin)], [c(0.0, -sin), c(cos, 0.0)]]
}

/// Tensor product of the word's Pauli matrices, in positional order.
fn word_matrix(word: &PauliWord) -> Unitary {
    let mut out = Array2::eye(1);
    for &p in word.ops() {
        out = kron(&out, &pauli_matrix(p));
    }
    out
}

/// `exp(-i·θ/2·P)` via the closed form `cos(θ/2)·I - i·sin(θ/2)·P`
/// (P squares to the identity).
fn exp_pauli_matrix(word: &PauliWord, theta: f64) -> Unitary {
    let dim = 1usize << word.len();
    let p = word_matrix(word);
    let eye: Unitary = Array2::eye(dim);
    eye.mapv(|e| e * c((theta / 2.0).cos(), 0.0)) + p.mapv(|e| e * c(0.0, -(theta / 2.0).sin()))
}

/// The unitary of a single gate on its own qubits.
pub fn gate_unitary(gate: &Gate) -> Unitary {
    use std::f64::consts::FRAC_PI_2;

    match gate {
        Gate::H => {
            let s = 1.0 / 2.0_f64.sqrt();
            ndarray::array![[c(s, 0.0), c(s, 0.0)], [c(s, 0.0), c(-s, 0.0)]]
        }
        Gate::X => pauli_matrix(Pauli::X),
        Gate::S => ndarray::array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]],
        Gate::Sdg => ndarray::array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, -1.0)]],
        Gate::V => rx_matrix(FRAC_PI_2),
        Gate::Vdg => rx_matrix(-FRAC_PI_2),
        Gate::Rz(theta) => rz_matrix(*theta),
        // Prx(θ, φ) = Rz(φ)·Rx(θ)·Rz(-φ)
        Gate::Prx(theta, phi) => rz_matrix(*phi)
            .dot(&rx_matrix(*theta))
            .dot(&rz_matrix(-phi)),
        Gate::Cx => {
            let mut m: Unitary = Array2::zeros((4, 4));
            m[[0, 0]] = c(1.0, 0.0);
            m[[1, 1]] = c(1.0, 0.0);
            m[[2, 3]] = c(1.0, 0.0);
            m[[3, 2]] = c(1.0, 0.0);
            m
        }
        Gate::Rzz(theta) => exp_pauli_matrix(&PauliWord::all_z(2), *theta),
        Gate::PauliExp { word, theta } => exp_pauli_matrix(word, *theta),
        Gate::PhaseGadget { arity, theta } => {
            exp_pauli_matrix(&PauliWord::all_z(*arity as usize), *theta)
        }
    }
}

/// Kronecker product.
fn kron(a: &Unitary, b: &Unitary) -> Unitary {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    let mut out: Unitary = Array2::zeros((ar * br, ac * bc));
    for i in 0..ar {
        for j in 0..ac {
            for p in 0..br {
                for q in 0..bc {
                    out[[i * br + p, j * bc + q]] = a[[i, j]] * b[[p, q]];
                }
            }
        }
    }
    out
}

/// Embed a `2^k × 2^k` gate matrix acting on `qubits` into the full
/// `2^n × 2^n` space. Qubit 0 is the most significant basis bit.
fn embed(gate: &Unitary, qubits: &[u32], num_qubits: u32) -> Unitary {
    let n = num_qubits as usize;
    let dim = 1usize << n;
    let k = qubits.len();
    let mut out: Unitary = Array2::zeros((dim, dim));

    for col in 0..dim {
        let mut sub_in = 0usize;
        for &q in qubits {
            sub_in = (sub_in << 1) | ((col >> (n - 1 - q as usize)) & 1);
        }
        for sub_out in 0..(1usize << k) {
            let amp = gate[[sub_out, sub_in]];
            if amp == c(0.0, 0.0) {
                continue;
            }
            let mut row = col;
            for (idx, &q) in qubits.iter().enumerate() {
                let bit = (sub_out >> (k - 1 - idx)) & 1;
                let shift = n - 1 - q as usize;
                row = (row & !(1 << shift)) | (bit << shift);
            }
            out[[row, col]] += amp;
        }
    }
    out
}

/// Compute the dense unitary of a circuit.
pub fn circuit_unitary(circuit: &Circuit) -> SimResult<Unitary> {
    let n = circuit.num_qubits();
    if n > MAX_DENSE_QUBITS {
        return Err(SimError::WidthTooLarge {
            num_qubits: n,
            max: MAX_DENSE_QUBITS,
        });
    }

    let dim = 1usize << n;
    let mut total: Unitary = Array2::eye(dim);
    for inst in circuit.instructions() {
        let qubits: Vec<u32> = inst.qubits.iter().map(|q| q.0).collect();
        let gate = gate_unitary(&inst.gate);
        total = embed(&gate, &qubits, n).dot(&total);
    }
    Ok(total)
}

/// Compare two unitaries for equality up to global phase, with the
/// default tolerance.
pub fn compare_unitaries(a: &Unitary, b: &Unitary) -> bool {
    compare_unitaries_with_tolerance(a, b, DEFAULT_TOLERANCE)
}

/// Compare two unitaries for equality up to global phase.
///
/// Fixes the phase from the largest-modulus entry of `b`, then compares
/// element-wise within `tolerance`.
pub fn compare_unitaries_with_tolerance(a: &Unitary, b: &Unitary, tolerance: f64) -> bool {
    if a.dim() != b.dim() {
        return false;
    }

    let mut pivot = (0usize, 0usize);
    let mut best = 0.0f64;
    for ((i, j), e) in b.indexed_iter() {
        if e.norm() > best {
            best = e.norm();
            pivot = (i, j);
        }
    }
    if best <= tolerance {
        // b is (numerically) the zero matrix; no phase to fix.
        return a.iter().all(|e| e.norm() <= tolerance);
    }

    let phase = a[[pivot.0, pivot.1]] / b[[pivot.0, pivot.1]];
    if (phase.norm() - 1.0).abs() > tolerance {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x - phase * y).norm() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use huldra_ir::QubitId;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_circuit_is_identity() {
        let circuit = Circuit::new("id", 2);
        let u = circuit_unitary(&circuit).unwrap();
        assert!(compare_unitaries(&u, &Array2::eye(4)));
    }

    #[test]
    fn test_h_squares_to_identity() {
        let mut circuit = Circuit::new("hh", 1);
        circuit.h(QubitId(0)).unwrap().h(QubitId(0)).unwrap();
        let u = circuit_unitary(&circuit).unwrap();
        assert!(compare_unitaries(&u, &Array2::eye(2)));
    }

    #[test]
    fn test_cx_operand_order() {
        // CX(1, 0): control is qubit 1 (least significant bit here).
        let mut circuit = Circuit::new("cx10", 2);
        circuit.cx(QubitId(1), QubitId(0)).unwrap();
        let u = circuit_unitary(&circuit).unwrap();
        // |01> -> |11>
        assert!((u[[3, 1]].re - 1.0).abs() < 1e-12);
        // |00> -> |00>
        assert!((u[[0, 0]].re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rz_pi_is_z_up_to_phase() {
        let mut circuit = Circuit::new("rz", 1);
        circuit.rz(PI, QubitId(0)).unwrap();
        let u = circuit_unitary(&circuit).unwrap();
        let z = pauli_matrix(Pauli::Z);
        assert!(compare_unitaries(&u, &z));
    }

    #[test]
    fn test_rzz_matches_all_z_exp() {
        let mut circuit = Circuit::new("rzz", 2);
        circuit.rzz(0.9, QubitId(0), QubitId(1)).unwrap();
        let u = circuit_unitary(&circuit).unwrap();

        let mut boxed = Circuit::new("box", 2);
        let word: PauliWord = "ZZ".parse().unwrap();
        boxed
            .pauli_exp(word, 0.9, [QubitId(0), QubitId(1)])
            .unwrap();
        let v = circuit_unitary(&boxed).unwrap();

        assert!(compare_unitaries_with_tolerance(&u, &v, 1e-12));
    }

    #[test]
    fn test_prx_is_conjugated_rx() {
        let u = gate_unitary(&Gate::Prx(0.7, 0.0));
        let v = rx_matrix(0.7);
        assert!(compare_unitaries_with_tolerance(&u, &v, 1e-12));
    }

    #[test]
    fn test_adjoint_circuit_inverts_unitary() {
        let mut circuit = Circuit::new("c", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .rz(0.37, QubitId(1))
            .unwrap()
            .prx(0.5, -0.25, QubitId(0))
            .unwrap();
        let u = circuit_unitary(&circuit).unwrap();
        let v = circuit_unitary(&circuit.adjoint()).unwrap();
        assert!(compare_unitaries(&v.dot(&u), &Array2::eye(4)));
    }

    #[test]
    fn test_width_cap() {
        let circuit = Circuit::new("wide", MAX_DENSE_QUBITS + 1);
        assert!(matches!(
            circuit_unitary(&circuit),
            Err(SimError::WidthTooLarge { .. })
        ));
    }

    #[test]
    fn test_compare_rejects_different_action() {
        let mut a = Circuit::new("a", 1);
        a.h(QubitId(0)).unwrap();
        let mut b = Circuit::new("b", 1);
        b.x(QubitId(0)).unwrap();
        let ua = circuit_unitary(&a).unwrap();
        let ub = circuit_unitary(&b).unwrap();
        assert!(!compare_unitaries(&ua, &ub));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn comparison_is_phase_blind(theta in -PI..PI, phase in -PI..PI) {
                let mut circuit = Circuit::new("rzz", 2);
                circuit.rzz(theta, QubitId(0), QubitId(1)).unwrap();
                let u = circuit_unitary(&circuit).unwrap();
                let shifted = u.mapv(|e| e * Complex64::from_polar(1.0, phase));
                prop_assert!(compare_unitaries(&u, &shifted));
            }

            #[test]
            fn circuit_unitaries_are_unitary(theta in -PI..PI) {
                let mut circuit = Circuit::new("c", 2);
                circuit.h(QubitId(0)).unwrap();
                circuit.prx(theta, theta / 3.0, QubitId(1)).unwrap();
                circuit.cx(QubitId(0), QubitId(1)).unwrap();
                circuit.rzz(theta, QubitId(0), QubitId(1)).unwrap();
                let u = circuit_unitary(&circuit).unwrap();

                let adjoint = circuit_unitary(&circuit.adjoint()).unwrap();
                prop_assert!(compare_unitaries(&adjoint.dot(&u), &Array2::eye(4)));
            }
        }
    }
}
