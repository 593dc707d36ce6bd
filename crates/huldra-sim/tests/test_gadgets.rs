//! Tests for gadget builders against the dense unitary oracle.

use huldra_sim::{circuit_unitary, compare_unitaries, pauli_gadget, phase_gadget};
use huldra_sim::unitary::compare_unitaries_with_tolerance;
use ndarray::Array2;

// ---------------------------------------------------------------------------
// Builder semantics
// ---------------------------------------------------------------------------

#[test]
fn phase_gadget_equals_all_z_pauli_gadget() {
    // Both implement exp(-i·0.45·Z⊗Z); the match is exact, not just
    // up to phase.
    let ladder = phase_gadget(0.9, 2).unwrap();
    let boxed = pauli_gadget("ZZ".parse().unwrap(), 0.9).unwrap();

    let u = circuit_unitary(&ladder).unwrap();
    let v = circuit_unitary(&boxed).unwrap();
    assert!(compare_unitaries_with_tolerance(&u, &v, 1e-12));
}

#[test]
fn wider_phase_gadget_still_matches_its_box() {
    let ladder = phase_gadget(0.65, 4).unwrap();
    let boxed = pauli_gadget("ZZZZ".parse().unwrap(), 0.65).unwrap();

    let u = circuit_unitary(&ladder).unwrap();
    let v = circuit_unitary(&boxed).unwrap();
    assert!(compare_unitaries(&u, &v));
}

#[test]
fn gadget_adjoint_inverts_the_unitary() {
    let gadget = pauli_gadget("XYYZ".parse().unwrap(), 0.65).unwrap();
    let u = circuit_unitary(&gadget).unwrap();
    let v = circuit_unitary(&gadget.adjoint()).unwrap();
    assert!(compare_unitaries(&v.dot(&u), &Array2::eye(16)));
}

// ---------------------------------------------------------------------------
// Comparison semantics
// ---------------------------------------------------------------------------

#[test]
fn comparison_ignores_global_phase() {
    // Rz(θ + 2π) = -Rz(θ): equal up to global phase only.
    let a = phase_gadget(0.9, 2).unwrap();
    let b = phase_gadget(0.9 + 2.0 * std::f64::consts::PI, 2).unwrap();

    let u = circuit_unitary(&a).unwrap();
    let v = circuit_unitary(&b).unwrap();
    assert!(compare_unitaries(&u, &v));
    // The raw matrices differ: the agreement really is only up to phase.
    assert!((u[[0, 0]] - v[[0, 0]]).norm() > 1.0);
}

#[test]
fn comparison_distinguishes_angles() {
    let a = phase_gadget(0.9, 2).unwrap();
    let b = phase_gadget(0.7, 2).unwrap();

    let u = circuit_unitary(&a).unwrap();
    let v = circuit_unitary(&b).unwrap();
    assert!(!compare_unitaries(&u, &v));
}
