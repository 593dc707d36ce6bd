//! Gadget circuit builders.
//!
//! Constructors for the rotation gadgets the hidden-inverse passes
//! consume: bare phase-gadget ladders, boxed Pauli gadgets, and random
//! gadget stacks for randomized verification.

use std::f64::consts::PI;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use huldra_ir::{Circuit, Pauli, PauliWord, QubitId};

use crate::error::{SimError, SimResult};

/// Build a phase-gadget ladder: CX chain down the line, `Rz(theta)` on
/// the last qubit, mirrored CX chain back up.
pub fn phase_gadget(theta: f64, n_qubits: u32) -> SimResult<Circuit> {
    if n_qubits < 2 {
        return Err(SimError::TooFewQubits(n_qubits));
    }

    let mut circuit = Circuit::new("phase_gadget", n_qubits);
    for q in 0..n_qubits - 1 {
        circuit.cx(QubitId(q), QubitId(q + 1))?;
    }
    circuit.rz(theta, QubitId(n_qubits - 1))?;
    for q in (0..n_qubits - 1).rev() {
        circuit.cx(QubitId(q), QubitId(q + 1))?;
    }
    Ok(circuit)
}

/// Build a boxed Pauli gadget over the word's qubits.
///
/// The circuit holds a single [`huldra_ir::Gate::PauliExp`] box; lower
/// it with `DecomposeBoxes` (or rewrite it directly with the gadget
/// pass) to reach elementary form.
pub fn pauli_gadget(word: PauliWord, theta: f64) -> SimResult<Circuit> {
    if word.is_empty() {
        return Err(SimError::EmptyWord);
    }

    let n = u32::try_from(word.len()).unwrap_or(u32::MAX);
    let mut circuit = Circuit::new(format!("pauli_{word}"), n);
    let qubits: Vec<QubitId> = (0..n).map(QubitId).collect();
    circuit.pauli_exp(word, theta, qubits)?;
    Ok(circuit)
}

/// Build `depth` layers of random Pauli-exponential boxes over a random
/// qubit ordering each, with angles drawn uniformly from `[-π, π)`.
pub fn random_gadget(n_qubits: u32, depth: usize, rng: &mut impl Rng) -> SimResult<Circuit> {
    if n_qubits == 0 {
        return Err(SimError::TooFewQubits(0));
    }

    let mut circuit = Circuit::new("random_gadget", n_qubits);
    for _ in 0..depth {
        let mut qubits: Vec<QubitId> = (0..n_qubits).map(QubitId).collect();
        qubits.shuffle(rng);

        let letters = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];
        let word = PauliWord::new(
            (0..n_qubits).map(|_| letters[rng.gen_range(0..letters.len())]),
        );
        let theta = rng.gen_range(-PI..PI);
        circuit.pauli_exp(word, theta, qubits)?;
    }

    debug!(n_qubits, depth, "generated random gadget stack");
    Ok(circuit)
}
