//! Gadget-box lowering.
//!
//! Lowers the opaque rotation boxes ([`Gate::PauliExp`],
//! [`Gate::PhaseGadget`]) to their elementary ladder form, using the
//! standard synthesis for `exp(-i·θ/2·P)`:
//!
//!   basis change · CX ladder · Rz(θ) · reverse ladder · inverse basis
//!
//! with per-qubit basis rotations diagonalising each Pauli into Z:
//!   X → H,  Y → Sdg·H,  Z → (nothing),  I → skipped entirely.
//!
//! The inverse layers are emitted in exact adjoint order, so the lowered
//! circuit is structurally mirrored around its central Rz — the shape
//! the ladder partitioner requires.

use tracing::debug;

use huldra_ir::{Circuit, Gate, Pauli, PauliWord, QubitId};

use crate::error::CompileResult;
use crate::pass::Pass;

/// Lower every gadget box in `circuit`; other operations pass through.
pub fn decompose_boxes(circuit: &Circuit) -> CompileResult<Circuit> {
    let mut out = Circuit::new(circuit.name(), circuit.num_qubits());
    let mut lowered = 0usize;

    for inst in circuit.instructions() {
        match &inst.gate {
            Gate::PauliExp { word, theta } => {
                let ladder = elementary_ladder(word, *theta)?;
                out.append_mapped(&ladder, &inst.qubits)?;
                lowered += 1;
            }
            Gate::PhaseGadget { arity, theta } => {
                let word = PauliWord::all_z(*arity as usize);
                let ladder = elementary_ladder(&word, *theta)?;
                out.append_mapped(&ladder, &inst.qubits)?;
                lowered += 1;
            }
            _ => out.push(inst.clone())?,
        }
    }

    debug!(lowered, "lowered gadget boxes");
    Ok(out)
}

/// The elementary ladder for `exp(-i·θ/2·P)`, over `word.len()` local
/// qubits (letter `i` on qubit `i`).
///
/// An identity-only word lowers to an empty circuit: the rotation is a
/// pure global phase.
pub(crate) fn elementary_ladder(word: &PauliWord, theta: f64) -> CompileResult<Circuit> {
    let width = u32::try_from(word.len()).unwrap_or(u32::MAX);
    let mut circuit = Circuit::new("ladder", width);
    let support = word.support();
    if support.is_empty() {
        return Ok(circuit);
    }

    // Basis change, ascending qubit order.
    for &pos in &support {
        let qubit = QubitId::from(pos);
        match word.ops()[pos] {
            Pauli::X => {
                circuit.h(qubit)?;
            }
            Pauli::Y => {
                circuit.sdg(qubit)?;
                circuit.h(qubit)?;
            }
            Pauli::Z | Pauli::I => {}
        }
    }

    // CX ladder collapsing parity onto the last live qubit.
    for pair in support.windows(2) {
        circuit.cx(QubitId::from(pair[0]), QubitId::from(pair[1]))?;
    }

    let last = QubitId::from(*support.last().expect("non-empty support"));
    circuit.rz(theta, last)?;

    // Undo ladder.
    for pair in support.windows(2).rev() {
        circuit.cx(QubitId::from(pair[0]), QubitId::from(pair[1]))?;
    }

    // Undo basis change, descending qubit order (exact adjoint of the
    // forward layer, keeping the circuit structurally mirrored).
    for &pos in support.iter().rev() {
        let qubit = QubitId::from(pos);
        match word.ops()[pos] {
            Pauli::X => {
                circuit.h(qubit)?;
            }
            Pauli::Y => {
                circuit.h(qubit)?;
                circuit.s(qubit)?;
            }
            Pauli::Z | Pauli::I => {}
        }
    }

    Ok(circuit)
}

/// Pass wrapper for [`decompose_boxes`].
pub struct DecomposeBoxes;

impl Pass for DecomposeBoxes {
    fn name(&self) -> &'static str {
        "decompose_boxes"
    }

    fn run(&self, circuit: &mut Circuit) -> CompileResult<()> {
        *circuit = decompose_boxes(circuit)?;
        Ok(())
    }
}
