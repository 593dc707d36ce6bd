//! Hidden-inverse gadget rewriting.
//!
//! A gadget is a multi-qubit rotation: an entangling ladder bracketing a
//! single Rz. The rewriter compiles the pre-rotation ladder with the
//! standard CX decomposition and emits the post-rotation segment as the
//! structural adjoint of that compiled prefix, so the two halves are
//! hidden inverses of each other and the result needs no correction
//! layer.

use tracing::debug;

use huldra_ir::{Circuit, Gate, PauliWord};

use crate::error::{CompileError, CompileResult};
use crate::partition::{partition_gadget, partition_phase_gadget, GadgetParts};
use crate::pass::Pass;
use crate::passes::boxes::elementary_ladder;
use crate::predicate::GateSetPredicate;
use crate::tables::{cx_decomposition, rebase_clifford};

/// Compile a ladder segment into the native gate set using the standard
/// CX decomposition and the Clifford rebase table.
pub fn rebase_ladder(segment: &Circuit) -> CompileResult<Circuit> {
    let mut out = Circuit::new(segment.name(), segment.num_qubits());
    for (index, inst) in segment.instructions().iter().enumerate() {
        match &inst.gate {
            Gate::Cx => {
                for native in cx_decomposition(inst.qubits[0], inst.qubits[1]) {
                    out.push(native)?;
                }
            }
            Gate::Rz(_) | Gate::Prx(_, _) | Gate::Rzz(_) => out.push(inst.clone())?,
            gate => {
                let rebased = inst
                    .qubits
                    .first()
                    .and_then(|&qubit| rebase_clifford(gate, qubit));
                let Some(seq) = rebased else {
                    return Err(CompileError::GateSetViolation {
                        index,
                        gate: inst.name().into(),
                    });
                };
                for native in seq {
                    out.push(native)?;
                }
            }
        }
    }
    Ok(out)
}

/// Assemble the rewritten gadget from its partition: compiled prefix,
/// untouched rotation, and the prefix's adjoint as the suffix.
fn reassemble(parts: &GadgetParts) -> CompileResult<Circuit> {
    let prefix = rebase_ladder(&parts.prefix)?;
    let mut out = Circuit::new(parts.rotation.name(), parts.rotation.num_qubits());
    out.append(&prefix)?;
    out.append(&parts.rotation)?;
    out.append(&prefix.adjoint())?;
    GateSetPredicate::native().verify(&out).into_result()?;
    Ok(out)
}

/// Rewrite one gadget circuit in elementary ladder form.
///
/// Partitions at the first Rz (validating the mirrored shape), compiles
/// the prefix into `{Rzz, Rz, Prx}`, and mirrors it back around the
/// rotation. The output satisfies the native gate-set predicate.
pub fn rewrite_gadget(circuit: &Circuit) -> CompileResult<Circuit> {
    reassemble(&partition_gadget(circuit)?)
}

/// Rewrite one bare phase-gadget ladder (strict `2N-1` shape).
pub fn rewrite_phase_gadget(circuit: &Circuit) -> CompileResult<Circuit> {
    reassemble(&partition_phase_gadget(circuit)?)
}

/// Pass that rewrites every gadget box in a circuit.
///
/// Each box is lowered to its elementary ladder, rewritten with
/// [`rewrite_gadget`], and spliced back at the box's operand qubits.
/// Non-box operations pass through unchanged.
#[derive(Debug, Default)]
pub struct HiddenInverseGadgets;

impl Pass for HiddenInverseGadgets {
    fn name(&self) -> &'static str {
        "hidden_inverse_gadgets"
    }

    fn run(&self, circuit: &mut Circuit) -> CompileResult<()> {
        let mut out = Circuit::new(circuit.name(), circuit.num_qubits());
        let mut rewritten = 0usize;

        for inst in circuit.instructions() {
            let ladder = match &inst.gate {
                Gate::PauliExp { word, theta } => elementary_ladder(word, *theta)?,
                Gate::PhaseGadget { arity, theta } => {
                    elementary_ladder(&PauliWord::all_z(*arity as usize), *theta)?
                }
                _ => {
                    out.push(inst.clone())?;
                    continue;
                }
            };
            // An identity-only box lowers to nothing (global phase).
            if ladder.is_empty() {
                continue;
            }
            let compiled = rewrite_gadget(&ladder)?;
            out.append_mapped(&compiled, &inst.qubits)?;
            rewritten += 1;
        }

        debug!(rewritten, "hidden-inverse gadget rewrite");
        *circuit = out;
        Ok(())
    }
}
