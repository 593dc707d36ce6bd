//! Ladder partitioning.
//!
//! A gadget circuit has the shape "entangling ladder, one central Rz,
//! mirrored ladder". The partitioners split such a circuit into its
//! three contiguous segments, validating the shape strictly; a violated
//! precondition is a usage error reported as a [`CompileError`], never
//! a panic.

use huldra_ir::{Circuit, Gate};

use crate::error::{CompileError, CompileResult};
use crate::predicate::GateSetPredicate;

/// The three contiguous segments of a gadget circuit.
///
/// All segments keep the width of the source circuit. `rotation` holds
/// exactly one instruction (the central Rz).
#[derive(Debug, Clone)]
pub struct GadgetParts {
    /// Everything before the central rotation.
    pub prefix: Circuit,
    /// The central rotation, alone.
    pub rotation: Circuit,
    /// Everything after the central rotation.
    pub suffix: Circuit,
}

/// Partition a bare phase-gadget ladder.
///
/// Preconditions: gate set `{Cx, Rz}`, exactly `2N-1` operations for `N`
/// qubits, `N-1` CX operations, one Rz, then the same CX operations in
/// mirrored order.
pub fn partition_phase_gadget(circuit: &Circuit) -> CompileResult<GadgetParts> {
    GateSetPredicate::phase_ladder().verify(circuit).into_result()?;

    let n = circuit.num_qubits() as usize;
    if n == 0 {
        return Err(CompileError::MissingRotation);
    }
    let expected = 2 * n - 1;
    let ops = circuit.instructions();
    if ops.len() != expected {
        return Err(CompileError::ShapeMismatch {
            expected,
            got: ops.len(),
            num_qubits: circuit.num_qubits(),
        });
    }

    for (index, inst) in ops[..n - 1].iter().enumerate() {
        if inst.gate != Gate::Cx {
            return Err(CompileError::UnexpectedOperation {
                index,
                expected: "cx",
                got: inst.name(),
            });
        }
    }
    if !matches!(ops[n - 1].gate, Gate::Rz(_)) {
        return Err(CompileError::UnexpectedOperation {
            index: n - 1,
            expected: "rz",
            got: ops[n - 1].name(),
        });
    }
    // The second ladder must mirror the first: CX is self-adjoint, so the
    // suffix is the prefix in reverse order on the same qubit pairs.
    for (index, inst) in ops[n..].iter().enumerate() {
        if *inst != ops[n - 2 - index] {
            return Err(CompileError::NotMirrored { index });
        }
    }

    split(circuit, n - 1)
}

/// Partition a general gadget ladder at its first Rz.
///
/// Accepts the elementary form box decomposition produces (CX ladder
/// plus single-qubit basis-change Cliffords). The suffix must be the
/// structural adjoint of the prefix.
pub fn partition_gadget(circuit: &Circuit) -> CompileResult<GadgetParts> {
    GateSetPredicate::gadget_ladder().verify(circuit).into_result()?;

    let ops = circuit.instructions();
    let pivot = ops
        .iter()
        .position(|inst| matches!(inst.gate, Gate::Rz(_)))
        .ok_or(CompileError::MissingRotation)?;

    let mirror: Vec<_> = ops[..pivot].iter().rev().map(|inst| inst.adjoint()).collect();
    for (index, inst) in ops[pivot + 1..].iter().enumerate() {
        if mirror.get(index) != Some(inst) {
            return Err(CompileError::NotMirrored { index });
        }
    }
    if ops[pivot + 1..].len() != mirror.len() {
        return Err(CompileError::NotMirrored {
            index: ops[pivot + 1..].len().min(mirror.len()),
        });
    }

    split(circuit, pivot)
}

/// Cut `circuit` into (prefix, rotation, suffix) around position `pivot`.
fn split(circuit: &Circuit, pivot: usize) -> CompileResult<GadgetParts> {
    let n = circuit.num_qubits();
    let ops = circuit.instructions();

    let mut prefix = Circuit::new(format!("{}_pre", circuit.name()), n);
    for inst in &ops[..pivot] {
        prefix.push(inst.clone())?;
    }
    let mut rotation = Circuit::new(format!("{}_rot", circuit.name()), n);
    rotation.push(ops[pivot].clone())?;
    let mut suffix = Circuit::new(format!("{}_post", circuit.name()), n);
    for inst in &ops[pivot + 1..] {
        suffix.push(inst.clone())?;
    }

    Ok(GadgetParts {
        prefix,
        rotation,
        suffix,
    })
}
