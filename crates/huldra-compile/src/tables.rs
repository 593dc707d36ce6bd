//! Fixed decomposition tables.
//!
//! Two five-operation sequences realize CX and CX† in the native gate
//! set `{Rzz, Rz, Prx}`. The adjoint table is the forward table reversed
//! with every rotation angle negated (for `Prx` the phase axis φ is
//! preserved), so back-to-back CX occurrences can be compiled as
//! hidden-inverse pairs with no correction layer between them.
//!
//! A small companion table rebases the single-qubit Cliffords into
//! `{Rz, Prx}`, up to global phase.

use std::f64::consts::{FRAC_PI_2, PI};

use huldra_ir::{Gate, Instruction, QubitId};

/// The standard ("forward") CX decomposition.
///
/// Each occurrence equals CX up to global phase.
pub fn cx_decomposition(control: QubitId, target: QubitId) -> [Instruction; 5] {
    [
        Instruction::single(Gate::Prx(FRAC_PI_2, -FRAC_PI_2), target),
        Instruction::two(Gate::Rzz(FRAC_PI_2), control, target),
        Instruction::single(Gate::Prx(-FRAC_PI_2, 0.0), target),
        Instruction::single(Gate::Rz(1.5 * PI), target),
        Instruction::single(Gate::Rz(3.5 * PI), control),
    ]
}

/// The hidden-inverse CX decomposition: `cx_decomposition` reversed with
/// every rotation angle negated. Also equals CX up to global phase.
pub fn cx_adjoint_decomposition(control: QubitId, target: QubitId) -> [Instruction; 5] {
    [
        Instruction::single(Gate::Rz(-3.5 * PI), control),
        Instruction::single(Gate::Rz(-1.5 * PI), target),
        Instruction::single(Gate::Prx(FRAC_PI_2, 0.0), target),
        Instruction::two(Gate::Rzz(-FRAC_PI_2), control, target),
        Instruction::single(Gate::Prx(-FRAC_PI_2, -FRAC_PI_2), target),
    ]
}

/// Rebase a single-qubit Clifford into `{Rz, Prx}`, up to global phase.
///
/// Returns `None` for gates the table does not cover.
pub fn rebase_clifford(gate: &Gate, qubit: QubitId) -> Option<Vec<Instruction>> {
    let seq = match gate {
        Gate::H => vec![
            Instruction::single(Gate::Rz(PI), qubit),
            Instruction::single(Gate::Prx(FRAC_PI_2, FRAC_PI_2), qubit),
        ],
        Gate::X => vec![Instruction::single(Gate::Prx(PI, 0.0), qubit)],
        Gate::S => vec![Instruction::single(Gate::Rz(FRAC_PI_2), qubit)],
        Gate::Sdg => vec![Instruction::single(Gate::Rz(-FRAC_PI_2), qubit)],
        Gate::V => vec![Instruction::single(Gate::Prx(FRAC_PI_2, 0.0), qubit)],
        Gate::Vdg => vec![Instruction::single(Gate::Prx(-FRAC_PI_2, 0.0), qubit)],
        _ => return None,
    };
    Some(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_five_operations() {
        assert_eq!(cx_decomposition(QubitId(0), QubitId(1)).len(), 5);
        assert_eq!(cx_adjoint_decomposition(QubitId(0), QubitId(1)).len(), 5);
    }

    #[test]
    fn test_adjoint_table_is_reverse_negate() {
        let forward = cx_decomposition(QubitId(0), QubitId(1));
        let adjoint = cx_adjoint_decomposition(QubitId(0), QubitId(1));
        let derived: Vec<Instruction> =
            forward.iter().rev().map(Instruction::adjoint).collect();
        assert_eq!(derived, adjoint.to_vec());
    }

    #[test]
    fn test_tables_respect_operand_order() {
        let forward = cx_decomposition(QubitId(3), QubitId(1));
        // The entangler spans (control, target) in order.
        assert_eq!(forward[1].qubits, vec![QubitId(3), QubitId(1)]);
        // Final Rz lands on the control.
        assert_eq!(forward[4].qubits, vec![QubitId(3)]);
    }

    #[test]
    fn test_rebase_covers_cliffords_only() {
        for gate in [Gate::H, Gate::X, Gate::S, Gate::Sdg, Gate::V, Gate::Vdg] {
            assert!(rebase_clifford(&gate, QubitId(0)).is_some());
        }
        assert!(rebase_clifford(&Gate::Cx, QubitId(0)).is_none());
        assert!(rebase_clifford(&Gate::Rz(0.1), QubitId(0)).is_none());
    }
}
