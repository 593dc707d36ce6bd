//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::pauli::PauliWord;
use crate::qubit::QubitId;

/// A quantum circuit: an ordered sequence of instructions over a fixed
/// number of qubits.
///
/// Equality is structural: two circuits are equal iff they have the same
/// width and the same instruction sequence; the name is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// The instruction sequence, in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Append an instruction, validating its operands.
    ///
    /// Checks that the operand count matches the gate arity, that every
    /// qubit is in range, and that no qubit repeats.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<()> {
        let expected = instruction.gate.num_qubits();
        let got = u32::try_from(instruction.qubits.len()).unwrap_or(u32::MAX);
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate: instruction.name().into(),
                expected,
                got,
            });
        }
        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if instruction.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate: instruction.name().into(),
                });
            }
        }
        self.instructions.push(instruction);
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::X, qubit))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply V gate.
    pub fn v(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::V, qubit))?;
        Ok(self)
    }

    /// Apply V-dagger gate.
    pub fn vdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::Vdg, qubit))?;
        Ok(self)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::Rz(theta), qubit))?;
        Ok(self)
    }

    /// Apply phased-X rotation gate.
    pub fn prx(&mut self, theta: f64, phi: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(Gate::Prx(theta, phi), qubit))?;
        Ok(self)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two(Gate::Cx, control, target))?;
        Ok(self)
    }

    /// Apply ZZ phase rotation gate.
    pub fn rzz(&mut self, theta: f64, q0: QubitId, q1: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two(Gate::Rzz(theta), q0, q1))?;
        Ok(self)
    }

    // =========================================================================
    // Gadget boxes
    // =========================================================================

    /// Apply a Pauli-exponential box over the given qubits.
    ///
    /// Letter `i` of the word acts on `qubits[i]`.
    pub fn pauli_exp(
        &mut self,
        word: PauliWord,
        theta: f64,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::new(Gate::PauliExp { word, theta }, qubits))?;
        Ok(self)
    }

    /// Apply a phase-gadget box over the given qubits.
    pub fn phase_gadget(
        &mut self,
        theta: f64,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        let arity = u32::try_from(qubits.len()).unwrap_or(u32::MAX);
        self.push(Instruction::new(Gate::PhaseGadget { arity, theta }, qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// The adjoint circuit: instructions reversed, each inverted.
    pub fn adjoint(&self) -> Circuit {
        Self {
            name: format!("{}_dg", self.name),
            num_qubits: self.num_qubits,
            instructions: self.instructions.iter().rev().map(Instruction::adjoint).collect(),
        }
    }

    /// Append all instructions of `other` to this circuit.
    ///
    /// Requires equal widths.
    pub fn append(&mut self, other: &Circuit) -> IrResult<()> {
        if other.num_qubits != self.num_qubits {
            return Err(IrError::WidthMismatch {
                expected: self.num_qubits,
                got: other.num_qubits,
            });
        }
        for inst in &other.instructions {
            self.push(inst.clone())?;
        }
        Ok(())
    }

    /// Append `other` with its qubit `i` mapped to `mapping[i]`.
    ///
    /// This splices a narrower sub-circuit back into a wider one at
    /// arbitrary qubit positions.
    pub fn append_mapped(&mut self, other: &Circuit, mapping: &[QubitId]) -> IrResult<()> {
        let got = u32::try_from(mapping.len()).unwrap_or(u32::MAX);
        if got != other.num_qubits {
            return Err(IrError::WidthMismatch {
                expected: other.num_qubits,
                got,
            });
        }
        for inst in &other.instructions {
            let qubits: Vec<QubitId> = inst
                .qubits
                .iter()
                .map(|q| mapping[q.0 as usize])
                .collect();
            self.push(Instruction::new(inst.gate.clone(), qubits))?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Circuit depth: longest chain of instructions sharing qubits.
    pub fn depth(&self) -> usize {
        let mut frontier = vec![0usize; self.num_qubits as usize];
        let mut depth = 0;
        for inst in &self.instructions {
            let layer = 1 + inst
                .qubits
                .iter()
                .map(|q| frontier[q.0 as usize])
                .max()
                .unwrap_or(0);
            for q in &inst.qubits {
                frontier[q.0 as usize] = layer;
            }
            depth = depth.max(layer);
        }
        depth
    }
}

impl PartialEq for Circuit {
    fn eq(&self, other: &Self) -> bool {
        self.num_qubits == other.num_qubits && self.instructions == other.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test", 3);
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 3);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::new("test", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .rz(PI / 4.0, QubitId(1))
            .unwrap();
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_push_rejects_out_of_range() {
        let mut circuit = Circuit::new("test", 1);
        let err = circuit.cx(QubitId(0), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::QubitOutOfRange { .. }));
    }

    #[test]
    fn test_push_rejects_duplicate_qubit() {
        let mut circuit = Circuit::new("test", 2);
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_push_rejects_arity_mismatch() {
        let mut circuit = Circuit::new("test", 2);
        let inst = Instruction::new(Gate::Cx, [QubitId(0)]);
        let err = circuit.push(inst).unwrap_err();
        assert!(matches!(err, IrError::QubitCountMismatch { .. }));
    }

    #[test]
    fn test_adjoint_reverses_and_inverts() {
        let mut circuit = Circuit::new("test", 2);
        circuit
            .s(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .rz(0.9, QubitId(1))
            .unwrap();

        let adj = circuit.adjoint();
        assert_eq!(adj.len(), 3);
        assert_eq!(adj.instructions()[0].gate, Gate::Rz(-0.9));
        assert_eq!(adj.instructions()[1].gate, Gate::Cx);
        assert_eq!(adj.instructions()[2].gate, Gate::Sdg);
    }

    #[test]
    fn test_adjoint_is_involution() {
        let mut circuit = Circuit::new("test", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .prx(0.4, -0.2, QubitId(1))
            .unwrap()
            .rzz(1.1, QubitId(0), QubitId(1))
            .unwrap();
        assert_eq!(circuit.adjoint().adjoint(), circuit);
    }

    #[test]
    fn test_structural_equality_ignores_name() {
        let mut a = Circuit::new("a", 2);
        a.cx(QubitId(0), QubitId(1)).unwrap();
        let mut b = Circuit::new("b", 2);
        b.cx(QubitId(0), QubitId(1)).unwrap();
        assert_eq!(a, b);

        let mut c = Circuit::new("c", 2);
        c.cx(QubitId(1), QubitId(0)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_append_width_checked() {
        let mut a = Circuit::new("a", 2);
        let b = Circuit::new("b", 3);
        assert!(matches!(
            a.append(&b),
            Err(IrError::WidthMismatch { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn test_append_mapped_relabels_qubits() {
        let mut inner = Circuit::new("inner", 2);
        inner.cx(QubitId(0), QubitId(1)).unwrap();

        let mut outer = Circuit::new("outer", 4);
        outer.append_mapped(&inner, &[QubitId(3), QubitId(1)]).unwrap();
        assert_eq!(outer.instructions()[0].qubits, vec![QubitId(3), QubitId(1)]);
    }

    #[test]
    fn test_boxed_gadget_arity() {
        let mut circuit = Circuit::new("test", 4);
        let word: PauliWord = "XYYZ".parse().unwrap();
        circuit
            .pauli_exp(word, 0.65, (0..4).map(QubitId))
            .unwrap();
        assert_eq!(circuit.len(), 1);

        // Word length must match operand count.
        let word3: PauliWord = "XYZ".parse().unwrap();
        let err = circuit
            .pauli_exp(word3, 0.65, (0..4).map(QubitId))
            .unwrap_err();
        assert!(matches!(err, IrError::QubitCountMismatch { .. }));
    }
}
