//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::QubitId;

/// A gate applied to an ordered list of qubits.
///
/// Immutable once created; rewrite passes build new instructions rather
/// than mutating existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: Gate,
    /// Qubits this instruction operates on, in gate-operand order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create an instruction.
    pub fn new(gate: Gate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit instruction.
    pub fn single(gate: Gate, qubit: QubitId) -> Self {
        Self::new(gate, [qubit])
    }

    /// Create a two-qubit instruction.
    pub fn two(gate: Gate, q0: QubitId, q1: QubitId) -> Self {
        Self::new(gate, [q0, q1])
    }

    /// The adjoint instruction: the adjoint gate on the same qubits.
    pub fn adjoint(&self) -> Instruction {
        Self {
            gate: self.gate.adjoint(),
            qubits: self.qubits.clone(),
        }
    }

    /// Get the name of the gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}
