//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is outside the circuit.
    #[error("Qubit {qubit} out of range: circuit has {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
    },

    /// Gate applied to the wrong number of qubits.
    #[error("Gate '{gate}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// The same qubit appears twice in one operation.
    #[error("Duplicate qubit {qubit} in '{gate}' operation")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate: String,
    },

    /// Circuits of different widths where equal widths are required.
    #[error("Circuit width mismatch: expected {expected} qubits, got {got}")]
    WidthMismatch {
        /// Expected width.
        expected: u32,
        /// Actual width.
        got: u32,
    },

    /// A Pauli word contained a letter outside {I, X, Y, Z}.
    #[error("Invalid Pauli letter '{0}' (expected one of I, X, Y, Z)")]
    InvalidPauliLetter(char),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
