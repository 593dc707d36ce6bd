//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced by gadget synthesis and unitary extraction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Dense unitary extraction is capped to keep matrices tractable.
    #[error("Circuit has {num_qubits} qubits; dense unitaries support at most {max}")]
    WidthTooLarge {
        /// Width of the offending circuit.
        num_qubits: u32,
        /// Maximum supported width.
        max: u32,
    },

    /// A gadget needs at least two qubits for its entangling ladder.
    #[error("Phase gadget needs at least 2 qubits, got {0}")]
    TooFewQubits(u32),

    /// A Pauli gadget over the zero-length word is meaningless.
    #[error("Pauli word is empty")]
    EmptyWord,

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] huldra_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
