//! Error types for compilation passes.

use thiserror::Error;

/// Errors that can occur during circuit rewriting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// An operation's gate class is outside the allowed gate set.
    #[error("Gate-set violation: '{gate}' at position {index} is not in the allowed set")]
    GateSetViolation {
        /// Position of the offending instruction.
        index: usize,
        /// Name of the offending gate.
        gate: String,
    },

    /// A ladder circuit does not have the required operation count.
    #[error("Ladder shape mismatch: expected {expected} operations for {num_qubits} qubits, got {got}")]
    ShapeMismatch {
        /// Expected operation count (2N-1).
        expected: usize,
        /// Actual operation count.
        got: usize,
        /// Circuit width.
        num_qubits: u32,
    },

    /// No central rotation found where the gadget shape requires one.
    #[error("Gadget has no central Rz rotation")]
    MissingRotation,

    /// An operation where the rigid ladder shape requires a different one.
    #[error("Ladder shape mismatch: expected '{expected}' at position {index}, got '{got}'")]
    UnexpectedOperation {
        /// Position of the offending instruction.
        index: usize,
        /// Expected gate name.
        expected: &'static str,
        /// Actual gate name.
        got: &'static str,
    },

    /// The post-rotation segment is not the mirror of the pre-rotation one.
    #[error("Gadget is not mirrored: suffix operation {index} does not invert its prefix twin")]
    NotMirrored {
        /// Position within the suffix segment.
        index: usize,
    },

    /// Circuit IR error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] huldra_ir::IrError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
