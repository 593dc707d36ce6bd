//! Pass trait for circuit rewrites.

use huldra_ir::Circuit;

use crate::error::CompileResult;

/// A rewrite pass over a circuit.
///
/// Passes are the unit of compilation in Huldra: each one replaces the
/// circuit's instruction sequence with a rewritten one, preserving the
/// circuit's unitary up to global phase. Any per-pass state (such as
/// alternation flags) is created inside `run` and dropped when it
/// returns.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Run the pass, rewriting the circuit in place.
    fn run(&self, circuit: &mut Circuit) -> CompileResult<()>;
}
