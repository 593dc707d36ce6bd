//! Pass manager for sequencing rewrites.

use tracing::{debug, info};

use huldra_ir::Circuit;

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{AlternatingCx, AlternationPolicy, HiddenInverseGadgets};

/// Manages and executes a sequence of rewrite passes.
pub struct PassManager {
    /// The passes to execute, in order.
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Create a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// The full hidden-inverse pipeline: rewrite gadget boxes with
    /// mirrored decompositions, then compile any remaining bare CX
    /// occurrences with the alternating tables.
    pub fn hidden_inverse_pipeline(policy: AlternationPolicy) -> Self {
        let mut pm = Self::new();
        pm.add_pass(HiddenInverseGadgets);
        pm.add_pass(AlternatingCx::new(policy));
        pm
    }

    /// Add a pass to the manager.
    pub fn add_pass(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Run all passes on the given circuit, in order.
    pub fn run(&self, circuit: &mut Circuit) -> CompileResult<()> {
        info!(
            "Running pass manager with {} passes on circuit with {} qubits",
            self.passes.len(),
            circuit.num_qubits()
        );

        for pass in &self.passes {
            debug!("Running pass: {}", pass.name());
            pass.run(circuit)?;
            debug!("Pass {} completed, ops: {}", pass.name(), circuit.len());
        }

        Ok(())
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the manager has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}
