//! Alternating CX decomposition.
//!
//! Rewrites every CX with one of the two fixed native decompositions,
//! alternating per ordered (control, target) pair: the second occurrence
//! on a pair uses the hidden-inverse table, the third the standard one
//! again, and so on. All other operations pass through unchanged.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use huldra_ir::{Circuit, Gate, QubitId};

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::tables::{cx_adjoint_decomposition, cx_decomposition};

/// Which of the two fixed decompositions a pair uses next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecompositionChoice {
    /// The standard table.
    Forward,
    /// The hidden-inverse table.
    Adjoint,
}

impl DecompositionChoice {
    /// The other table.
    pub fn toggled(self) -> Self {
        match self {
            DecompositionChoice::Forward => DecompositionChoice::Adjoint,
            DecompositionChoice::Adjoint => DecompositionChoice::Forward,
        }
    }
}

/// Policy assigning the initial decomposition choice to a qubit pair.
///
/// The assignment is deliberately configurable: which table a pair uses
/// first is a free choice, and every policy preserves the circuit's
/// unitary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlternationPolicy {
    /// Every pair starts with the standard table.
    #[default]
    ForwardFirst,
    /// Every pair starts with the hidden-inverse table.
    AdjointFirst,
    /// A pair starts with the standard table iff its control index is
    /// even, staggering the two tables across a line of qubits.
    EdgeParity,
}

impl AlternationPolicy {
    /// The initial choice this policy assigns to `(control, target)`.
    fn initial(self, control: QubitId, _target: QubitId) -> DecompositionChoice {
        match self {
            AlternationPolicy::ForwardFirst => DecompositionChoice::Forward,
            AlternationPolicy::AdjointFirst => DecompositionChoice::Adjoint,
            AlternationPolicy::EdgeParity => {
                if control.0 % 2 == 0 {
                    DecompositionChoice::Forward
                } else {
                    DecompositionChoice::Adjoint
                }
            }
        }
    }
}

/// Per-pass alternation flags.
///
/// Maps each ordered (control, target) pair to the decomposition it uses
/// on its next occurrence. Pairs are seeded lazily from the policy on
/// first sight and toggled on every visit. The state is scoped to one
/// traversal of one circuit; create a fresh one per rewrite.
#[derive(Debug)]
pub struct AlternationState {
    policy: AlternationPolicy,
    flags: FxHashMap<(QubitId, QubitId), DecompositionChoice>,
}

impl AlternationState {
    /// Create an empty state with the given seeding policy.
    pub fn new(policy: AlternationPolicy) -> Self {
        Self {
            policy,
            flags: FxHashMap::default(),
        }
    }

    /// The choice for this occurrence of `(control, target)`; flips the
    /// stored flag for the next occurrence.
    pub fn next_choice(&mut self, control: QubitId, target: QubitId) -> DecompositionChoice {
        let entry = self
            .flags
            .entry((control, target))
            .or_insert_with(|| self.policy.initial(control, target));
        let choice = *entry;
        *entry = entry.toggled();
        choice
    }

    /// Number of pairs seen so far.
    pub fn tracked_pairs(&self) -> usize {
        self.flags.len()
    }
}

/// Rewrite every CX in `circuit` with an alternating decomposition,
/// consuming choices from `state`.
pub fn rewrite_alternating(
    circuit: &Circuit,
    state: &mut AlternationState,
) -> CompileResult<Circuit> {
    let mut out = Circuit::new(circuit.name(), circuit.num_qubits());
    let mut rewritten = 0usize;

    for inst in circuit.instructions() {
        if inst.gate == Gate::Cx {
            let (control, target) = (inst.qubits[0], inst.qubits[1]);
            let table = match state.next_choice(control, target) {
                DecompositionChoice::Forward => cx_decomposition(control, target),
                DecompositionChoice::Adjoint => cx_adjoint_decomposition(control, target),
            };
            for native in table {
                out.push(native)?;
            }
            rewritten += 1;
        } else {
            out.push(inst.clone())?;
        }
    }

    debug!(
        rewritten,
        pairs = state.tracked_pairs(),
        "alternating CX rewrite"
    );
    Ok(out)
}

/// Pass wrapper for [`rewrite_alternating`].
///
/// Creates a fresh [`AlternationState`] on every run, so back-to-back
/// applications restart from the policy's initial assignment.
#[derive(Debug, Default)]
pub struct AlternatingCx {
    policy: AlternationPolicy,
}

impl AlternatingCx {
    /// Create a pass with the given seeding policy.
    pub fn new(policy: AlternationPolicy) -> Self {
        Self { policy }
    }
}

impl Pass for AlternatingCx {
    fn name(&self) -> &'static str {
        "alternating_cx"
    }

    fn run(&self, circuit: &mut Circuit) -> CompileResult<()> {
        let mut state = AlternationState::new(self.policy);
        *circuit = rewrite_alternating(circuit, &mut state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::cx_decomposition;

    #[test]
    fn test_toggle_sequence_per_pair() {
        let mut state = AlternationState::new(AlternationPolicy::ForwardFirst);
        let (a, b) = (QubitId(0), QubitId(1));
        assert_eq!(state.next_choice(a, b), DecompositionChoice::Forward);
        assert_eq!(state.next_choice(a, b), DecompositionChoice::Adjoint);
        assert_eq!(state.next_choice(a, b), DecompositionChoice::Forward);
    }

    #[test]
    fn test_ordered_pairs_are_distinct() {
        let mut state = AlternationState::new(AlternationPolicy::ForwardFirst);
        assert_eq!(
            state.next_choice(QubitId(0), QubitId(1)),
            DecompositionChoice::Forward
        );
        // The reversed pair has its own flag.
        assert_eq!(
            state.next_choice(QubitId(1), QubitId(0)),
            DecompositionChoice::Forward
        );
        assert_eq!(state.tracked_pairs(), 2);
    }

    #[test]
    fn test_policy_seeds_initial_choice() {
        let mut state = AlternationState::new(AlternationPolicy::AdjointFirst);
        assert_eq!(
            state.next_choice(QubitId(0), QubitId(1)),
            DecompositionChoice::Adjoint
        );

        let mut parity = AlternationState::new(AlternationPolicy::EdgeParity);
        assert_eq!(
            parity.next_choice(QubitId(0), QubitId(1)),
            DecompositionChoice::Forward
        );
        assert_eq!(
            parity.next_choice(QubitId(1), QubitId(2)),
            DecompositionChoice::Adjoint
        );
    }

    #[test]
    fn test_rewrite_replaces_cx_and_keeps_rest() {
        let mut circuit = Circuit::new("test", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap();

        let mut state = AlternationState::new(AlternationPolicy::ForwardFirst);
        let rewritten = rewrite_alternating(&circuit, &mut state).unwrap();

        // H + 2 * 5 native ops.
        assert_eq!(rewritten.len(), 11);
        assert_eq!(rewritten.instructions()[0].gate, Gate::H);
        // First occurrence used the forward table.
        assert_eq!(
            rewritten.instructions()[1..6],
            cx_decomposition(QubitId(0), QubitId(1))
        );
        // Second occurrence used the hidden-inverse table.
        assert_eq!(
            rewritten.instructions()[6..11],
            cx_adjoint_decomposition(QubitId(0), QubitId(1))
        );
    }

    #[test]
    fn test_pass_resets_state_between_runs() {
        let mut circuit = Circuit::new("test", 2);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let pass = AlternatingCx::default();
        let mut first = circuit.clone();
        pass.run(&mut first).unwrap();
        let mut again = circuit.clone();
        pass.run(&mut again).unwrap();
        // Fresh state each run: both rewrites start from the forward table.
        assert_eq!(first, again);
    }
}
