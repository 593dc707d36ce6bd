//! Gate-set predicates.
//!
//! A predicate is a set of allowed gate classes; a circuit is valid
//! against it iff every instruction's class is in the set. Verification
//! returns an explicit [`Validity`] value rather than panicking, so
//! callers can compose checks without control-flow-by-exception.

use rustc_hash::FxHashSet;

use huldra_ir::{Circuit, GateClass};

use crate::error::{CompileError, CompileResult};

/// A set of allowed gate classes.
#[derive(Debug, Clone)]
pub struct GateSetPredicate {
    allowed: FxHashSet<GateClass>,
}

/// The outcome of checking a circuit against a gate-set predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// Every instruction's gate class is allowed.
    Valid,
    /// An instruction uses a gate class outside the set.
    Invalid {
        /// Position of the first offending instruction.
        index: usize,
        /// Name of the offending gate.
        gate: String,
    },
}

impl Validity {
    /// True if the check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Convert into a result, mapping a violation to [`CompileError`].
    pub fn into_result(self) -> CompileResult<()> {
        match self {
            Validity::Valid => Ok(()),
            Validity::Invalid { index, gate } => {
                Err(CompileError::GateSetViolation { index, gate })
            }
        }
    }
}

impl GateSetPredicate {
    /// Create a predicate from an iterator of allowed gate classes.
    pub fn new(allowed: impl IntoIterator<Item = GateClass>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// The native target gate set: `{Rzz, Rz, Prx}`.
    pub fn native() -> Self {
        Self::new([GateClass::Rzz, GateClass::Rz, GateClass::Prx])
    }

    /// The elementary gadget-ladder gate set: CX and Rz plus the
    /// single-qubit Cliffords box decomposition emits.
    pub fn gadget_ladder() -> Self {
        Self::new([
            GateClass::Cx,
            GateClass::Rz,
            GateClass::H,
            GateClass::S,
            GateClass::Sdg,
            GateClass::V,
            GateClass::Vdg,
        ])
    }

    /// The bare phase-gadget gate set: `{Cx, Rz}`.
    pub fn phase_ladder() -> Self {
        Self::new([GateClass::Cx, GateClass::Rz])
    }

    /// Check membership of a single gate class.
    pub fn contains(&self, class: GateClass) -> bool {
        self.allowed.contains(&class)
    }

    /// Check every instruction of `circuit` against the set.
    pub fn verify(&self, circuit: &Circuit) -> Validity {
        for (index, inst) in circuit.instructions().iter().enumerate() {
            if !self.allowed.contains(&inst.gate.class()) {
                return Validity::Invalid {
                    index,
                    gate: inst.name().into(),
                };
            }
        }
        Validity::Valid
    }
}
