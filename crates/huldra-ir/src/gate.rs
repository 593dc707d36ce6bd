//! Quantum gate types.
//!
//! The gate set is closed: the fixed Cliffords and parameterized
//! rotations a trapped-ion-style target exposes, plus the two gadget box
//! primitives (Pauli-exponential and phase-gadget rotations) that the
//! rewrite passes recognize and lower.
//!
//! Angles are radians: `Rz(θ) = exp(-i·θ/2·Z)`,
//! `Rzz(θ) = exp(-i·θ/2·Z⊗Z)`, and `Prx(θ, φ) = Rz(φ)·Rx(θ)·Rz(-φ)`.

use serde::{Deserialize, Serialize};

use crate::pauli::PauliWord;

/// A gate from the closed operation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// V gate (sqrt(X) up to phase; equals `Prx(π/2, 0)`).
    V,
    /// V-dagger gate.
    Vdg,
    /// Rotation around Z.
    Rz(f64),
    /// Phased-X rotation: `Prx(θ, φ) = Rz(φ)·Rx(θ)·Rz(-φ)`.
    Prx(f64, f64),
    /// Controlled-X (CNOT) gate.
    Cx,
    /// Two-qubit ZZ phase rotation.
    Rzz(f64),
    /// Pauli-exponential box: `exp(-i·θ/2·P)` for Pauli word P.
    ///
    /// Letter `i` of the word acts on operand qubit `i`.
    PauliExp {
        /// The Pauli word P.
        word: PauliWord,
        /// Rotation angle θ.
        theta: f64,
    },
    /// Phase-gadget box: `exp(-i·θ/2·Z⊗...⊗Z)` over `arity` qubits.
    ///
    /// The single-term phase-polynomial primitive.
    PhaseGadget {
        /// Number of qubits the gadget spans.
        arity: u32,
        /// Rotation angle θ.
        theta: f64,
    },
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H => "h",
            Gate::X => "x",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::V => "v",
            Gate::Vdg => "vdg",
            Gate::Rz(_) => "rz",
            Gate::Prx(_, _) => "prx",
            Gate::Cx => "cx",
            Gate::Rzz(_) => "rzz",
            Gate::PauliExp { .. } => "pauli_exp",
            Gate::PhaseGadget { .. } => "phase_gadget",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::H
            | Gate::X
            | Gate::S
            | Gate::Sdg
            | Gate::V
            | Gate::Vdg
            | Gate::Rz(_)
            | Gate::Prx(_, _) => 1,

            Gate::Cx | Gate::Rzz(_) => 2,

            Gate::PauliExp { word, .. } => {
                u32::try_from(word.len()).expect("Pauli word longer than u32::MAX")
            }
            Gate::PhaseGadget { arity, .. } => *arity,
        }
    }

    /// Get the numeric parameters of this gate, in order.
    pub fn params(&self) -> Vec<f64> {
        match self {
            Gate::Rz(theta) => vec![*theta],
            Gate::Prx(theta, phi) => vec![*theta, *phi],
            Gate::Rzz(theta) => vec![*theta],
            Gate::PauliExp { theta, .. } | Gate::PhaseGadget { theta, .. } => vec![*theta],
            _ => vec![],
        }
    }

    /// The adjoint (inverse) of this gate.
    ///
    /// Rotations negate their angle; for `Prx` only the rotation angle θ
    /// negates, the phase axis φ is preserved. `S`↔`Sdg`, `V`↔`Vdg`;
    /// self-adjoint gates are unchanged.
    pub fn adjoint(&self) -> Gate {
        match self {
            Gate::H => Gate::H,
            Gate::X => Gate::X,
            Gate::S => Gate::Sdg,
            Gate::Sdg => Gate::S,
            Gate::V => Gate::Vdg,
            Gate::Vdg => Gate::V,
            Gate::Rz(theta) => Gate::Rz(-theta),
            Gate::Prx(theta, phi) => Gate::Prx(-theta, *phi),
            Gate::Cx => Gate::Cx,
            Gate::Rzz(theta) => Gate::Rzz(-theta),
            Gate::PauliExp { word, theta } => Gate::PauliExp {
                word: word.clone(),
                theta: -theta,
            },
            Gate::PhaseGadget { arity, theta } => Gate::PhaseGadget {
                arity: *arity,
                theta: -theta,
            },
        }
    }

    /// Check if this gate is a gadget box (rewritten by box decomposition).
    pub fn is_box(&self) -> bool {
        matches!(self, Gate::PauliExp { .. } | Gate::PhaseGadget { .. })
    }

    /// The parameter-free class of this gate, for gate-set predicates.
    pub fn class(&self) -> GateClass {
        match self {
            Gate::H => GateClass::H,
            Gate::X => GateClass::X,
            Gate::S => GateClass::S,
            Gate::Sdg => GateClass::Sdg,
            Gate::V => GateClass::V,
            Gate::Vdg => GateClass::Vdg,
            Gate::Rz(_) => GateClass::Rz,
            Gate::Prx(_, _) => GateClass::Prx,
            Gate::Cx => GateClass::Cx,
            Gate::Rzz(_) => GateClass::Rzz,
            Gate::PauliExp { .. } => GateClass::PauliExp,
            Gate::PhaseGadget { .. } => GateClass::PhaseGadget,
        }
    }
}

/// A gate kind with parameters erased, used in gate-set predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateClass {
    /// Hadamard.
    H,
    /// Pauli-X.
    X,
    /// S.
    S,
    /// S-dagger.
    Sdg,
    /// V.
    V,
    /// V-dagger.
    Vdg,
    /// Z rotation.
    Rz,
    /// Phased-X rotation.
    Prx,
    /// Controlled-X.
    Cx,
    /// ZZ phase rotation.
    Rzz,
    /// Pauli-exponential box.
    PauliExp,
    /// Phase-gadget box.
    PhaseGadget,
}
