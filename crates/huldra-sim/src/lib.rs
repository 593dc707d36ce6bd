//! `huldra-sim` — gadget synthesis and dense unitary verification.
//!
//! Two jobs:
//!
//! - **Builders** ([`gadgets`]): construct the rotation-gadget circuits
//!   the hidden-inverse passes consume — bare phase-gadget ladders,
//!   boxed Pauli gadgets from a textual word, and seeded random gadget
//!   stacks.
//! - **Verification** ([`unitary`]): extract the dense `2^n × 2^n`
//!   matrix of a small circuit and compare unitaries for equality up to
//!   global phase. This is the correctness oracle for every rewrite:
//!   a pass is right iff the unitary survives it.
//!
//! # Quick start
//!
//! ```rust
//! use huldra_sim::gadgets::phase_gadget;
//! use huldra_sim::unitary::{circuit_unitary, compare_unitaries};
//!
//! let gadget = phase_gadget(0.9, 2).unwrap();
//! let u = circuit_unitary(&gadget).unwrap();
//! let v = circuit_unitary(&gadget.adjoint()).unwrap();
//! assert!(!compare_unitaries(&u, &v)); // Rz(0.9) is not self-inverse
//! ```

pub mod error;
pub mod gadgets;
pub mod unitary;

pub use error::{SimError, SimResult};
pub use gadgets::{pauli_gadget, phase_gadget, random_gadget};
pub use unitary::{
    DEFAULT_TOLERANCE, MAX_DENSE_QUBITS, Unitary, circuit_unitary, compare_unitaries,
    compare_unitaries_with_tolerance, gate_unitary, pauli_matrix,
};
