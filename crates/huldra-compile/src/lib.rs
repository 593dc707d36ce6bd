//! Huldra Hidden-Inverse Compilation
//!
//! Rewrite passes that compile circuits into the native gate set
//! `{Rzz, Rz, Prx}` so that mirrored or repeated occurrences of the
//! entangling gate use complementary ("hidden inverse") decompositions:
//! one occurrence gets the standard five-operation recipe, its twin gets
//! the recipe reversed with negated angles. Back-to-back applications
//! then cancel their coherent errors instead of needing a correction
//! layer between them.
//!
//! # Components
//!
//! - [`tables`]: the two fixed CX decompositions and the Clifford rebase
//! - [`partition`]: splits ladder circuits around their central rotation
//! - [`passes::AlternatingCx`]: per-pair alternating CX rewriting
//! - [`passes::DecomposeBoxes`]: lowers gadget boxes to ladder form
//! - [`passes::HiddenInverseGadgets`]: full gadget rewrite
//! - [`GateSetPredicate`]: explicit gate-set validity checks
//!
//! # Example: Rewriting a Phase Gadget
//!
//! ```rust
//! use huldra_compile::{GateSetPredicate, passes::rewrite_phase_gadget};
//! use huldra_ir::{Circuit, QubitId};
//!
//! let mut gadget = Circuit::new("gadget", 2);
//! gadget.cx(QubitId(0), QubitId(1)).unwrap();
//! gadget.rz(0.9, QubitId(1)).unwrap();
//! gadget.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let compiled = rewrite_phase_gadget(&gadget).unwrap();
//! assert!(GateSetPredicate::native().verify(&compiled).is_valid());
//! ```
//!
//! Every pass preserves the circuit's unitary up to global phase; the
//! `huldra-sim` crate provides the dense-unitary comparison used to
//! verify this in tests.

pub mod error;
pub mod manager;
pub mod partition;
pub mod pass;
pub mod predicate;
pub mod tables;

// Built-in passes
pub mod passes;

pub use error::{CompileError, CompileResult};
pub use manager::PassManager;
pub use partition::{GadgetParts, partition_gadget, partition_phase_gadget};
pub use pass::Pass;
pub use passes::{AlternatingCx, AlternationPolicy, AlternationState, DecomposeBoxes,
    DecompositionChoice, HiddenInverseGadgets};
pub use predicate::{GateSetPredicate, Validity};
