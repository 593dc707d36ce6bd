//! Built-in rewrite passes.

pub mod alternating;
pub mod boxes;
pub mod gadget;

pub use alternating::{
    AlternatingCx, AlternationPolicy, AlternationState, DecompositionChoice, rewrite_alternating,
};
pub use boxes::{DecomposeBoxes, decompose_boxes};
pub use gadget::{HiddenInverseGadgets, rebase_ladder, rewrite_gadget, rewrite_phase_gadget};
