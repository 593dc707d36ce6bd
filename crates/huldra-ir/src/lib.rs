//! Huldra Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Huldra: a flat, ordered instruction sequence over a fixed
//! qubit count, with a closed gate set oriented at a trapped-ion-style
//! native target (`Rzz`/`Rz`/`Prx`) plus the Clifford and gadget-box
//! vocabulary the rewrite passes consume.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing qubits
//! - **Paulis**: [`Pauli`], [`PauliWord`] for Pauli-exponential gadgets
//! - **Gates**: [`Gate`] (closed set) and [`GateClass`] (parameter-free
//!   kinds, used by gate-set predicates)
//! - **Instructions**: [`Instruction`] combining gates with operands
//! - **Circuit**: [`Circuit`] high-level builder API with structural
//!   equality and adjoint
//!
//! # Example: Building a Phase-Gadget Ladder
//!
//! ```rust
//! use huldra_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("gadget", 3);
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.cx(QubitId(1), QubitId(2)).unwrap();
//! circuit.rz(0.9, QubitId(2)).unwrap();
//! circuit.cx(QubitId(1), QubitId(2)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.len(), 5);
//! assert_eq!(circuit.adjoint().adjoint(), circuit);
//! ```
//!
//! # Angle Convention
//!
//! Angles are radians throughout: `Rz(θ) = exp(-i·θ/2·Z)`,
//! `Rzz(θ) = exp(-i·θ/2·Z⊗Z)`, `Prx(θ, φ) = Rz(φ)·Rx(θ)·Rz(-φ)`.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod pauli;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateClass};
pub use instruction::Instruction;
pub use pauli::{Pauli, PauliWord};
pub use qubit::QubitId;
