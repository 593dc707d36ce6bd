//! Pauli operators and Pauli words.
//!
//! A Pauli word is a dense, positional string over the alphabet
//! {I, X, Y, Z}: letter `i` acts on the `i`-th qubit of whatever the word
//! is applied to. This is the textual input format for Pauli-exponential
//! gadgets ("XYYZ" with a rotation angle).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IrError;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity — contributes only a global phase when exponentiated.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl Pauli {
    /// Parse a single letter, case-insensitively.
    pub fn from_letter(letter: char) -> Result<Self, IrError> {
        match letter.to_ascii_uppercase() {
            'I' => Ok(Pauli::I),
            'X' => Ok(Pauli::X),
            'Y' => Ok(Pauli::Y),
            'Z' => Ok(Pauli::Z),
            other => Err(IrError::InvalidPauliLetter(other)),
        }
    }

    /// The letter for this operator.
    pub fn letter(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

/// A fixed-length tensor product of Pauli operators.
///
/// Position `i` in the word corresponds to the `i`-th qubit the word is
/// applied to. Identity letters are kept (the word is positional, not
/// sparse), so `"XIZ"` has length 3 and support `{0, 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliWord(Vec<Pauli>);

impl PauliWord {
    /// Construct from explicit operators.
    pub fn new(ops: impl IntoIterator<Item = Pauli>) -> Self {
        Self(ops.into_iter().collect())
    }

    /// Construct a Z⊗Z⊗...⊗Z word of the given length.
    pub fn all_z(len: usize) -> Self {
        Self(vec![Pauli::Z; len])
    }

    /// The operators in positional order.
    pub fn ops(&self) -> &[Pauli] {
        &self.0
    }

    /// Number of letters (qubits the word spans).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every letter is the identity (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.0.iter().all(|p| *p == Pauli::I)
    }

    /// Positions of the non-identity letters, ascending.
    pub fn support(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != Pauli::I)
            .map(|(i, _)| i)
            .collect()
    }
}

impl FromStr for PauliWord {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Pauli::from_letter).collect::<Result<_, _>>().map(Self)
    }
}

impl fmt::Display for PauliWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.0 {
            write!(f, "{}", p.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word() {
        let word: PauliWord = "XYYZ".parse().unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(
            word.ops(),
            &[Pauli::X, Pauli::Y, Pauli::Y, Pauli::Z]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let word: PauliWord = "xiZ".parse().unwrap();
        assert_eq!(word.ops(), &[Pauli::X, Pauli::I, Pauli::Z]);
    }

    #[test]
    fn test_parse_rejects_bad_letters() {
        let err = "XQZ".parse::<PauliWord>().unwrap_err();
        assert!(matches!(err, IrError::InvalidPauliLetter('Q')));
    }

    #[test]
    fn test_support_skips_identities() {
        let word: PauliWord = "XIZI".parse().unwrap();
        assert_eq!(word.support(), vec![0, 2]);
        assert!(!word.is_identity());
        assert!("III".parse::<PauliWord>().unwrap().is_identity());
    }

    #[test]
    fn test_display_roundtrip() {
        let word: PauliWord = "XYYZ".parse().unwrap();
        assert_eq!(word.to_string(), "XYYZ");
    }
}
