use thiserror::Error;

use crate::State;

/// Coarse classification of a VitErr. Both kinds are fatal for the call that
/// produced them: a malformed trellis can never be decoded against, and invalid
/// input is caller misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    MalformedTrellis,
    InvalidInput,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VitErr {
    /// After finalize, a destination state does not have exactly two incoming branches
    #[error("malformed trellis: state {state} has {incoming} incoming branches, expected 2")]
    MalformedTrellis { state: State, incoming: usize },

    /// An origin state never got its outgoing transitions recorded
    #[error("malformed trellis: no transitions recorded for state {state}")]
    MissingTransitions { state: State },

    /// Outgoing transitions recorded twice for the same origin state
    #[error("malformed trellis: transitions for state {state} recorded twice")]
    DuplicateTransitions { state: State },

    #[error("malformed trellis: state {state} out of range, trellis has {num_states} states")]
    StateOutOfRange { state: State, num_states: usize },

    #[error("malformed trellis: trellis has no states")]
    EmptyTrellis,

    #[error("invalid generator polynomial {poly:#o} for constraint length {constraint_length}")]
    InvalidPolynomial { poly: u32, constraint_length: usize },

    #[error("invalid constraint length {constraint_length}")]
    InvalidConstraintLength { constraint_length: usize },

    /// A rate 1/n code needs between 1 and 32 generators to fit a Symbol
    #[error("invalid number of generator polynomials: {count}")]
    InvalidGeneratorCount { count: usize },

    /// Decoding requires at least one received symbol
    #[error("invalid input: at least one symbol must be decoded")]
    NoSymbols,

    #[error("invalid input: {expected} symbols requested but only {found} supplied")]
    TooFewSymbols { expected: usize, found: usize },
}

impl VitErr {
    pub fn kind(&self) -> ErrKind {
        match self {
            VitErr::NoSymbols | VitErr::TooFewSymbols { .. } => ErrKind::InvalidInput,
            _ => ErrKind::MalformedTrellis,
        }
    }
}
