//! Core utilities for the VitDec Viterbi decoder
//!
//! This crate provides fundamental types and utilities used across the workspace:
//! - Scalar types for trellis states, encoder symbols, path metrics and bits
//! - The VitErr error type shared by trellis construction and decoding
//! - Logging setup

pub mod debug;
pub mod vit_err;

pub use vit_err::{ErrKind, VitErr};


/// Trellis state index, in `[0, num_states)`.
/// For a binary code of constraint length K there are 2^(K-1) states.
pub type State = u32;

/// Encoder output word for one input bit. For a rate 1/n code the n output
/// bits are packed with the first generator in the most significant position.
pub type Symbol = u32;

/// Branch or path metric, a non-negative distance.
pub type Metric = u32;

/// Decoded (or encoder input) bit, always 0 or 1.
pub type Bit = u8;
