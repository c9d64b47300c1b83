//! Hard-decision Viterbi decoding of binary rate 1/n convolutional codes
//!
//! - `trellis`: encoder state machine and its reverse index of incoming branches
//! - `poly`: trellis generation from generator polynomials
//! - `metric`, `acs`, `stage`: forward Add-Compare-Select recursion
//! - `traceback`: reconstruction of the most likely bit sequence
//! - `viterbi`: decoder entry points
//! - `convenc`: trellis driven encoder

pub mod acs;
pub mod convenc;
pub mod metric;
pub mod poly;
pub mod stage;
pub mod traceback;
pub mod trellis;
pub mod viterbi;

pub use convenc::ConvEncoder;
pub use stage::{Stage, StageHistory};
pub use trellis::{Branch, Trellis, TrellisBuilder};
pub use viterbi::{DecodeOpts, ViterbiDecoder, decode};
