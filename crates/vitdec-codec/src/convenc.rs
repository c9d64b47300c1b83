// Convolutional encoder driven by a trellis' forward transitions

use vitdec_core::{Bit, State, Symbol};

use crate::trellis::Trellis;

/// Encoder walking the outgoing transitions of a trellis, one input bit at a time.
#[derive(Clone, Copy, Debug)]
pub struct ConvEncoder<'a> {
    trellis: &'a Trellis,
    start: State,
    state: State,
}

impl<'a> ConvEncoder<'a> {
    /// Create a new encoder in the all-zero state.
    pub fn new(trellis: &'a Trellis) -> Self {
        Self::with_state(trellis, 0)
    }

    /// Create a new encoder starting from an arbitrary state.
    pub fn with_state(trellis: &'a Trellis, state: State) -> Self {
        assert!((state as usize) < trellis.num_states(), "start state out of range");
        Self { trellis, start: state, state }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Reset to the start state.
    #[inline]
    pub fn reset(&mut self) {
        self.state = self.start;
    }

    /// Encode a single input bit into one output symbol.
    #[inline]
    pub fn encode_bit(&mut self, bit: Bit) -> Symbol {
        assert!(bit <= 1, "input must be a single bit");
        let (next, output) = self.trellis.outgoing(self.state)[bit as usize];
        self.state = next;
        output
    }

    /// Encode a sequence of bits (one bit per byte), one symbol per bit.
    pub fn encode(&mut self, input: &[Bit]) -> Vec<Symbol> {
        input.iter().map(|&bit| self.encode_bit(bit)).collect()
    }
}
