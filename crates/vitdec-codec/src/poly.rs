use vitdec_core::{State, Symbol, VitErr};

use crate::trellis::{Trellis, TrellisBuilder};

/// Largest supported constraint length. Keeps the state count at 2^15 so a
/// full stage history stays within reason for long messages.
pub const MAX_CONSTRAINT_LENGTH: usize = 16;

/// Number of states for a given constraint length.
pub const fn num_states(k: usize) -> usize {
    1 << (k - 1)
}

/// Generates the trellis of a rate 1/n feedforward convolutional encoder.
///
/// `generators` are the n generator polynomials in the usual octal notation
/// (e.g. `[0o7, 0o5]`), the most significant of the K bits tapping the current
/// input. This matches MATLAB's `poly2trellis(K, generators)`:
/// - a state holds the K-1 most recent inputs, the newest one in the MSB,
/// - output bit i is the parity of the shift register masked with generator i,
/// - the first generator gives the most significant bit of the output symbol.
pub fn trellis_from_polynomials(constraint_length: usize, generators: &[u32]) -> Result<Trellis, VitErr> {
    if !(2..=MAX_CONSTRAINT_LENGTH).contains(&constraint_length) {
        return Err(VitErr::InvalidConstraintLength { constraint_length });
    }
    if generators.is_empty() || generators.len() > Symbol::BITS as usize {
        return Err(VitErr::InvalidGeneratorCount { count: generators.len() });
    }
    for &poly in generators {
        if poly == 0 || poly >> constraint_length != 0 {
            return Err(VitErr::InvalidPolynomial { poly, constraint_length });
        }
    }

    let memory = constraint_length - 1;
    let mut builder = TrellisBuilder::new(num_states(constraint_length));
    for state in 0..num_states(constraint_length) as State {
        let [(to0, out0), (to1, out1)] = [0u32, 1].map(|bit| {
            let register = (bit << memory) | state;
            let output = generators
                .iter()
                .fold(0, |acc: Symbol, &poly| (acc << 1) | ((register & poly).count_ones() & 1));
            (register >> 1, output)
        });
        builder.add_transitions(state, to0, to1, out0, out1)?;
    }
    builder.finalize()
}
