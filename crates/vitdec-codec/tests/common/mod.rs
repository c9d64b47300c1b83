#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vitdec_codec::{Trellis, TrellisBuilder};
use vitdec_core::{Bit, Symbol, debug};

/// Received symbols of the reference scenario: poly2trellis(3, [7 5]) output for REFERENCE_BITS
pub const REFERENCE_SYMBOLS: [Symbol; 16] = [3, 1, 1, 3, 3, 2, 3, 3, 2, 3, 3, 2, 0, 2, 0, 1];
pub const REFERENCE_BITS: [Bit; 16] = [1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1];

/// Path to a config file shipped in the workspace configs/ directory
pub fn config_path(name: &str) -> String {
    format!("{}/../../configs/{}", env!("CARGO_MANIFEST_DIR"), name)
}

pub fn init_logging() {
    debug::setup_logging_verbose();
}

/// The rate 1/2, K=3 reference trellis, written out by hand
pub fn reference_trellis() -> Trellis {
    let mut builder = TrellisBuilder::new(4);
    builder
        .add_transitions(0, 0, 2, 0, 3).unwrap()
        .add_transitions(1, 0, 2, 3, 0).unwrap()
        .add_transitions(2, 1, 3, 2, 1).unwrap()
        .add_transitions(3, 1, 3, 1, 2).unwrap();
    builder.finalize().unwrap()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random message of `len` bits followed by `tail` zero bits
pub fn random_message(rng: &mut StdRng, len: usize, tail: usize) -> Vec<Bit> {
    (0..len)
        .map(|_| rng.random_range(0..2))
        .chain(std::iter::repeat_n(0, tail))
        .collect()
}
