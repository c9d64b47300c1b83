use vitdec_config::DecoderConfig;
use vitdec_core::{Bit, Metric, Symbol, VitErr};

use crate::acs;
use crate::stage::{Stage, StageHistory};
use crate::traceback;
use crate::trellis::Trellis;

pub use crate::acs::DecodeOpts;

/// Decoded bits together with the metric of the path they were read from.
/// With the Hamming metric the path metric is the number of channel bit
/// errors the decoder corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub bits: Vec<Bit>,
    pub path_metric: Metric,
}

/// Decodes the first `num_symbols` entries of `received` with default options
/// (Hamming metric, ties to the second branch). Returns one bit per symbol.
pub fn decode(received: &[Symbol], trellis: &Trellis, num_symbols: usize) -> Result<Vec<Bit>, VitErr> {
    decode_with_opts(received, trellis, num_symbols, &DecodeOpts::default()).map(|d| d.bits)
}

pub fn decode_with_opts(
    received: &[Symbol],
    trellis: &Trellis,
    num_symbols: usize,
    opts: &DecodeOpts,
) -> Result<Decoded, VitErr> {
    let history = forward(received, trellis, num_symbols, opts)?;
    let bits = traceback::traceback(&history);
    let path_metric = traceback::best_path(&history).map(|(_, metric)| metric).unwrap_or(0);
    tracing::debug!(
        "decoded {} symbols over {} states, path metric {}",
        num_symbols,
        trellis.num_states(),
        path_metric
    );
    Ok(Decoded { bits, path_metric })
}

/// Runs the ACS recursion over `received[..num_symbols]` and returns the full stage history.
pub fn forward(
    received: &[Symbol],
    trellis: &Trellis,
    num_symbols: usize,
    opts: &DecodeOpts,
) -> Result<StageHistory, VitErr> {
    if num_symbols < 1 {
        return Err(VitErr::NoSymbols);
    }
    if received.len() < num_symbols {
        return Err(VitErr::TooFewSymbols {
            expected: num_symbols,
            found: received.len(),
        });
    }
    let symbols = &received[..num_symbols];

    // The bootstrap stage only seeds the first step and is dropped right after
    let mut current = {
        let bootstrap = Stage::bootstrap(trellis.num_states());
        acs::step(&bootstrap, symbols[0], trellis, opts)
    };

    let mut history = StageHistory::with_capacity(num_symbols);
    for (t, &symbol) in symbols.iter().enumerate().skip(1) {
        let next = acs::step(&current, symbol, trellis, opts);
        tracing::trace!(step = t, "symbol {:#x} best state {}", symbol, next.best_state());
        history.push(std::mem::replace(&mut current, next));
    }
    history.push(current);

    Ok(history)
}

/// Decoder bound to one trellis and one set of options.
/// Holds no per-decode state; every call builds and drops its own stage history.
#[derive(Debug, Clone)]
pub struct ViterbiDecoder {
    trellis: Trellis,
    opts: DecodeOpts,
}

impl ViterbiDecoder {
    pub fn new(trellis: Trellis, opts: DecodeOpts) -> Self {
        Self { trellis, opts }
    }

    pub fn from_config(cfg: &DecoderConfig) -> Result<Self, VitErr> {
        let trellis = Trellis::from_desc(&cfg.trellis)?;
        Ok(Self::new(trellis, DecodeOpts::from(cfg)))
    }

    pub fn trellis(&self) -> &Trellis {
        &self.trellis
    }

    pub fn opts(&self) -> &DecodeOpts {
        &self.opts
    }

    /// Decodes every symbol in `received`
    pub fn decode(&self, received: &[Symbol]) -> Result<Vec<Bit>, VitErr> {
        self.decode_with_metric(received).map(|d| d.bits)
    }

    pub fn decode_with_metric(&self, received: &[Symbol]) -> Result<Decoded, VitErr> {
        decode_with_opts(received, &self.trellis, received.len(), &self.opts)
    }
}
