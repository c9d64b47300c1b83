use serde::Deserialize;
use vitdec_core::{State, Symbol};

/// Branch metric used by the ACS recursion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MetricKind {
    /// Number of differing bits between received and expected symbol
    #[default]
    Hamming,
    /// Raw XOR value of received and expected symbol. Matches Hamming for
    /// single-bit symbols only; kept for compatibility with older decoders.
    Xor,
}

/// Survivor choice when both incoming branches of a state reach it with equal path metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TieBreak {
    /// Keep the first incoming branch (lowest origin state for the usual trellises)
    PreferFirst,
    /// Keep the second incoming branch
    #[default]
    PreferSecond,
}

/// Outgoing transitions of one origin state, as given in a trellis table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    /// Destination for input bit 0 and input bit 1
    pub next_states: [State; 2],
    /// Encoder output for input bit 0 and input bit 1
    pub outputs: [Symbol; 2],
}

/// How the trellis is described in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrellisDesc {
    /// Generated from generator polynomials (octal notation, as for poly2trellis)
    Polynomials {
        constraint_length: usize,
        generators: Vec<u32>,
    },
    /// Explicit table, row i holds the transitions of state i
    Table(Vec<TransitionRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// If set, a verbose log is also written to this file
    pub debug_log: Option<String>,
    pub metric: MetricKind,
    pub tie_break: TieBreak,
    pub trellis: TrellisDesc,
}

impl DecoderConfig {
    /// Config with default decoder options for the given trellis
    pub fn with_trellis(trellis: TrellisDesc) -> Self {
        Self {
            debug_log: None,
            metric: MetricKind::default(),
            tie_break: TieBreak::default(),
            trellis,
        }
    }
}
