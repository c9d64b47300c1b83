use vitdec_config::MetricKind;
use vitdec_core::{Metric, Symbol};

/// Branch metric between a received symbol and the symbol a branch expects.
#[inline]
pub fn distance(received: Symbol, expected: Symbol, kind: MetricKind) -> Metric {
    let diff = received ^ expected;
    match kind {
        MetricKind::Hamming => diff.count_ones(),
        MetricKind::Xor => diff,
    }
}
