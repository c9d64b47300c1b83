use vitdec_config::{DecoderConfig, MetricKind, TieBreak};
use vitdec_core::{State, Symbol};

use crate::metric::distance;
use crate::stage::Stage;
use crate::trellis::Trellis;

/// Options steering the Add-Compare-Select recursion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOpts {
    pub metric: MetricKind,
    pub tie_break: TieBreak,
}

impl From<&DecoderConfig> for DecodeOpts {
    fn from(cfg: &DecoderConfig) -> Self {
        Self {
            metric: cfg.metric,
            tie_break: cfg.tie_break,
        }
    }
}

/// One Add-Compare-Select step. For every state, extends the paths of both
/// incoming branches by the distance to `received` and keeps the cheaper one.
/// `previous` is only read; the result is a new Stage.
pub fn step(previous: &Stage, received: Symbol, trellis: &Trellis, opts: &DecodeOpts) -> Stage {
    let num_states = trellis.num_states();
    assert_eq!(previous.num_states(), num_states, "stage does not match trellis");

    let mut survivors = Vec::with_capacity(num_states);
    let mut metrics = Vec::with_capacity(num_states);

    for state in 0..num_states as State {
        let (b0, b1) = trellis.incoming_branches(state);
        debug_assert!(b0.to == state && b1.to == state);

        // Add
        let metric0 = previous.metric(b0.from).saturating_add(distance(received, b0.output, opts.metric));
        let metric1 = previous.metric(b1.from).saturating_add(distance(received, b1.output, opts.metric));

        // Compare and select
        let keep_first = match opts.tie_break {
            TieBreak::PreferFirst => metric0 <= metric1,
            TieBreak::PreferSecond => metric0 < metric1,
        };
        if keep_first {
            survivors.push(b0);
            metrics.push(metric0);
        } else {
            survivors.push(b1);
            metrics.push(metric1);
        }
    }

    Stage::new(survivors, metrics)
}
