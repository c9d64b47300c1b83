use vitdec_core::{Bit, Metric, State};

use crate::stage::StageHistory;

/// Final state of the most likely path and its accumulated metric,
/// or None for an empty history.
pub fn best_path(history: &StageHistory) -> Option<(State, Metric)> {
    let final_stage = history.last()?;
    let state = final_stage.best_state();
    Some((state, final_stage.metric(state)))
}

/// Walks the survivors back from the best final state and returns the decoded
/// bits in chronological order, one per stage.
pub fn traceback(history: &StageHistory) -> Vec<Bit> {
    let mut decoded = Vec::with_capacity(history.len());
    let Some((mut state, metric)) = best_path(history) else {
        return decoded;
    };
    tracing::trace!("traceback from state {} with path metric {}", state, metric);

    for stage in history.iter_rev() {
        let branch = stage.survivor(state);
        decoded.push(branch.bit);
        state = branch.from;
    }

    // Collected from the last step backwards
    decoded.reverse();
    decoded
}
