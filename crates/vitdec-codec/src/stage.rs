use vitdec_core::{Metric, State};

use crate::trellis::Branch;

/// Outcome of one ACS step: for every state, the accumulated path metric and
/// the single branch that survived into it. Immutable once built; each step
/// produces a new Stage.
#[derive(Debug, PartialEq, Eq)]
pub struct Stage {
    /// survivors[i] is the incoming, surviving branch at state i
    survivors: Vec<Branch>,
    metrics: Vec<Metric>,
}

impl Stage {
    pub fn new(survivors: Vec<Branch>, metrics: Vec<Metric>) -> Self {
        assert_eq!(survivors.len(), metrics.len(), "one survivor per state required");
        Self { survivors, metrics }
    }

    /// All-zero metrics and no survivors. Seeds the recursion so that the first
    /// real stage can be computed with the regular ACS step; it is never
    /// stored in a StageHistory.
    pub fn bootstrap(num_states: usize) -> Self {
        Self {
            survivors: Vec::new(),
            metrics: vec![0; num_states],
        }
    }

    pub fn num_states(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_bootstrap(&self) -> bool {
        self.survivors.is_empty()
    }

    pub fn metric(&self, state: State) -> Metric {
        self.metrics[state as usize]
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Surviving branch into `state`. Panics on a bootstrap stage.
    pub fn survivor(&self, state: State) -> Branch {
        self.survivors[state as usize]
    }

    /// State with the lowest path metric; the lowest index wins among equals.
    pub fn best_state(&self) -> State {
        self.metrics
            .iter()
            .enumerate()
            .min_by_key(|&(_, metric)| metric)
            .map(|(state, _)| state as State)
            .unwrap_or(0)
    }
}

/// Append-only record of every stage of one decode call, indexed by time step.
/// The stage preceding time step t is at t - 1.
#[derive(Debug, Default)]
pub struct StageHistory {
    stages: Vec<Stage>,
}

impl StageHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { stages: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, stage: Stage) {
        assert!(!stage.is_bootstrap(), "bootstrap stage cannot enter the history");
        if let Some(last) = self.stages.last() {
            assert_eq!(last.num_states(), stage.num_states());
        }
        self.stages.push(stage);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&Stage> {
        self.stages.get(step)
    }

    pub fn last(&self) -> Option<&Stage> {
        self.stages.last()
    }

    /// Stages from the newest back to the first one
    pub fn iter_rev(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter().rev()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_survivors(n: usize) -> Vec<Branch> {
        (0..n as State).map(|s| Branch { from: s, to: s, bit: 0, output: 0 }).collect()
    }

    #[test]
    fn test_best_state_lowest_index_wins() {
        let stage = Stage::new(dummy_survivors(4), vec![5, 2, 7, 2]);
        assert_eq!(stage.best_state(), 1);

        let stage = Stage::new(dummy_survivors(4), vec![3, 3, 3, 3]);
        assert_eq!(stage.best_state(), 0);

        let stage = Stage::new(dummy_survivors(4), vec![9, 8, 7, 6]);
        assert_eq!(stage.best_state(), 3);
    }

    #[test]
    fn test_bootstrap() {
        let stage = Stage::bootstrap(8);
        assert!(stage.is_bootstrap());
        assert_eq!(stage.num_states(), 8);
        assert!(stage.metrics().iter().all(|&m| m == 0));
    }

    #[test]
    #[should_panic(expected = "bootstrap stage cannot enter the history")]
    fn test_history_rejects_bootstrap() {
        let mut history = StageHistory::default();
        history.push(Stage::bootstrap(4));
    }

    #[test]
    fn test_history_order() {
        let mut history = StageHistory::with_capacity(3);
        for t in 0..3 {
            history.push(Stage::new(dummy_survivors(2), vec![t, t + 1]));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(1).unwrap().metric(0), 1);
        assert_eq!(history.last().unwrap().metric(1), 3);
        let newest_first: Vec<_> = history.iter_rev().map(|s| s.metric(0)).collect();
        assert_eq!(newest_first, vec![2, 1, 0]);
    }
}
