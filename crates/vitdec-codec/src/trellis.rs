use vitdec_config::TrellisDesc;
use vitdec_core::{Bit, State, Symbol, VitErr};

use crate::poly;

/// One edge of the trellis: encoder input `bit` in state `from` emits `output`
/// and moves the encoder to state `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub from: State,
    pub to: State,
    pub bit: Bit,
    pub output: Symbol,
}

/// Collects the outgoing transitions of every state.
/// `finalize` turns it into a `Trellis` with the reverse index in place.
#[derive(Debug, Clone)]
pub struct TrellisBuilder {
    /// outgoing[i] holds (next_state, output) for input bit 0 and input bit 1
    outgoing: Vec<Option<[(State, Symbol); 2]>>,
}

impl TrellisBuilder {
    pub fn new(num_states: usize) -> Self {
        Self { outgoing: vec![None; num_states] }
    }

    pub fn num_states(&self) -> usize {
        self.outgoing.len()
    }

    /// Records the two outgoing transitions of `state_from`: input bit 0 leads to
    /// `state_to0` emitting `output0`, input bit 1 leads to `state_to1` emitting `output1`.
    /// Must be called once for every state, in any order.
    pub fn add_transitions(
        &mut self,
        state_from: State,
        state_to0: State,
        state_to1: State,
        output0: Symbol,
        output1: Symbol,
    ) -> Result<&mut Self, VitErr> {
        for state in [state_from, state_to0, state_to1] {
            self.check_range(state)?;
        }
        let slot = &mut self.outgoing[state_from as usize];
        if slot.is_some() {
            return Err(VitErr::DuplicateTransitions { state: state_from });
        }
        *slot = Some([(state_to0, output0), (state_to1, output1)]);
        Ok(self)
    }

    /// Builds the reverse index: for every destination state, the branches arriving there.
    /// Origins are visited in increasing state order, bit 0 before bit 1, so the first
    /// incoming branch of a state is the one with the lower (origin, bit).
    pub fn finalize(self) -> Result<Trellis, VitErr> {
        let num_states = self.outgoing.len();
        if num_states == 0 {
            return Err(VitErr::EmptyTrellis);
        }

        let mut outgoing = Vec::with_capacity(num_states);
        for (state, row) in self.outgoing.into_iter().enumerate() {
            match row {
                Some(row) => outgoing.push(row),
                None => return Err(VitErr::MissingTransitions { state: state as State }),
            }
        }

        let mut incoming: Vec<Vec<Branch>> = vec![Vec::with_capacity(2); num_states];
        for (from, row) in outgoing.iter().enumerate() {
            for (bit, &(to, output)) in row.iter().enumerate() {
                incoming[to as usize].push(Branch {
                    from: from as State,
                    to,
                    bit: bit as Bit,
                    output,
                });
            }
        }

        // There must be exactly 2 branches entering every state
        let incoming = incoming
            .into_iter()
            .enumerate()
            .map(|(state, branches)| {
                <[Branch; 2]>::try_from(branches).map_err(|branches| VitErr::MalformedTrellis {
                    state: state as State,
                    incoming: branches.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("trellis finalized with {} states", num_states);
        Ok(Trellis { outgoing, incoming })
    }

    fn check_range(&self, state: State) -> Result<(), VitErr> {
        if (state as usize) < self.outgoing.len() {
            Ok(())
        } else {
            Err(VitErr::StateOutOfRange { state, num_states: self.outgoing.len() })
        }
    }
}

/// Finalized encoder state machine. Every state has exactly two outgoing
/// and exactly two incoming branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trellis {
    outgoing: Vec<[(State, Symbol); 2]>,
    /// incoming[i] holds the two branches entering state i
    incoming: Vec<[Branch; 2]>,
}

impl Trellis {
    /// Builds the trellis described by a configuration
    pub fn from_desc(desc: &TrellisDesc) -> Result<Self, VitErr> {
        match desc {
            TrellisDesc::Polynomials { constraint_length, generators } => {
                poly::trellis_from_polynomials(*constraint_length, generators)
            }
            TrellisDesc::Table(rows) => {
                let mut builder = TrellisBuilder::new(rows.len());
                for (state, row) in rows.iter().enumerate() {
                    builder.add_transitions(
                        state as State,
                        row.next_states[0],
                        row.next_states[1],
                        row.outputs[0],
                        row.outputs[1],
                    )?;
                }
                builder.finalize()
            }
        }
    }

    pub fn num_states(&self) -> usize {
        self.incoming.len()
    }

    /// The two branches that can arrive at `state`
    pub fn incoming_branches(&self, state: State) -> (Branch, Branch) {
        let [b0, b1] = self.incoming[state as usize];
        (b0, b1)
    }

    /// (next_state, output) for input bit 0 and input bit 1
    pub fn outgoing(&self, state: State) -> [(State, Symbol); 2] {
        self.outgoing[state as usize]
    }

    pub fn next_state(&self, state: State, bit: Bit) -> State {
        self.outgoing[state as usize][bit as usize].0
    }

    pub fn output(&self, state: State, bit: Bit) -> Symbol {
        self.outgoing[state as usize][bit as usize].1
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use vitdec_config::TransitionRow;

    /// poly2trellis(3, [7 5])
    fn reference_builder() -> TrellisBuilder {
        let mut builder = TrellisBuilder::new(4);
        builder
            .add_transitions(0, 0, 2, 0, 3).unwrap()
            .add_transitions(1, 0, 2, 3, 0).unwrap()
            .add_transitions(2, 1, 3, 2, 1).unwrap()
            .add_transitions(3, 1, 3, 1, 2).unwrap();
        builder
    }

    #[test]
    fn test_reverse_index() {
        let trellis = reference_builder().finalize().unwrap();
        assert_eq!(trellis.num_states(), 4);

        let (b0, b1) = trellis.incoming_branches(0);
        assert_eq!(b0, Branch { from: 0, to: 0, bit: 0, output: 0 });
        assert_eq!(b1, Branch { from: 1, to: 0, bit: 0, output: 3 });

        let (b0, b1) = trellis.incoming_branches(3);
        assert_eq!(b0, Branch { from: 2, to: 3, bit: 1, output: 1 });
        assert_eq!(b1, Branch { from: 3, to: 3, bit: 1, output: 2 });
    }

    #[test]
    fn test_two_in_two_out() {
        let trellis = reference_builder().finalize().unwrap();
        let mut outgoing_count = vec![0usize; trellis.num_states()];
        for state in 0..trellis.num_states() as State {
            let (b0, b1) = trellis.incoming_branches(state);
            assert_eq!(b0.to, state);
            assert_eq!(b1.to, state);
            outgoing_count[b0.from as usize] += 1;
            outgoing_count[b1.from as usize] += 1;

            // Incoming branches agree with the forward table
            for b in [b0, b1] {
                assert_eq!(trellis.next_state(b.from, b.bit), state);
                assert_eq!(trellis.output(b.from, b.bit), b.output);
            }
        }
        assert!(outgoing_count.iter().all(|&c| c == 2));
    }

    #[test]
    fn test_order_independent() {
        let mut builder = TrellisBuilder::new(4);
        builder
            .add_transitions(3, 1, 3, 1, 2).unwrap()
            .add_transitions(1, 0, 2, 3, 0).unwrap()
            .add_transitions(0, 0, 2, 0, 3).unwrap()
            .add_transitions(2, 1, 3, 2, 1).unwrap();
        assert_eq!(builder.finalize().unwrap(), reference_builder().finalize().unwrap());
    }

    #[test]
    fn test_malformed() {
        // State 0 is entered three times, state 1 once
        let mut builder = TrellisBuilder::new(2);
        builder.add_transitions(0, 0, 1, 0, 1).unwrap();
        builder.add_transitions(1, 0, 0, 1, 0).unwrap();
        assert_eq!(builder.finalize(), Err(VitErr::MalformedTrellis { state: 0, incoming: 3 }));
    }

    #[test]
    fn test_missing_and_duplicate() {
        let mut builder = TrellisBuilder::new(4);
        builder.add_transitions(0, 0, 2, 0, 3).unwrap();
        assert_eq!(
            builder.add_transitions(0, 0, 2, 0, 3).unwrap_err(),
            VitErr::DuplicateTransitions { state: 0 }
        );
        builder.add_transitions(1, 0, 2, 3, 0).unwrap();
        builder.add_transitions(3, 1, 3, 1, 2).unwrap();
        assert_eq!(builder.finalize(), Err(VitErr::MissingTransitions { state: 2 }));
    }

    #[test]
    fn test_out_of_range() {
        let mut builder = TrellisBuilder::new(4);
        assert_eq!(
            builder.add_transitions(0, 0, 4, 0, 3).unwrap_err(),
            VitErr::StateOutOfRange { state: 4, num_states: 4 }
        );
        assert_eq!(
            builder.add_transitions(7, 0, 2, 0, 3).unwrap_err(),
            VitErr::StateOutOfRange { state: 7, num_states: 4 }
        );
        assert_eq!(TrellisBuilder::new(0).finalize(), Err(VitErr::EmptyTrellis));
    }

    #[test]
    fn test_from_table_desc() {
        let rows = vec![
            TransitionRow { next_states: [0, 2], outputs: [0, 3] },
            TransitionRow { next_states: [0, 2], outputs: [3, 0] },
            TransitionRow { next_states: [1, 3], outputs: [2, 1] },
            TransitionRow { next_states: [1, 3], outputs: [1, 2] },
        ];
        let trellis = Trellis::from_desc(&TrellisDesc::Table(rows)).unwrap();
        assert_eq!(trellis, reference_builder().finalize().unwrap());
    }
}
