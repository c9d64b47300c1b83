mod common;

use vitdec_codec::{Trellis, TrellisBuilder, decode};
use vitdec_config::{TransitionRow, TrellisDesc};
use vitdec_core::{ErrKind, VitErr};

#[test]
fn test_malformed_trellis_is_fatal() {
    // State 3 sends both of its branches into state 1, leaving state 3 unreachable
    let rows = vec![
        TransitionRow { next_states: [0, 2], outputs: [0, 3] },
        TransitionRow { next_states: [0, 2], outputs: [3, 0] },
        TransitionRow { next_states: [1, 2], outputs: [2, 1] },
        TransitionRow { next_states: [1, 1], outputs: [1, 2] },
    ];
    let err = Trellis::from_desc(&TrellisDesc::Table(rows)).unwrap_err();
    assert_eq!(err, VitErr::MalformedTrellis { state: 1, incoming: 3 });
    assert_eq!(err.kind(), ErrKind::MalformedTrellis);
}

#[test]
fn test_incomplete_trellis() {
    let mut builder = TrellisBuilder::new(4);
    builder.add_transitions(0, 0, 2, 0, 3).unwrap();
    builder.add_transitions(2, 1, 3, 2, 1).unwrap();
    let err = builder.finalize().unwrap_err();
    assert_eq!(err, VitErr::MissingTransitions { state: 1 });
    assert_eq!(err.kind(), ErrKind::MalformedTrellis);
}

#[test]
fn test_single_state_code() {
    // Degenerate memoryless repetition code: one state, bit b emits b
    let mut builder = TrellisBuilder::new(1);
    builder.add_transitions(0, 0, 0, 0, 1).unwrap();
    let trellis = builder.finalize().unwrap();
    assert_eq!(decode(&[1, 0, 0, 1, 1], &trellis, 5).unwrap(), vec![1, 0, 0, 1, 1]);
}

#[test]
fn test_table_desc_matches_builder() {
    let rows = vec![
        TransitionRow { next_states: [0, 2], outputs: [0, 3] },
        TransitionRow { next_states: [0, 2], outputs: [3, 0] },
        TransitionRow { next_states: [1, 3], outputs: [2, 1] },
        TransitionRow { next_states: [1, 3], outputs: [1, 2] },
    ];
    assert_eq!(Trellis::from_desc(&TrellisDesc::Table(rows)).unwrap(), common::reference_trellis());
}
