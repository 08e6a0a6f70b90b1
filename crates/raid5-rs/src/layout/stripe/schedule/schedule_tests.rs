use super::*;

#[test]
fn start_is_last_disc_walking_down() {
    let c = ParityCursor::start(5);
    assert_eq!(c.skip_index, 4);
    assert!(c.decrementing);
}

#[test]
fn adjust_skip_index_matches_bounce_rules_for_five_discs() {
    assert_eq!(adjust_skip_index(4, 5, true), (3, true));
    assert_eq!(adjust_skip_index(0, 5, true), (1, false));
    assert_eq!(adjust_skip_index(1, 5, false), (2, false));
    assert_eq!(adjust_skip_index(4, 5, false), (3, true));
}

#[test]
fn cursor_advance_delegates_to_adjust() {
    let c = ParityCursor {
        skip_index: 0,
        decrementing: true,
    };
    assert_eq!(
        c.advance(5),
        ParityCursor {
            skip_index: 1,
            decrementing: false
        }
    );
}

#[test]
fn schedule_bounces_between_outer_discs() {
    let rows: Vec<usize> = ParitySchedule::new(5).take(12).collect();
    assert_eq!(rows, vec![4, 3, 2, 1, 0, 1, 2, 3, 4, 3, 2, 1]);
}

#[test]
fn schedule_for_three_discs() {
    let rows: Vec<usize> = ParitySchedule::new(3).take(8).collect();
    assert_eq!(rows, vec![2, 1, 0, 1, 2, 1, 0, 1]);
}

#[test]
fn schedule_for_two_discs_oscillates() {
    let rows: Vec<usize> = ParitySchedule::new(2).take(6).collect();
    assert_eq!(rows, vec![1, 0, 1, 0, 1, 0]);
}

#[test]
fn schedule_differs_from_round_robin() {
    let rows: Vec<usize> = ParitySchedule::new(4).take(7).collect();
    let round_robin: Vec<usize> = (0..7).map(|i| 3 - (i % 4)).collect();
    assert_ne!(rows, round_robin);
    assert_eq!(rows, vec![3, 2, 1, 0, 1, 2, 3]);
}

#[test]
fn independent_schedules_agree_row_by_row() {
    let a: Vec<usize> = ParitySchedule::new(6).take(40).collect();
    let b: Vec<usize> = ParitySchedule::new(6).take(40).collect();
    assert_eq!(a, b);
}

#[test]
fn parity_disc_for_row_matches_iterator() {
    for discs in 2..=9 {
        let expected: Vec<usize> = ParitySchedule::new(discs).take(100).collect();
        for (row, skip) in expected.iter().enumerate() {
            assert_eq!(parity_disc_for_row(discs, row), *skip, "discs={discs} row={row}");
        }
    }
}

#[test]
fn every_disc_holds_parity_within_one_bounce() {
    for discs in 2..=9 {
        let mut seen = vec![false; discs];
        for skip in ParitySchedule::new(discs).take(2 * (discs - 1)) {
            assert!(skip < discs);
            seen[skip] = true;
        }
        assert!(seen.iter().all(|s| *s), "discs={discs}");
    }
}
