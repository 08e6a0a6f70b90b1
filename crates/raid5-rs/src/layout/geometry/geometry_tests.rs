use super::*;

#[test]
fn geometry_reserves_one_slot_for_parity() {
    let geom = geometry(4).unwrap();
    assert_eq!(geom.discs, 4);
    assert_eq!(geom.bits_per_row, 3);
}

#[test]
fn geometry_rejects_fewer_than_two_discs() {
    assert_eq!(geometry(1), Err(Raid5Error::TooFewDiscs { discs: 1 }));
    assert_eq!(geometry(0), Err(Raid5Error::TooFewDiscs { discs: 0 }));
    assert!(geometry(2).is_ok());
}

#[test]
fn rows_and_padding_round_up() {
    let geom = geometry(4).unwrap();
    assert_eq!(geom.rows_for(0), 0);
    assert_eq!(geom.rows_for(5), 2);
    assert_eq!(geom.rows_for(6), 2);
    assert_eq!(geom.rows_for(7), 3);

    assert_eq!(geom.padded_len(0), 0);
    assert_eq!(geom.padded_len(5), 6);
    assert_eq!(geom.padded_len(6), 6);
    assert_eq!(geom.capacity(3), 9);
}

#[test]
fn locate_bit_maps_index_into_row() {
    let geom = geometry(5).unwrap();
    assert_eq!(geom.locate_bit(0), (0, 0));
    assert_eq!(geom.locate_bit(3), (0, 3));
    assert_eq!(geom.locate_bit(4), (1, 0));
    assert_eq!(geom.locate_bit(49), (12, 1));
}

#[test]
fn disc_for_slot_steps_over_parity() {
    assert_eq!(disc_for_slot(0, 0), 1);
    assert_eq!(disc_for_slot(2, 0), 3);
    assert_eq!(disc_for_slot(0, 2), 0);
    assert_eq!(disc_for_slot(1, 2), 1);
    assert_eq!(disc_for_slot(2, 2), 3);
    assert_eq!(disc_for_slot(2, 3), 2);
}
