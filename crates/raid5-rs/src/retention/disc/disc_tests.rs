use super::*;
use crate::error::Raid5Error;
use crate::layout::bits::bits_to_string;

#[test]
fn accessors_return_setup() {
    let disc = Disc::new(5, "10101");
    assert_eq!(disc.disc_count(), 5);
    assert_eq!(disc.data(), "10101");
}

#[test]
fn create_disc_list_uses_requested_count() {
    for count in [3, 5, 9] {
        assert_eq!(Disc::new(count, "101").create_disc_list().disc_count(), count);
    }
}

#[test]
fn bits_parse_source_string() {
    let bits = Disc::new(5, "10101").bits().unwrap();
    assert_eq!(bits_to_string(&bits), "10101");
}

#[test]
fn stripe_saves_and_reports_original_size() {
    let (discs, size) = Disc::new(4, "1100110").stripe().unwrap();
    assert_eq!(size, 7);
    assert_eq!(discs.row_count(), Ok(3));
    assert_eq!(bits_to_string(&discs.read_data(size).unwrap()), "1100110");
}

#[test]
fn stripe_propagates_parse_errors() {
    assert!(matches!(
        Disc::new(4, "10x").stripe(),
        Err(Raid5Error::InvalidCharacter { character: 'x', position: 2 })
    ));
}

#[test]
fn stripe_rejects_single_disc() {
    assert_eq!(
        Disc::new(1, "1").stripe(),
        Err(Raid5Error::TooFewDiscs { discs: 1 })
    );
}
