use crate::helpers::postal_code;
use claims::{assert_ok, assert_some_eq};
use postcodes::PostalCodeRange;
use postcodes::domain::RangeError;

fn range(iso: &str, start: &str, end: &str) -> PostalCodeRange {
    PostalCodeRange::bounded(postal_code(iso, start), postal_code(iso, end))
        .expect("Failed to build range.")
}

#[test]
fn uk_sector_ranges_cover_their_units() {
    let sectors = range("GB", "EC1A 1", "EC1A 9");
    assert_eq!(sectors.to_string(), "<EC1A1AA-EC1A9ZZ>");
    assert!(sectors.contains(&postal_code("GB", "EC1A 1BB")));
    assert!(sectors.contains(&postal_code("GB", "EC1A 9")));
    assert!(!sectors.contains(&postal_code("GB", "EC1B 1")));
    assert!(!sectors.contains(&postal_code("GB", "M1 1AA")));
}

#[test]
fn uk_ranges_are_adjacent_across_sectors() {
    let first = range("GB", "EC1A 1", "EC1A 4");
    let second = range("GB", "EC1A 5", "EC1A 9");
    assert!(first.is_adjacent_to(&second));
    let combined = assert_ok!(first.combine_checked(&second));
    assert_eq!(combined, range("GB", "EC1A 1", "EC1A 9"));
}

#[test]
fn splitting_a_range_around_a_hole() {
    let whole = range("PT", "2660", "2670");
    let hole = range("PT", "2663", "2665");
    let pieces: Vec<String> = whole.subtract(&hole).iter().map(ToString::to_string).collect();
    assert_eq!(pieces, vec!["<2660000-2662999>", "<2666000-2670999>"]);
}

#[test]
fn subtracted_pieces_recombine_with_the_hole() {
    let whole = range("PT", "2660", "2670");
    let hole = range("PT", "2663", "2665");
    let pieces = whole.subtract(&hole);

    let restored = pieces
        .iter()
        .try_fold(hole.clone(), |acc, piece| acc.combine_checked(piece));
    assert_eq!(assert_ok!(restored), whole);
}

#[test]
fn ranges_of_different_countries_are_rejected() {
    let result = PostalCodeRange::bounded(postal_code("PT", "2660"), postal_code("NL", "2670"));
    assert!(matches!(
        result,
        Err(RangeError::IncompatibleCountries { .. })
    ));
}

#[test]
fn neighbors_just_outside_a_range() {
    let area = range("NL", "1000", "1099");
    assert_eq!(area.to_string(), "<1000AA-1099ZZ>");
    assert_some_eq!(
        area.predecessor_postal_code().map(|code| code.to_string()),
        "0999ZZ".to_string()
    );
    assert_some_eq!(
        area.successor_postal_code().map(|code| code.to_string()),
        "1100AA".to_string()
    );
}
