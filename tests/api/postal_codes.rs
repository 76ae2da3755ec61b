use crate::helpers::{configured_factory, init_tracing, postal_code};
use claims::{assert_err, assert_none, assert_ok};
use fake::Fake;
use postcodes::domain::{
    BbPostalCode, CaPostalCode, DefaultPostalCode, GbPostalCode, MtPostalCode, NlPostalCode,
    PtPostalCode, RangeBound,
};
use postcodes::{Country, PostalCode, PostalCodeError};
use std::collections::BTreeSet;

#[test]
fn factory_creates_codes_for_every_known_country() {
    let factory = configured_factory();
    for (iso, raw, expected) in [
        ("GB", "EC1A 1BB", "EC1A1"),
        ("CA", "K1A 0B1", "K1A0B1"),
        ("NL", "1012 AB", "1012"),
        ("PT", "1000-001", "1000001"),
        ("MT", "VLT 1117", "VLT1117"),
        ("BB", "BB17000", "17000"),
        ("FR", "F-75001", "75001"),
        ("US", "20500-0003", "20500"),
        ("SE", "114 55", "11455"),
        ("IE", "D02 X285", "D02X285"),
    ] {
        let code = assert_ok!(factory.create_for_iso(iso, raw));
        assert_eq!(code.to_string(), expected, "{iso} {raw}");
    }
}

#[test]
fn invalid_input_is_reported_with_its_country() {
    init_tracing();
    let result = PostalCode::parse(Country::Malta, "PLA123");
    assert_eq!(
        result,
        Err(PostalCodeError::InvalidFormat {
            country: Country::Malta,
            input: "PLA123".to_string()
        })
    );
}

#[test]
fn typed_wrappers_stay_in_their_country() {
    init_tracing();

    let gb = GbPostalCode::parse("A9 9ZZ").unwrap();
    assert_eq!(gb.successor().unwrap().as_str(), "B00");

    let ca = CaPostalCode::parse("J4G 0A0").unwrap();
    assert_eq!(ca.predecessor().unwrap().as_str(), "J4F9Z9");

    let nl = NlPostalCode::parse("1000 ZZ").unwrap();
    assert_eq!(nl.predecessor().unwrap().as_str(), "0999");

    let mt = MtPostalCode::parse("PZZ 9999").unwrap();
    assert_eq!(mt.successor().unwrap().as_str(), "QAA0000");

    let bb = BbPostalCode::parse("BB 00000").unwrap();
    assert_none!(bb.predecessor());

    let default = DefaultPostalCode::parse("Z9").unwrap();
    assert_none!(default.successor());
}

#[test]
fn portugal_range_bounds_follow_the_requested_side() {
    init_tracing();

    let start = PtPostalCode::parse_in_range("2660", RangeBound::Start).unwrap();
    let end = PtPostalCode::parse_in_range("2660", RangeBound::End).unwrap();
    assert_eq!(start.predecessor().unwrap().as_str(), "2659999");
    assert_eq!(end.predecessor().unwrap().as_str(), "2660998");
    assert_eq!(start.successor().unwrap().as_str(), "2660001");
    assert_eq!(end.successor().unwrap().as_str(), "2661000");
}

#[test]
fn expansion_of_short_and_full_codes() {
    let short = postal_code("PT", "2660");
    let lowest = assert_ok!(short.expand_as_lowest_in_range());
    assert_eq!(lowest.predecessor().unwrap().to_string(), "2659999");

    assert_err!(lowest.expand_as_highest_in_range());
    assert_err!(postal_code("MT", "PLA1234").expand_as_lowest_in_range());
}

#[test]
fn successor_and_predecessor_are_inverse_for_random_numeric_codes() {
    init_tracing();
    for _ in 0..100 {
        let number = (1..9_999_998u32).fake::<u32>();
        let code = PostalCode::parse(Country::Portugal, &format!("{number:07}")).unwrap();
        let next = code.successor().unwrap();
        assert!(next > code);
        assert_eq!(next.predecessor().unwrap(), code);
        let previous = code.predecessor().unwrap();
        assert!(previous < code);
        assert_eq!(previous.successor().unwrap(), code);
    }
}

#[test]
fn numeric_codes_sort_by_value() {
    let codes: BTreeSet<_> = ["2660", "999", "10", "2659"]
        .into_iter()
        .map(|raw| postal_code("NL", raw))
        .collect();
    let sorted: Vec<_> = codes.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, vec!["0010", "0999", "2659", "2660"]);
}

#[test]
fn human_readable_output_uses_the_country_layout() {
    assert_eq!(postal_code("GB", "dn551pt").to_human_readable(), "DN55 1");
    assert_eq!(postal_code("CA", "h0h0h0").to_human_readable(), "H0H 0H0");
    assert_eq!(postal_code("MT", "vlt1117").to_human_readable(), "VLT 1117");
    assert_eq!(postal_code("PT", "1000001").to_human_readable(), "1000 001");
}

#[test]
fn postal_codes_round_trip_through_json() {
    let code = postal_code("NL", "1012 AB");
    let json = serde_json::to_string(&code).unwrap();
    assert_eq!(json, r#"{"country":"NL","code":"1012"}"#);
    let back: PostalCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, code);

    let typed: MtPostalCode = serde_json::from_str(r#""pla 1235""#).unwrap();
    assert_eq!(typed.as_str(), "PLA1235");
    assert!(serde_json::from_str::<MtPostalCode>(r#""PLA123""#).is_err());
}

#[test]
fn wrappers_convert_to_and_from_generic_codes() {
    let generic = postal_code("GB", "M1 1AA");
    let typed = GbPostalCode::try_from(generic.clone()).unwrap();
    assert_eq!(PostalCode::from(typed), generic);
    assert_err!(CaPostalCode::try_from(generic));
}

/// A random code following `pattern`: `A` is a letter, `9` a digit.
fn random_code(pattern: &str) -> String {
    pattern
        .chars()
        .map(|symbol| match symbol {
            'A' => char::from(b'A' + (0..26u8).fake::<u8>()),
            '9' => char::from(b'0' + (0..10u8).fake::<u8>()),
            other => other,
        })
        .collect()
}

#[test]
fn successors_are_the_next_value_of_their_format() {
    init_tracing();
    for (iso, pattern) in [
        ("CA", "A9A9A9"),
        ("MT", "AAA9999"),
        ("GB", "A9A9"),
        ("GB", "AA999"),
    ] {
        for _ in 0..100 {
            let code = postal_code(iso, &random_code(pattern));
            let Some(next) = code.successor() else {
                continue;
            };
            assert!(code < next, "{code} < {next}");
            assert_eq!(next.predecessor().as_ref(), Some(&code));

            for _ in 0..20 {
                let other = postal_code(iso, &random_code(pattern));
                assert!(other.has_same_format(&code));
                assert!(
                    !(code < other && other < next),
                    "{other} lies between {code} and {next}"
                );
            }
        }
    }
}

#[test]
fn mixed_country_codes_sort_consistently() {
    init_tracing();
    let mut codes: Vec<PostalCode> = (0..50)
        .map(|_| {
            let number = (0..10_000u32).fake::<u32>();
            match (0..3u8).fake::<u8>() {
                0 => postal_code("PT", &number.to_string()),
                1 => postal_code("PT", &format!("{number:04}{:03}", number % 1000)),
                _ => postal_code("NL", &number.to_string()),
            }
        })
        .collect();
    codes.sort();

    for pair in codes.windows(2) {
        assert!(pair[0] <= pair[1], "{:?} <= {:?}", pair[0], pair[1]);
    }
    for (position, code) in codes.iter().enumerate() {
        for later in &codes[position..] {
            assert!(code <= later, "{code:?} <= {later:?}");
        }
    }

    let set: BTreeSet<_> = codes.iter().cloned().collect();
    let mut deduplicated = codes.clone();
    deduplicated.dedup();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), deduplicated);
}
