use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use unicode_normalization::UnicodeNormalization;

use nysiis::{Error, Nysiis};

fn fixtures() -> Vec<(String, String)> {
    let f = File::open("tests/encoding-fixtures.txt").ok().unwrap();
    let reader = BufReader::new(f);

    let mut fixtures = Vec::new();
    for line in reader.lines() {
        let line: String = line.ok().unwrap();

        if line.starts_with('#') || !line.contains('|') {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        fixtures.push((parts[0].to_string(), parts[1].to_string()));
    }

    assert!(!fixtures.is_empty());
    fixtures
}

#[test]
fn encoding() {
    let encoder = Nysiis::default();

    for (name, expected) in fixtures() {
        assert!(
            encoder.encode(&name) == expected,
            "[{}] Expected {}, got {}",
            name,
            expected,
            encoder.encode(&name)
        );
    }
}

#[test]
fn encoding_decomposed_input() {
    // NFD renditions of the accented fixtures must encode identically to
    // their precomposed forms.
    let encoder = Nysiis::default();

    for (name, expected) in fixtures() {
        let decomposed: String = name.nfd().collect();
        assert!(
            encoder.encode(&decomposed) == expected,
            "[{}] Expected {}, got {}",
            decomposed,
            expected,
            encoder.encode(&decomposed)
        );
    }
}

#[test]
fn encoding_is_deterministic() {
    let encoder = Nysiis::default();

    for (name, _) in fixtures() {
        assert_eq!(encoder.encode(&name), encoder.encode(&name));
    }
}

#[test]
fn length_bound_holds_for_every_fixture() {
    for max in [1i64, 2, 4, 6, 10].iter() {
        let encoder = Nysiis::new(*max);
        for (name, _) in fixtures() {
            let key = encoder.encode(&name);
            assert!(
                key.chars().count() <= *max as usize,
                "[{}] {} is longer than {}",
                name,
                key,
                max
            );
        }
    }
}

#[test]
fn zero_and_negative_max_agree() {
    for (name, _) in fixtures() {
        assert_eq!(Nysiis::new(0).encode(&name), Nysiis::new(-5).encode(&name));
    }
}

#[test]
fn truncation_is_a_prefix_of_the_unlimited_key() {
    let unlimited = Nysiis::default();

    for (name, _) in fixtures() {
        let full = unlimited.encode(&name);
        let capped = Nysiis::traditional().encode(&name);
        assert!(
            full.starts_with(&capped),
            "[{}] {} is not a prefix of {}",
            name,
            capped,
            full
        );
    }
}

#[test]
fn raw_keys_never_repeat_adjacent_characters() {
    // The scan collapses duplicates as it appends, and none of these
    // names ends in the one cleanup rewrite that can reintroduce a pair.
    let encoder = Nysiis::default();

    for (name, _) in fixtures() {
        let key = encoder.encode(&name);
        let mut prev = None;
        for c in key.chars() {
            assert!(Some(c) != prev, "[{}] {} repeats {}", name, key, c);
            prev = Some(c);
        }
    }
}

#[test]
fn cleanup_runs_strip_ess_before_wye() {
    // DAYS: the trailing S drops first, exposing AY, which collapses to Y.
    assert_eq!("DY", nysiis::encode("Days"));
}

#[test]
fn empty_input_encodes_to_an_empty_key() {
    assert_eq!("", nysiis::encode(""));
    assert_eq!("", nysiis::encode("   "));
    assert_eq!("", nysiis::encode("42!"));
}

#[test]
fn invalid_configuration_is_rejected() {
    for value in ["foobar", "2.5", "", "6six"].iter() {
        match value.parse::<Nysiis>() {
            Err(Error::InvalidConfiguration(reported)) => assert_eq!(*value, reported),
            other => panic!("[{}] Expected InvalidConfiguration, got {:?}", value, other),
        }
    }
}

#[test]
fn invalid_input_is_rejected() {
    let encoder = Nysiis::default();

    assert_eq!(Err(Error::InvalidInput), encoder.encode_bytes(b"\x80"));
    assert_eq!(
        Err(Error::InvalidInput),
        encoder.encode_bytes(&[0xC3, 0x28])
    );
    assert_eq!(Ok("NAGT".to_string()), encoder.encode_bytes("knight".as_bytes()));
}
