//! National Insurance number generation for seeded appellants.
//!
//! Seeded cases need distinct, valid-format NINOs so the application's
//! duplicate-appellant matching never trips over reused fixture data.

use rand::Rng;

/// Letters permitted in either prefix position.
/// D, F, I, Q, U and V are never used; O is additionally barred from the
/// second position.
const PREFIX_LETTERS: &[u8] = b"ABCEGHJKLMNOPRSTWXYZ";

/// Administratively unallocated prefix pairs.
const FORBIDDEN_PAIRS: [&str; 7] = ["BG", "GB", "KN", "NK", "NT", "TN", "ZZ"];

/// Suffix letters in use.
const SUFFIX_LETTERS: &[u8] = b"ABCD";

/// Generate a fresh valid-format National Insurance number,
/// e.g. `AB123456C`.
#[must_use]
pub fn generate() -> String {
    let mut rng = rand::thread_rng();

    let prefix = loop {
        let first = PREFIX_LETTERS[rng.gen_range(0..PREFIX_LETTERS.len())] as char;
        let second = loop {
            let c = PREFIX_LETTERS[rng.gen_range(0..PREFIX_LETTERS.len())] as char;
            if c != 'O' {
                break c;
            }
        };
        let pair = format!("{first}{second}");
        if !FORBIDDEN_PAIRS.contains(&pair.as_str()) {
            break pair;
        }
    };

    let digits: u32 = rng.gen_range(0..1_000_000);
    let suffix = SUFFIX_LETTERS[rng.gen_range(0..SUFFIX_LETTERS.len())] as char;

    format!("{prefix}{digits:06}{suffix}")
}

/// Check that a string is a valid-format NINO.
#[must_use]
pub fn is_valid_format(nino: &str) -> bool {
    let bytes = nino.as_bytes();
    if bytes.len() != 9 {
        return false;
    }
    let first = bytes[0] as char;
    let second = bytes[1] as char;
    if !PREFIX_LETTERS.contains(&bytes[0]) || !PREFIX_LETTERS.contains(&bytes[1]) {
        return false;
    }
    if second == 'O' {
        return false;
    }
    if FORBIDDEN_PAIRS.contains(&format!("{first}{second}").as_str()) {
        return false;
    }
    if !bytes[2..8].iter().all(u8::is_ascii_digit) {
        return false;
    }
    SUFFIX_LETTERS.contains(&bytes[8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn generated_ninos_are_valid_format() {
        for _ in 0..500 {
            let nino = generate();
            assert!(is_valid_format(&nino), "invalid NINO generated: {nino}");
        }
    }

    #[test]
    fn known_good_and_bad_examples() {
        assert!(is_valid_format("AB123456C"));
        assert!(is_valid_format("CE000001A"));
        assert!(!is_valid_format("DA123456C"), "D prefix never used");
        assert!(!is_valid_format("AO123456C"), "O barred from second slot");
        assert!(!is_valid_format("GB123456A"), "unallocated pair");
        assert!(!is_valid_format("AB12345C"), "too short");
        assert!(!is_valid_format("AB123456E"), "suffix out of range");
    }

    proptest! {
        #[test]
        fn validator_rejects_arbitrary_strings_of_wrong_shape(s in "[A-Z]{2}[0-9]{5}") {
            prop_assert!(!is_valid_format(&s));
        }
    }
}
