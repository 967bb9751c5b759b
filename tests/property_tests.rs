//! Property-based tests for generation and auditing.

#![allow(clippy::unwrap_used)]

mod common;

use common::count;
use proptest::prelude::*;
use policypass::audit::{audit, estimate_entropy};
use policypass::pass::charset::{CharClass, Charsets, SIMILAR};
use policypass::{Error, Generator, OsRandom, PasswordPolicy, WeakTermIndex};

fn valid_policy() -> impl Strategy<Value = PasswordPolicy> {
    (0usize..5, 0usize..5, 0usize..5, 0usize..5, 0usize..20, any::<bool>()).prop_map(
        |(upper, lower, digit, special, extra, exclude_similar)| PasswordPolicy {
            min_length: (upper + lower + digit + special + extra).max(1),
            min_uppercase: upper,
            min_lowercase: lower,
            min_digit: digit,
            min_special: special,
            exclude_similar,
            ..Default::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_passwords_meet_policy(policy in valid_policy()) {
        let generator = Generator::new(policy.clone()).unwrap();
        let weak = WeakTermIndex::new(["aaaa"], ["zz"]);
        let generated = generator.generate(&weak, &mut OsRandom::new()).unwrap();
        let pw = generated.as_str();

        prop_assert_eq!(pw.chars().count(), policy.min_length);
        prop_assert!(count(pw, CharClass::Upper) >= policy.min_uppercase);
        prop_assert!(count(pw, CharClass::Lower) >= policy.min_lowercase);
        prop_assert!(count(pw, CharClass::Digit) >= policy.min_digit);
        prop_assert!(count(pw, CharClass::Symbol) >= policy.min_special);
        prop_assert!(!weak.is_weak(pw));

        let alphabet = Charsets::new(policy.exclude_similar);
        prop_assert!(pw.chars().all(|c| alphabet.contains(c)));
        if policy.exclude_similar {
            prop_assert!(!pw.chars().any(|c| SIMILAR.contains(&c)));
        }

        // what was generated for a policy audits clean against it
        prop_assert!(audit(pw, &policy, &WeakTermIndex::empty()).all_passed());
    }

    #[test]
    fn overfull_policies_are_rejected(extra in 1usize..10, length in 1usize..10) {
        let policy = PasswordPolicy {
            min_length: length,
            min_uppercase: length + extra,
            min_lowercase: 0,
            min_digit: 0,
            min_special: 0,
            ..Default::default()
        };
        prop_assert!(matches!(Generator::new(policy), Err(Error::InvalidPolicy(_))));
    }

    #[test]
    fn audit_never_panics(s in any::<String>(), policy in valid_policy()) {
        let report = audit(&s, &policy, &WeakTermIndex::new(["x"], ["y"]));
        prop_assert!(report.entropy_bits() >= 0.0);
        prop_assert_eq!(report.length(), s.chars().count());
    }

    #[test]
    fn entropy_grows_with_repetition(s in "[a-zA-Z0-9!#]{1,16}", times in 1usize..5) {
        let longer = s.repeat(times + 1);
        prop_assert!(estimate_entropy(&longer) >= estimate_entropy(&s.repeat(times)));
    }
}
