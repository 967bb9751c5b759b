mod common;

use common::{Looping, Scripted, count, script_for};
use policypass::pass::charset::{CharClass, SIMILAR};
use policypass::{Error, Generator, OsRandom, PasswordPolicy, WeakTermIndex};

fn open_policy(length: usize) -> PasswordPolicy {
    PasswordPolicy {
        min_length: length,
        min_uppercase: 0,
        min_lowercase: 0,
        min_digit: 0,
        min_special: 0,
        ..Default::default()
    }
}

#[test]
fn twelve_chars_one_of_each_without_confusables() {
    let policy = PasswordPolicy {
        min_length: 12,
        min_uppercase: 1,
        min_lowercase: 1,
        min_digit: 1,
        min_special: 1,
        exclude_similar: true,
        ..Default::default()
    };
    let generator = Generator::new(policy).unwrap();
    let mut rng = OsRandom::new();

    for _ in 0..200 {
        let generated = generator.generate(&WeakTermIndex::empty(), &mut rng).unwrap();
        let pw = generated.as_str();
        assert_eq!(pw.chars().count(), 12);
        assert!(count(pw, CharClass::Upper) >= 1);
        assert!(count(pw, CharClass::Lower) >= 1);
        assert!(count(pw, CharClass::Digit) >= 1);
        assert!(count(pw, CharClass::Symbol) >= 1);
        for c in ['O', '0', 'l', '1'] {
            assert!(!pw.contains(c), "{c} in generated password");
        }
        assert_eq!(generated.attempts, 1);
    }
}

#[test]
fn rejected_candidate_triggers_one_full_retry() {
    let generator = Generator::new(open_policy(9)).unwrap();
    let fill = generator.charsets().fill();
    let script = script_for("password1", &fill);
    let scripted_draws = script.len();
    let mut rng = Scripted::new(script);

    let weak = WeakTermIndex::new(["password1"], Vec::<String>::new());
    let generated = generator.generate(&weak, &mut rng).unwrap();

    assert_eq!(rng.remaining(), 0);
    assert_eq!(generated.attempts, 2);
    assert_ne!(generated.as_str(), "password1");
    assert_eq!(generated.as_str().chars().count(), 9);
    // second attempt redrew every position and reshuffled
    assert_eq!(rng.draws, scripted_draws * 2);
}

#[test]
fn scripted_candidate_is_accepted_without_index() {
    let generator = Generator::new(open_policy(9)).unwrap();
    let script = script_for("password1", &generator.charsets().fill());
    let mut rng = Scripted::new(script);

    let generated = generator.generate(&WeakTermIndex::empty(), &mut rng).unwrap();
    assert_eq!(generated.as_str(), "password1");
    assert_eq!(generated.attempts, 1);
}

#[test]
fn dictionary_hit_is_rejected() {
    let generator = Generator::new(open_policy(9)).unwrap();
    let script = script_for("xxappleyy", &generator.charsets().fill());
    let mut rng = Scripted::new(script);

    let weak = WeakTermIndex::new(Vec::<String>::new(), ["apple"]);
    let generated = generator.generate(&weak, &mut rng).unwrap();
    assert_eq!(generated.attempts, 2);
    assert!(!generated.as_str().contains("apple"));
}

#[test]
fn exhausted_budget_is_reported() {
    let generator = Generator::new(open_policy(9)).unwrap().with_max_attempts(3);
    let script = script_for("password1", &generator.charsets().fill());
    let mut rng = Looping::new(script);

    let weak = WeakTermIndex::new(["password1"], Vec::<String>::new());
    let err = generator.generate(&weak, &mut rng).unwrap_err();
    assert!(matches!(err, Error::GenerationExhausted { attempts: 3 }));
}

#[test]
fn tiny_alphabet_against_dictionary_exhausts() {
    // every digit is a dictionary entry, so no all-digit candidate survives
    let policy = PasswordPolicy {
        min_length: 4,
        min_uppercase: 0,
        min_lowercase: 0,
        min_digit: 4,
        min_special: 0,
        ..Default::default()
    };
    let digits: Vec<String> = ('0'..='9').map(String::from).collect();
    let weak = WeakTermIndex::new(Vec::<String>::new(), digits);
    let generator = Generator::new(policy).unwrap().with_max_attempts(50);
    let err = generator.generate(&weak, &mut OsRandom::new()).unwrap_err();
    assert!(matches!(err, Error::GenerationExhausted { attempts: 50 }));
}

#[test]
fn minimums_over_length_rejected() {
    let policy = PasswordPolicy {
        min_length: 3,
        ..Default::default()
    };
    assert!(matches!(
        Generator::new(policy),
        Err(Error::InvalidPolicy(_))
    ));
}

#[test]
fn random_source_failure_is_fatal() {
    struct Dead;
    impl policypass::RandomSource for Dead {
        fn next_u64(&mut self) -> policypass::Result<u64> {
            Err(Error::RandomSource("entropy unavailable".into()))
        }
    }

    let generator = Generator::new(PasswordPolicy::default()).unwrap();
    let err = generator
        .generate(&WeakTermIndex::empty(), &mut Dead)
        .unwrap_err();
    assert!(matches!(err, Error::RandomSource(_)));
}

#[test]
fn alpha_lead_starts_with_letter() {
    let policy = PasswordPolicy {
        min_length: 10,
        min_digit: 3,
        min_special: 3,
        alpha_lead: true,
        ..Default::default()
    };
    let generator = Generator::new(policy).unwrap();
    let mut rng = OsRandom::new();
    for _ in 0..100 {
        let generated = generator.generate(&WeakTermIndex::empty(), &mut rng).unwrap();
        let first = generated.as_str().chars().next().unwrap();
        assert!(first.is_ascii_alphabetic(), "leads with {first}");
    }
}

#[test]
fn exact_minimums_fill_every_position() {
    let policy = PasswordPolicy {
        min_length: 8,
        min_uppercase: 2,
        min_lowercase: 2,
        min_digit: 2,
        min_special: 2,
        exclude_similar: true,
        ..Default::default()
    };
    let generator = Generator::new(policy).unwrap();
    let generated = generator
        .generate(&WeakTermIndex::empty(), &mut OsRandom::new())
        .unwrap();
    let pw = generated.as_str();
    assert_eq!(count(pw, CharClass::Upper), 2);
    assert_eq!(count(pw, CharClass::Lower), 2);
    assert_eq!(count(pw, CharClass::Digit), 2);
    assert_eq!(count(pw, CharClass::Symbol), 2);
    assert!(!pw.chars().any(|c| SIMILAR.contains(&c)));
}

#[test]
fn batch_yields_requested_count() {
    let generator = Generator::new(PasswordPolicy::default()).unwrap();
    let batch = generator
        .generate_batch(5, &WeakTermIndex::empty(), &mut OsRandom::new())
        .unwrap();
    assert_eq!(batch.len(), 5);
    assert!(batch.iter().all(|g| g.as_str().chars().count() == 16));
}

#[test]
fn convenience_generate_uses_policy_length() {
    let policy = PasswordPolicy {
        min_length: 24,
        ..Default::default()
    };
    let pw = policypass::pass::generate(&policy, &WeakTermIndex::empty()).unwrap();
    assert_eq!(pw.chars().count(), 24);
}

#[test]
fn generator_is_shareable_across_threads() {
    let generator = Generator::new(PasswordPolicy::default()).unwrap();
    let weak = WeakTermIndex::new(["hunter2"], ["apple"]);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let mut rng = OsRandom::new();
                for _ in 0..25 {
                    let g = generator.generate(&weak, &mut rng).unwrap();
                    assert!(!weak.is_weak(g.as_str()));
                }
            });
        }
    });
}
