use edgegen::generator::{
    expected_valid_count, generate, is_valid, valid_candidates, GeneratorOptions,
};
use proptest::prelude::*;

// Small distinct alphabets, so that |A|^L stays cheap to enumerate.
fn alphabet() -> impl Strategy<Value = String> {
    proptest::collection::btree_set(proptest::char::range('!', '~'), 1..6)
        .prop_map(|set| set.into_iter().collect())
}

fn options(alphabet: &str, length: i64, boundary: char) -> GeneratorOptions {
    GeneratorOptions::new()
        .alphabet(alphabet)
        .length(length)
        .boundary(boundary)
        .clone()
}

proptest! {
    #[test]
    fn candidate_count_is_a_power(alphabet in alphabet(), length in 1i64..5) {
        // '\u{1}' never appears in the generated alphabets, so nothing is filtered.
        let generation = generate(&options(&alphabet, length, '\u{1}')).unwrap();
        let n = alphabet.chars().count();
        prop_assert_eq!(generation.candidates, n.pow(length as u32));
        prop_assert_eq!(generation.count(), generation.candidates);
    }

    #[test]
    fn survivors_use_the_alphabet_and_avoid_the_boundary(
        alphabet in alphabet(),
        length in 1i64..5,
        pick in any::<prop::sample::Index>(),
    ) {
        let chars: Vec<char> = alphabet.chars().collect();
        let boundary = *pick.get(&chars);
        let generation = generate(&options(&alphabet, length, boundary)).unwrap();

        for s in &generation.valid {
            prop_assert_eq!(s.chars().count(), length as usize);
            prop_assert!(s.chars().all(|c| chars.contains(&c)));
            prop_assert!(is_valid(s, boundary));
            prop_assert!(!s.starts_with(boundary) && !s.ends_with(boundary));
        }
        prop_assert_eq!(
            Some(generation.count()),
            expected_valid_count(chars.len(), length as usize, true)
        );
    }

    #[test]
    fn output_is_sorted_by_alphabet_position(alphabet in alphabet(), length in 1i64..4) {
        let chars: Vec<char> = alphabet.chars().collect();
        let generation = generate(&options(&alphabet, length, '\u{1}')).unwrap();
        let keys: Vec<Vec<usize>> = generation
            .valid
            .iter()
            .map(|s| s.chars().map(|c| chars.iter().position(|&a| a == c).unwrap()).collect())
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn generation_is_repeatable(alphabet in alphabet(), length in 0i64..4, boundary in proptest::char::range('!', '~')) {
        let opts = options(&alphabet, length, boundary);
        prop_assert_eq!(generate(&opts).unwrap(), generate(&opts).unwrap());
    }

    #[test]
    fn lazy_and_eager_agree(alphabet in alphabet(), length in 0i64..4, boundary in proptest::char::range('!', '~')) {
        let opts = options(&alphabet, length, boundary);
        let lazy: Vec<String> = valid_candidates(&opts).unwrap().collect();
        prop_assert_eq!(lazy, generate(&opts).unwrap().valid);
    }

    #[test]
    fn negative_lengths_are_rejected(alphabet in alphabet(), length in i64::MIN..0) {
        prop_assert!(generate(&options(&alphabet, length, '_')).is_err());
    }
}

#[test]
fn length_one_drops_only_the_boundary_itself() {
    let generation = generate(&options("abcde", 1, 'c')).unwrap();
    assert_eq!(generation.valid, vec!["a", "b", "d", "e"]);
    assert_eq!(generation.removed(), 1);
}

#[test]
fn boundary_outside_alphabet_filters_nothing() {
    let generation = generate(&GeneratorOptions::default()).unwrap();
    assert_eq!(generation.count(), 62 * 62 * 62);
    assert_eq!(generation.removed(), 0);
}
