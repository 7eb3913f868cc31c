use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use suffix_search::{
    IndexBuilder, IndexError, PivotStrategy, SortStrategy, TextIndex, random_text,
};

static ABRACADABRA: &[u8] = b"ABRACADABRA";

fn all_configurations() -> Vec<IndexBuilder> {
    let mut builders = Vec::new();

    for strategy in SortStrategy::ALL {
        for pivot in PivotStrategy::ALL {
            if !strategy.uses_pivot() && pivot != PivotStrategy::default() {
                continue;
            }

            let mut builder = IndexBuilder::new();
            builder.with_strategy(strategy).with_pivot(pivot).with_seed(0xC0FFEE);
            builders.push(builder);
        }
    }

    builders
}

fn build_with(builder: &IndexBuilder, text: &[u8]) -> TextIndex {
    let mut index = TextIndex::from_text(text.to_vec()).unwrap();
    builder.build(&mut index).unwrap();
    index
}

fn reference_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut suffix_array: Vec<usize> = (0..text.len()).collect();
    suffix_array.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    suffix_array
}

fn is_suffix_array(maybe_suffix_array: &[usize], text: &[u8]) -> bool {
    if maybe_suffix_array.len() != text.len() {
        return false;
    }

    for suffix_indices in maybe_suffix_array.windows(2) {
        if text[suffix_indices[0]..] >= text[suffix_indices[1]..] {
            return false;
        }
    }

    true
}

#[test]
fn whole_algorithm_abracadabra_queries() {
    for builder in all_configurations() {
        let index = build_with(&builder, ABRACADABRA);
        let name = format!("{} / {}", builder.strategy(), builder.pivot());

        assert_eq!(index.find_positions(b"AB"), Ok(vec![0, 7]), "{name}");
        assert_eq!(index.find_positions(b"RA"), Ok(vec![2, 9]), "{name}");
        assert_eq!(index.find_positions(b"ZZZ"), Ok(vec![]), "{name}");
        assert_eq!(
            index.find_positions(b"A"),
            Ok(vec![0, 3, 5, 7, 10]),
            "{name}"
        );
        assert_eq!(index.find_positions(ABRACADABRA), Ok(vec![0]), "{name}");
        assert_eq!(index.find_positions(b"ABRACADABRAB"), Ok(vec![]), "{name}");
    }
}

#[test]
fn whole_algorithm_abracadabra_suffix_array() {
    let expected = [10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2];

    for builder in all_configurations() {
        let index = build_with(&builder, ABRACADABRA);
        assert_eq!(index.permutation(), expected, "{}", builder.strategy());
    }
}

#[test]
fn whole_algorithm_short_texts() {
    for builder in all_configurations() {
        let empty = build_with(&builder, b"");
        assert_eq!(empty.permutation(), [0usize; 0]);
        assert_eq!(empty.find_positions(b"a"), Ok(vec![]));
        assert_eq!(empty.linear_search(b"a").unwrap().count(), 0);

        let single = build_with(&builder, b"x");
        assert_eq!(single.permutation(), [0]);
        assert_eq!(single.find_positions(b"x"), Ok(vec![0]));
        assert_eq!(single.find_positions(b"xx"), Ok(vec![]));
    }
}

#[test]
fn whole_algorithm_repeated_character() {
    let text = b"AAAA";

    for builder in all_configurations() {
        let index = build_with(&builder, text);

        // A < AA < AAA < AAAA
        assert_eq!(index.permutation(), [3, 2, 1, 0]);
        assert_eq!(index.find_positions(b"AA"), Ok(vec![0, 1, 2]));
        assert_eq!(index.find_positions(b"AAAAA"), Ok(vec![]));
    }
}

#[test]
fn whole_algorithm_sort_is_idempotent() {
    for builder in all_configurations() {
        let mut index = build_with(&builder, b"mississippi");
        let first_result = index.permutation().to_vec();

        builder.sort(&mut index).unwrap();

        assert_eq!(index.permutation(), first_result);
        assert!(index.is_built());
    }
}

#[test]
fn whole_algorithm_large_random_text() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x0DDB1A5E5BAD5EEDu64);
    let text = random_text(20_000, b"ABCD", &mut rng);
    let expected = reference_suffix_array(&text);

    for strategy in [SortStrategy::Quicksort, SortStrategy::Multikey] {
        for pivot in PivotStrategy::ALL {
            let mut index = TextIndex::<u8>::from_text(text.clone()).unwrap();
            IndexBuilder::new()
                .with_strategy(strategy)
                .with_pivot(pivot)
                .with_seed(1)
                .build(&mut index)
                .unwrap();

            assert_eq!(index.permutation(), expected, "{strategy} / {pivot}");
        }
    }
}

#[test]
fn whole_algorithm_smaller_index_storage() {
    let mut index = TextIndex::<u8, u16>::from_text(b"yabbadabbadoo".to_vec()).unwrap();
    IndexBuilder::new().build(&mut index).unwrap();

    assert_eq!(index.find_positions(b"abba"), Ok(vec![1, 6]));
    assert_eq!(index.find_positions(b"d"), Ok(vec![5, 10]));
}

#[test]
fn whole_algorithm_wide_characters() {
    let text: Vec<u32> = "smörgåsbord".chars().map(u32::from).collect();
    let query: Vec<u32> = "ö".chars().map(u32::from).collect();

    let mut index = TextIndex::<u32>::from_text(text).unwrap();
    IndexBuilder::new()
        .with_strategy(SortStrategy::Quicksort)
        .with_pivot(PivotStrategy::Adaptive)
        .build(&mut index)
        .unwrap();

    assert_eq!(index.find_positions(&query), Ok(vec![2]));
}

#[test]
fn whole_algorithm_rejects_invalid_use() {
    let mut index = TextIndex::<u8>::new();
    let builder = IndexBuilder::new();

    assert_eq!(builder.build(&mut index), Err(IndexError::NotLoaded));
    assert_eq!(index.binary_search(b"a").err(), Some(IndexError::NotLoaded));

    index.set_text(b"banana".to_vec()).unwrap();
    assert_eq!(index.find_positions(b"an").err(), Some(IndexError::NotBuilt));

    builder.build(&mut index).unwrap();
    assert_eq!(index.find_positions(b"an"), Ok(vec![1, 3]));

    index.set_text(b"bandana".to_vec()).unwrap();
    assert_eq!(index.find_positions(b"an").err(), Some(IndexError::NotBuilt));
    assert!(matches!(
        index.find_positions(b""),
        Err(IndexError::NotBuilt | IndexError::InvalidQuery { .. })
    ));
}

#[test]
fn whole_algorithm_validation_detects_broken_order() {
    let mut index = build_with(&IndexBuilder::new(), ABRACADABRA);
    assert_eq!(index.validate(), Ok(()));

    index.swap(0, 1).unwrap();

    assert!(matches!(
        index.validate(),
        Err(IndexError::OrderingViolation {
            slot: 0,
            left: 7,
            right: 10,
            ..
        })
    ));
    // a failed validation is only reported, the order stays broken
    assert_eq!(index.permutation()[..2], [7, 10]);
    assert!(!index.is_built());
}

#[test]
fn whole_algorithm_options_from_names() {
    assert_eq!("multikey".parse(), Ok(SortStrategy::Multikey));
    assert_eq!("builtin".parse(), Ok(SortStrategy::Reference));
    assert_eq!("median".parse(), Ok(PivotStrategy::MedianOfThree));
    assert_eq!(
        "bogo".parse::<SortStrategy>(),
        Err(IndexError::UnknownOption {
            kind: "sorting algorithm",
            name: "bogo".to_owned()
        })
    );

    for strategy in SortStrategy::ALL {
        assert_eq!(strategy.to_string().parse(), Ok(strategy));
    }
    for pivot in PivotStrategy::ALL {
        assert_eq!(pivot.to_string().parse(), Ok(pivot));
    }
}

proptest! {
    #[test]
    fn whole_algorithm_correctness_random_texts(
        text in prop::collection::vec(prop::sample::select(b"abc".to_vec()), 0..400),
        strategy in prop::sample::select(SortStrategy::ALL.to_vec()),
        pivot in prop::sample::select(PivotStrategy::ALL.to_vec()),
    ) {
        let mut index = TextIndex::<u8>::from_text(text.clone()).unwrap();
        IndexBuilder::new()
            .with_strategy(strategy)
            .with_pivot(pivot)
            .with_seed(5)
            .build(&mut index)
            .unwrap();

        prop_assert!(is_suffix_array(index.permutation(), &text));
        prop_assert_eq!(index.permutation(), reference_suffix_array(&text));
    }

    #[test]
    fn whole_algorithm_binary_search_agrees_with_linear_search(
        text in prop::collection::vec(prop::sample::select(b"ab".to_vec()), 0..300),
        query in prop::collection::vec(prop::sample::select(b"ab".to_vec()), 1..6),
    ) {
        let index = build_with(&IndexBuilder::new(), &text);

        let linear: Vec<_> = index.linear_search(&query).unwrap().collect();
        let binary = index.find_positions(&query).unwrap();

        prop_assert_eq!(linear, binary);
    }

    #[test]
    fn whole_algorithm_any_bytes(text in prop::collection::vec(any::<u8>(), 0..2_000)) {
        let mut builder = IndexBuilder::new();
        builder.with_strategy(SortStrategy::Quicksort).with_pivot(PivotStrategy::Adaptive);

        let index = build_with(&builder, &text);

        prop_assert!(is_suffix_array(index.permutation(), &text));
    }
}
