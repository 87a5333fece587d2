use bingo_core::{binomial, generate};
use std::collections::BTreeSet;

macro_rules! count_case {
    ($name:ident, $n:expr, $k:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let combinations = generate($n, $k);
            assert_eq!(combinations.len(), $expected);
            assert_eq!(binomial($n, $k), Some($expected as u128));
            let unique: BTreeSet<Vec<usize>> = combinations
                .iter()
                .map(|combination| combination.indices().to_vec())
                .collect();
            assert_eq!(unique.len(), $expected);
            for combination in &combinations {
                assert_eq!(combination.len(), $k);
                assert!(combination.indices().iter().all(|index| *index < $n));
            }
        }
    };
}

count_case!(count_1_choose_1, 1, 1, 1);
count_case!(count_3_choose_2, 3, 2, 3);
count_case!(count_5_choose_3, 5, 3, 10);
count_case!(count_6_choose_6, 6, 6, 1);
count_case!(count_7_choose_2, 7, 2, 21);
count_case!(count_10_choose_1, 10, 1, 10);
count_case!(count_10_choose_2, 10, 2, 45);
count_case!(count_10_choose_3, 10, 3, 120);
count_case!(count_10_choose_4, 10, 4, 210);
count_case!(count_10_choose_5, 10, 5, 252);
count_case!(count_10_choose_9, 10, 9, 10);
count_case!(count_12_choose_6, 12, 6, 924);

macro_rules! empty_case {
    ($name:ident, $n:expr, $k:expr) => {
        #[test]
        fn $name() {
            assert!(generate($n, $k).is_empty());
        }
    };
}

empty_case!(empty_zero_cards, 10, 0);
empty_case!(empty_more_than_pool, 10, 11);
empty_case!(empty_pool, 0, 1);
empty_case!(empty_pool_zero_cards, 0, 0);

#[test]
fn enumeration_is_lexicographic() {
    let order: Vec<Vec<usize>> = generate(4, 2)
        .iter()
        .map(|combination| combination.indices().to_vec())
        .collect();
    assert_eq!(
        order,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ]
    );
}

macro_rules! binomial_case {
    ($name:ident, $n:expr, $k:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(binomial($n, $k), $expected);
        }
    };
}

binomial_case!(binomial_beyond_pool, 4, 5, Some(0));
binomial_case!(binomial_52_choose_26, 52, 26, Some(495_918_532_948_104));
binomial_case!(
    binomial_130_choose_65,
    130,
    65,
    Some(95_067_625_827_960_698_145_584_333_020_095_113_100)
);
binomial_case!(binomial_130_choose_1, 130, 1, Some(130));
binomial_case!(binomial_200_choose_100, 200, 100, None);
