//! Property tests over random hands.

use niurs::{Category, evaluate};
use proptest::prelude::*;
use proptest::sample::select;

const RANKS: [&str; 13] = [
    "a", "2", "3", "4", "5", "6", "7", "8", "9", "10", "j", "q", "k",
];
const SUITS: [&str; 4] = ["s", "h", "d", "c"];

fn code() -> impl Strategy<Value = String> {
    (select(RANKS.to_vec()), select(SUITS.to_vec()), any::<bool>()).prop_map(|(rank, suit, upper)| {
        let code = format!("{rank}{suit}");
        if upper { code.to_uppercase() } else { code }
    })
}

fn hand() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(code(), 5)
}

proptest! {
    #[test]
    fn order_does_not_matter((codes, permuted) in hand().prop_flat_map(|codes| {
        (Just(codes.clone()), Just(codes).prop_shuffle())
    })) {
        prop_assert_eq!(evaluate(&codes), evaluate(&permuted));
    }

    #[test]
    fn evaluation_is_repeatable(codes in hand()) {
        prop_assert_eq!(evaluate(&codes), evaluate(&codes));
    }

    #[test]
    fn split_shape_matches_category(codes in hand()) {
        let result = evaluate(&codes);
        match result.category {
            Category::FiveDukes | Category::FiveSmall => {
                prop_assert_eq!(result.body.len(), 5);
                prop_assert!(result.tail.is_empty());
            }
            Category::NoNiu => {
                prop_assert!(result.body.is_empty());
                prop_assert_eq!(result.tail.len(), 5);
            }
            Category::Waiting | Category::Error => prop_assert!(false, "valid codes"),
            _ => {
                prop_assert_eq!(result.body.len(), 3);
                prop_assert_eq!(result.tail.len(), 2);
            }
        }

        let mut expected = codes.clone();
        let mut split: Vec<String> = result.body.iter().chain(&result.tail).cloned().collect();
        expected.sort();
        split.sort();
        prop_assert_eq!(split, expected);
    }

    #[test]
    fn all_faces_are_five_dukes(codes in prop::collection::vec(
        (select(vec!["j", "q", "k"]), select(SUITS.to_vec())).prop_map(|(r, s)| format!("{r}{s}")),
        5,
    )) {
        let result = evaluate(&codes);
        prop_assert_eq!(result.category, Category::FiveDukes);
        prop_assert_eq!(result.multiplier, 7);
    }
}
