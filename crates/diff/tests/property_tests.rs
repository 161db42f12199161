use line_diff::{compare_lines, ratio, Line};
use proptest::prelude::*;

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ a-dA-D\t]{0,10}", 0..12)
}

proptest! {
    #[test]
    fn ratio_is_symmetric(a in "[a-e ]{0,16}", b in "[a-e ]{0,16}") {
        prop_assert_eq!(ratio(&a, &b), ratio(&b, &a));
    }

    #[test]
    fn ratio_is_bounded(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let score = ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn ratio_of_equal_strings_is_one(a in "\\PC{0,24}") {
        prop_assert_eq!(ratio(&a, &a), 1.0);
    }

    #[test]
    fn identical_documents_score_full(texts in prop::collection::vec("[a-z ]{0,10}", 1..12)) {
        let lines = Line::numbered(texts);
        let result = compare_lines(&lines, &lines);

        prop_assert_eq!(result.average_similarity, 100.0);
        prop_assert!(result.differences.is_empty());
    }

    #[test]
    fn pair_count_is_longest_length(left in lines_strategy(), right in lines_strategy()) {
        let (n, m) = (left.len(), right.len());
        let result = compare_lines(&Line::numbered(left), &Line::numbered(right));

        prop_assert_eq!(result.pairs_compared, n.max(m));
        prop_assert!(result.differences_count <= result.pairs_compared);
        prop_assert!((0.0..=100.0).contains(&result.average_similarity));

        // Positions past the shorter side compare against an empty string
        for pair in &result.differences {
            if pair.position > n {
                prop_assert!(pair.left.is_empty());
            }
            if pair.position > m {
                prop_assert!(pair.right.is_empty());
            }
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored(text in "[a-z]{1,10}", pad in "[ \t]{0,4}") {
        let left = Line::numbered([format!("{pad}{text}{pad}")]);
        let right = Line::numbered([text.clone()]);

        let result = compare_lines(&left, &right);
        prop_assert_eq!(result.average_similarity, 100.0);
    }

    #[test]
    fn comparison_is_deterministic(left in lines_strategy(), right in lines_strategy()) {
        let left = Line::numbered(left);
        let right = Line::numbered(right);

        prop_assert_eq!(compare_lines(&left, &right), compare_lines(&left, &right));
    }
}
