//! Property-based tests for the path algebra.
//!
//! Note: the per-module unit tests pin down the documented edge cases; this module
//! checks the algebraic laws that should hold across arbitrary inputs.

use proptest::prelude::*;

use crate::clean::CurrentDirContext;
use crate::combine::join_all;
use crate::split::chop_basename;
use crate::value::PathValue;

// Strategy for ordinary name segments (no separators, no dot segments)
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    relative_path_strategy().prop_map(|p| format!("/{p}"))
}

// Paths mixing names, dot segments, separator runs, and optional rooting
fn messy_path_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just(String::from(".")),
        Just(String::from("..")),
        Just(String::new()),
        segment_strategy(),
    ];
    (prop::bool::ANY, prop::collection::vec(piece, 0..8))
        .prop_map(|(rooted, parts)| format!("{}{}", if rooted { "/" } else { "" }, parts.join("/")))
}

fn any_path_string() -> impl Strategy<Value = String> {
    "[^\x00]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Construction is lossless for every non-sentinel string
    #[test]
    fn construction_round_trips(s in any_path_string()) {
        let path = PathValue::new(s.clone()).unwrap();
        prop_assert_eq!(path.as_str(), s.as_str());
        prop_assert_eq!(path.to_string(), s);
    }

    // Exactly one of is_absolute / is_relative holds
    #[test]
    fn absolute_and_relative_complementary(s in messy_path_strategy()) {
        let path = PathValue::new(s).unwrap();
        prop_assert_ne!(path.is_absolute(), path.is_relative());
    }

    // With a single separator, rootedness is just a leading separator
    #[test]
    fn absolute_iff_leading_separator(s in any_path_string()) {
        let path = PathValue::new(s.clone()).unwrap();
        prop_assert_eq!(path.is_absolute(), s.starts_with('/'));
    }

    // chop_basename reassembles: prefix + basename is a prefix of the
    // original and the dropped remainder is all separators
    #[test]
    fn chop_reassembles(s in messy_path_strategy()) {
        if let Some((prefix, base)) = chop_basename(&s) {
            prop_assert!(!base.is_empty());
            prop_assert!(!base.contains('/'));
            let reassembled = format!("{prefix}{base}");
            prop_assert!(s.starts_with(&reassembled));
            prop_assert!(s[reassembled.len()..].chars().all(|c| c == '/'));
        } else {
            prop_assert!(s.chars().all(|c| c == '/'));
        }
    }

    // A trailing self-reference never changes a name-only path
    #[test]
    fn concat_self_reference_is_identity(s in relative_path_strategy()) {
        let path = PathValue::new(s).unwrap();
        let dot = PathValue::new(".").unwrap();
        prop_assert_eq!(path.concat(&dot), path);
    }

    // Appending a name then its parent reference cancels out
    #[test]
    fn concat_parent_cancels_appended_name(
        s in relative_path_strategy(),
        name in segment_strategy(),
    ) {
        let base = PathValue::new(s).unwrap();
        let extended = base.concat(&PathValue::new(name).unwrap());
        let up = PathValue::new("..").unwrap();
        prop_assert_eq!(extended.concat(&up), base);
    }

    // An absolute right operand always wins
    #[test]
    fn concat_absolute_right_overrides(left in messy_path_strategy(), right in absolute_path_strategy()) {
        let left = PathValue::new(left).unwrap();
        let right = PathValue::new(right).unwrap();
        prop_assert_eq!(left.concat(&right), right);
    }

    // Concatenation of relative name-only paths is plain joining
    #[test]
    fn concat_of_names_is_plain_join(a in relative_path_strategy(), b in relative_path_strategy()) {
        let left = PathValue::new(a.clone()).unwrap();
        let right = PathValue::new(b.clone()).unwrap();
        let concatenated = left.concat(&right);
        let expected = format!("{a}/{b}");
        prop_assert_eq!(concatenated.as_str(), expected.as_str());
    }

    // Both join framings agree on every non-empty fragment sequence
    #[test]
    fn join_framings_agree(parts in prop::collection::vec(messy_path_strategy(), 1..6)) {
        let fragments: Vec<PathValue> = parts
            .into_iter()
            .map(|p| PathValue::new(p).unwrap())
            .collect();
        let (first, rest) = fragments.split_first().unwrap();
        prop_assert_eq!(first.join(rest), join_all(&fragments).unwrap());
    }

    // join_all of name-only fragments is separator joining
    #[test]
    fn join_all_of_names(parts in prop::collection::vec(segment_strategy(), 1..6)) {
        let fragments: Vec<PathValue> = parts
            .iter()
            .map(|p| PathValue::new(p.clone()).unwrap())
            .collect();
        let joined = join_all(&fragments).unwrap();
        let expected = parts.join("/");
        prop_assert_eq!(joined.as_str(), expected.as_str());
    }

    // clean output never contains empty or parent segments
    #[test]
    fn clean_output_has_no_empty_or_parent_segments(s in messy_path_strategy()) {
        let cleaned = PathValue::new(s).unwrap().clean(&CurrentDirContext::default(), None);
        if !cleaned.as_str().is_empty() {
            for segment in cleaned.as_str().split('/') {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, "..");
            }
        }
    }

    // clean is idempotent
    #[test]
    fn clean_idempotent(s in messy_path_strategy()) {
        let no_ctx = CurrentDirContext::default();
        let once = PathValue::new(s).unwrap().clean(&no_ctx, None);
        prop_assert_eq!(once.clean(&no_ctx, None), once);
    }

    // Anchoring then cleaning equals cleaning the manually prefixed path
    #[test]
    fn clean_anchoring_matches_manual_prefix(
        dir in relative_path_strategy(),
        s in messy_path_strategy(),
    ) {
        let ctx = CurrentDirContext::at(PathValue::new(dir.clone()).unwrap());
        let anchored = PathValue::new(s.clone()).unwrap().clean(&ctx, None);
        let manual = PathValue::new(format!("{dir}/{s}"))
            .unwrap()
            .clean(&CurrentDirContext::default(), None);
        prop_assert_eq!(anchored, manual);
    }
}
