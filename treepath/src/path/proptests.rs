//! Property-based tests for relative path computation.
//!
//! The inline tests in `relative` cover shape properties; this module checks
//! that computed relative paths resolve back to their targets.

use super::join::apply_relative;
use super::mode::RelativePathMode;
use super::relative::relative_path_between;
use proptest::prelude::*;

// Short components from a small alphabet so paths overlap often.
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(component_strategy(), 0..6),
        any::<bool>(),
    )
        .prop_map(|(parts, dir)| {
            let mut path = parts.join("/");
            if dir && !path.is_empty() {
                path.push('/');
            }
            path
        })
}

fn mode_strategy() -> impl Strategy<Value = RelativePathMode> {
    prop_oneof![Just(RelativePathMode::Fs), Just(RelativePathMode::Url)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Applying the relative path to the origin reproduces the target.
    #[test]
    fn relative_path_round_trips(
        from in path_strategy(),
        to in path_strategy(),
        mode in mode_strategy(),
    ) {
        let rel = relative_path_between(&from, &to, mode);
        prop_assert_eq!(apply_relative(&from, &rel, mode), to);
    }

    // Ascending steps only ever appear as a prefix.
    #[test]
    fn parent_steps_form_a_prefix(
        from in path_strategy(),
        to in path_strategy(),
        mode in mode_strategy(),
    ) {
        let rel = relative_path_between(&from, &to, mode);
        let steps: Vec<&str> = rel.split('/').filter(|s| !s.is_empty()).collect();
        let first_descend = steps.iter().position(|s| *s != "..").unwrap_or(steps.len());
        prop_assert!(steps[first_descend..].iter().all(|s| *s != ".."));
    }

    // Both modes agree whenever the origin is a directory.
    #[test]
    fn modes_agree_for_directory_origins(
        from in path_strategy(),
        to in path_strategy(),
    ) {
        prop_assume!(from.ends_with('/') || from.is_empty());
        prop_assert_eq!(
            relative_path_between(&from, &to, RelativePathMode::Fs),
            relative_path_between(&from, &to, RelativePathMode::Url)
        );
    }
}
