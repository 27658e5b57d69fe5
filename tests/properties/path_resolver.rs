//! Property tests for build path resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use dockerbuild::{resolve_build_path, BuildPathOrigin};

fn segment() -> impl Strategy<Value = String> {
    // Leading non-dot keeps `.` and `..` out of generated paths.
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

fn absolute_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 0..=4).prop_map(|segments| format!("/{}", segments.join("/")))
}

fn padding() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t]{0,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No build source resolves to `deploy_root/current_directory`.
    #[test]
    fn property_absent_source_is_root_and_current(
        root in absolute_path(),
        current in relative_path(),
    ) {
        let resolved = resolve_build_path(Path::new(&root), Some(&current), None).unwrap();

        let expected = PathBuf::from(&root).join(&current);
        prop_assert_eq!(resolved.as_path(), expected.as_path());
        prop_assert_eq!(resolved.origin(), BuildPathOrigin::Default);
    }

    /// PROPERTY: An absolute build source is used verbatim after trimming,
    /// whatever the deploy root and current directory are.
    #[test]
    fn property_absolute_source_ignores_root(
        root in absolute_path(),
        current in relative_path(),
        source in absolute_path(),
        lead in padding(),
        trail in padding(),
    ) {
        let raw = format!("{lead}{source}{trail}");
        let resolved = resolve_build_path(Path::new(&root), Some(&current), Some(&raw)).unwrap();

        prop_assert_eq!(resolved.as_path(), Path::new(&source));
        prop_assert_eq!(resolved.origin(), BuildPathOrigin::Absolute);
    }

    /// PROPERTY: A relative build source joins beneath the current release.
    #[test]
    fn property_relative_source_joins_under_current(
        root in absolute_path(),
        current in relative_path(),
        source in relative_path(),
        lead in padding(),
        trail in padding(),
    ) {
        let raw = format!("{lead}{source}{trail}");
        let resolved = resolve_build_path(Path::new(&root), Some(&current), Some(&raw)).unwrap();

        let expected = PathBuf::from(&root).join(&current).join(&source);
        prop_assert_eq!(resolved.as_path(), expected.as_path());
        prop_assert_eq!(resolved.origin(), BuildPathOrigin::Relative);
    }

    /// PROPERTY: A whitespace-only build source behaves exactly like no source.
    #[test]
    fn property_blank_source_is_absent(
        root in absolute_path(),
        current in relative_path(),
        blank in padding(),
    ) {
        let with_blank = resolve_build_path(Path::new(&root), Some(&current), Some(&blank)).unwrap();
        let without = resolve_build_path(Path::new(&root), Some(&current), None).unwrap();

        prop_assert_eq!(with_blank, without);
    }

    /// PROPERTY: Every successful resolution is absolute, and repeating it gives the same answer.
    #[test]
    fn property_resolution_is_absolute_and_repeatable(
        root in absolute_path(),
        current in relative_path(),
        source in "(?s).{0,64}",
    ) {
        let first = resolve_build_path(Path::new(&root), Some(&current), Some(&source)).unwrap();
        let second = resolve_build_path(Path::new(&root), Some(&current), Some(&source)).unwrap();

        prop_assert!(first.as_path().has_root(), "not absolute: {}", first);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Resolution never panics on arbitrary raw input.
    #[test]
    fn property_resolve_never_panics(
        root in "(?s).{0,64}",
        current in "(?s).{0,32}",
        source in proptest::option::of("(?s).{0,64}"),
    ) {
        let _ = resolve_build_path(Path::new(&root), Some(&current), source.as_deref());
    }
}
