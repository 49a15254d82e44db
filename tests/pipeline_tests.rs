//! End-to-end pipeline tests.
//!
//! A lookup-like operation returns an optional domain object; the
//! pipeline chains select_many/select to project fields and terminates
//! with match_with or a default-extraction accessor. This mirrors how a
//! consumer of the library composes the combinators in practice.

#![cfg(all(feature = "control", feature = "lift"))]

use maybars::control::Optional;
use maybars::lift::lift2;
use rstest::rstest;

const REFERENCE_YEAR: i32 = 2024;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    first_name: String,
    last_name: String,
    birth_year: Option<i32>,
}

/// A lookup that may find nothing; the raw operation yields a standard
/// `Option` and is wrapped through `capture` at the boundary.
fn find_person(id: u32) -> Option<Person> {
    match id {
        13 => Some(Person {
            first_name: "Eduard".to_string(),
            last_name: "Popescu".to_string(),
            birth_year: Some(1982),
        }),
        14 => Some(Person {
            first_name: "John".to_string(),
            last_name: String::new(),
            birth_year: None,
        }),
        _ => None,
    }
}

fn full_name(person: Person) -> Optional<String> {
    if person.first_name.trim().is_empty() || person.last_name.trim().is_empty() {
        Optional::absent()
    } else {
        Optional::present(format!("{}, {}", person.last_name, person.first_name))
    }
}

fn age_in_years(person: Person) -> Optional<i32> {
    Optional::from_option(person.birth_year).select(|year| REFERENCE_YEAR - year)
}

// =============================================================================
// Present Lookups
// =============================================================================

#[rstest]
fn found_person_projects_full_name() {
    let projected = Optional::capture(|| find_person(13)).select_many(full_name);
    assert_eq!(projected, Optional::present("Popescu, Eduard".to_string()));
}

#[rstest]
fn found_person_projects_age() {
    let projected = Optional::capture(|| find_person(13)).select_many(age_in_years);
    assert_eq!(projected, Optional::present(42));
}

#[rstest]
fn found_person_lifts_both_projections() {
    let person = Optional::capture(|| find_person(13));
    let combined = lift2(
        person.clone().select_many(full_name),
        person.select_many(age_in_years),
    );
    assert_eq!(
        combined,
        Optional::present(("Popescu, Eduard".to_string(), 42))
    );
}

// =============================================================================
// Partial Domain Objects
// =============================================================================

#[rstest]
fn person_without_last_name_has_no_full_name() {
    let projected = Optional::capture(|| find_person(14)).select_many(full_name);
    assert_eq!(projected, Optional::absent());
}

#[rstest]
fn person_without_birth_year_has_no_age() {
    let projected = Optional::capture(|| find_person(14)).select_many(age_in_years);
    assert_eq!(projected, Optional::absent());
}

// =============================================================================
// Missing Lookups
// =============================================================================

#[rstest]
fn missing_person_propagates_absent_through_pipeline() {
    let projected = Optional::capture(|| find_person(999)).select_many(full_name);
    assert_eq!(projected, Optional::absent());
}

#[rstest]
fn missing_person_match_invokes_only_absent_branch() {
    let mut present_called = false;
    let mut absent_called = false;

    Optional::capture(|| find_person(999))
        .select_many(full_name)
        .match_with(|_| present_called = true, || absent_called = true);

    assert!(!present_called);
    assert!(absent_called);
}

#[rstest]
fn missing_person_falls_back_to_surrogate_name() {
    let label = Optional::capture(|| find_person(999))
        .select_many(full_name)
        .value_or_else(|| "Unknown name.".to_string());
    assert_eq!(label, "Unknown name.");
}

// =============================================================================
// Deferred Pipelines
// =============================================================================

#[cfg(feature = "effect")]
mod deferred {
    use super::*;
    use maybars::effect::Io;

    #[rstest]
    fn deferred_lookup_captures_on_run() {
        let io = Io::new(|| find_person(13))
            .capture()
            .select(|person| person.select_many(full_name));
        assert_eq!(io.run(), Optional::present("Popescu, Eduard".to_string()));
    }

    #[rstest]
    fn deferred_missing_lookup_captures_absent() {
        let io = Io::new(|| find_person(999)).capture();
        assert_eq!(io.run(), Optional::absent());
    }
}

// =============================================================================
// Async Pipelines
// =============================================================================

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn async_lookup_projects_full_name() {
        let projected = Optional::capture_async(|| async { find_person(13) })
            .await
            .select_many_async(|person| async move { full_name(person) })
            .await;
        assert_eq!(projected, Optional::present("Popescu, Eduard".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn async_missing_lookup_matches_absent_branch() {
        let outcome = Optional::capture_async(|| async { find_person(999) })
            .await
            .select_many_async(|person| async move { full_name(person) })
            .await
            .match_async(
                |name| async move { format!("found {name}") },
                || async { "not found".to_string() },
            )
            .await;
        assert_eq!(outcome, "not found");
    }
}
