//! Seed selector tests against a mocked seed store.
//!
//! Checks which keys are read for a given race and gender, and that store
//! failures never reach the caller verbatim.

use mockall::predicate::eq;

use crate::core::name_gen::{Gender, SeedSelector, SeedStoreError, SEED_ERROR_MESSAGE};
use crate::tests::common::fixtures::{race, request};
use crate::tests::mocks::MockStore;

fn json(seeds: &[&str]) -> String {
    serde_json::to_string(seeds).unwrap()
}

#[tokio::test]
async fn test_gendered_race_reads_given_and_surname() {
    let mut store = MockStore::new();
    store
        .expect_read()
        .with(eq("dwarf.female.json"))
        .times(1)
        .returning(|_| Ok(json(&["Amber", "Bardryn"])));
    store
        .expect_read()
        .with(eq("dwarf.surname.json"))
        .times(1)
        .returning(|_| Ok(json(&["Balderk"])));

    let mut selector = SeedSelector::with_seed(store, 0);
    let selection = selector
        .load_seeds(Some(&request(&["dwarf"], &[Gender::Female])))
        .await;

    assert!(selection.error.is_none());
    assert_eq!(selection.selected_race, Some(race("dwarf")));
    assert_eq!(selection.seeds, vec!["Amber", "Bardryn"]);
    assert_eq!(selection.surname_seeds, vec!["Balderk"]);
}

#[tokio::test]
async fn test_surnameless_race_never_reads_surname() {
    let mut store = MockStore::new();
    store
        .expect_read()
        .with(eq("goblin.male.json"))
        .times(1)
        .returning(|_| Ok(json(&["Snik"])));
    store
        .expect_read()
        .with(eq("goblin.surname.json"))
        .never();

    let mut selector = SeedSelector::with_seed(store, 0);
    let selection = selector
        .load_seeds(Some(&request(&["goblin"], &[Gender::Male])))
        .await;

    assert!(selection.error.is_none());
    assert!(selection.surname_seeds.is_empty());
}

#[tokio::test]
async fn test_genderless_race_key_has_no_gender() {
    let mut store = MockStore::new();
    store
        .expect_read()
        .with(eq("warforged.json"))
        .times(1)
        .returning(|_| Ok(json(&["Anvil"])));

    let mut selector = SeedSelector::with_seed(store, 0);
    let selection = selector
        .load_seeds(Some(&request(&["warforged"], &[Gender::Female, Gender::Male])))
        .await;

    assert!(selection.error.is_none());
    assert_eq!(selection.seeds, vec!["Anvil"]);
    // the gender pick still happens and is reported
    assert!(selection.message.starts_with("Multiple genders specified"));
}

#[tokio::test]
async fn test_store_failure_is_not_leaked() {
    let mut store = MockStore::new();
    store.expect_read().returning(|key| {
        Err(SeedStoreError::read_failed(
            format!("/secret/path/{key}"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        ))
    });

    let mut selector = SeedSelector::with_seed(store, 0);
    let selection = selector
        .load_seeds(Some(&request(&["elf"], &[Gender::Male])))
        .await;

    let error = selection.error.unwrap();
    assert_eq!(error, SEED_ERROR_MESSAGE);
    assert!(!error.contains("/secret/path"));
    assert!(!error.contains("permission denied"));
    assert!(selection.seeds.is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_generic_error() {
    let mut store = MockStore::new();
    store
        .expect_read()
        .with(eq("tabaxi.female.json"))
        .returning(|_| Ok("{\"not\": \"a list\"}".to_string()));

    let mut selector = SeedSelector::with_seed(store, 0);
    let selection = selector
        .load_seeds(Some(&request(&["tabaxi"], &[Gender::Female])))
        .await;

    assert_eq!(selection.error.as_deref(), Some(SEED_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_validation_failure_reads_nothing() {
    let mut store = MockStore::new();
    store.expect_read().never();

    let mut selector = SeedSelector::with_seed(store, 0);
    let selection = selector.load_seeds(None).await;

    assert_eq!(
        selection.error.as_deref(),
        Some("args must be provided to generate seed data")
    );
}
