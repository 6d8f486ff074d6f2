//! Property-based tests for race and gender selection.

use proptest::prelude::*;

use crate::core::name_gen::races::{self, RACE_KEYS};
use crate::core::name_gen::{Gender, MemorySeedStore, SeedKey, SeedSelector};
use crate::tests::common::fixtures::request;

fn arb_races() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(RACE_KEYS.to_vec(), 1..=RACE_KEYS.len())
}

fn arb_genders() -> impl Strategy<Value = Vec<Gender>> {
    prop_oneof![
        Just(vec![Gender::Male]),
        Just(vec![Gender::Female]),
        Just(vec![Gender::Male, Gender::Female]),
        Just(vec![Gender::Female, Gender::Male, Gender::Female]),
    ]
}

proptest! {
    /// Property: picks come from the request and notes match the candidate counts
    #[test]
    fn prop_selection_from_candidates(
        seed in any::<u64>(),
        races in arb_races(),
        genders in arb_genders()
    ) {
        let mut selector = SeedSelector::with_seed(MemorySeedStore::new(), seed);
        let selection = selector.validate(Some(&request(&races, &genders)));

        prop_assert!(selection.error.is_none());
        let race = selection.selected_race.unwrap();
        let gender = selection.selected_gender.unwrap();
        prop_assert!(races.contains(&race.name()));
        prop_assert!(genders.contains(&gender));

        let race_notes: Vec<&str> = selection
            .message
            .lines()
            .filter(|l| l.starts_with("Multiple races specified"))
            .collect();
        if races.len() > 1 {
            prop_assert_eq!(race_notes.len(), 1);
            prop_assert_eq!(
                race_notes[0].to_string(),
                format!("Multiple races specified: generating {} names.", race)
            );
        } else {
            prop_assert!(race_notes.is_empty());
        }

        let gender_notes = selection
            .message
            .lines()
            .filter(|l| l.starts_with("Multiple genders specified"))
            .count();
        let unique_genders = if genders.len() > 1 { 2 } else { 1 };
        prop_assert_eq!(gender_notes, usize::from(unique_genders > 1));
    }

    /// Property: duplicated races count once
    #[test]
    fn prop_duplicates_do_not_trigger_note(seed in any::<u64>(), repeats in 1usize..5) {
        let names = vec!["gnome"; repeats];
        let mut selector = SeedSelector::with_seed(MemorySeedStore::new(), seed);
        let selection = selector.validate(Some(&request(&names, &[Gender::Male])));

        prop_assert!(selection.message.is_empty());
    }

    /// Property: given-name keys carry a gender only for gendered races
    #[test]
    fn prop_given_key_gender(
        race in prop::sample::select(races::all().to_vec()),
        gender in prop_oneof![Just(Gender::Male), Just(Gender::Female)]
    ) {
        let key = SeedKey::given(&race, gender);
        let gendered = key == format!("{}.{}.json", race.name(), gender);

        prop_assert!(key.starts_with(race.name()));
        prop_assert_eq!(gendered, !race.is_genderless());
        prop_assert!(!key.contains("surname"));
    }
}
