use super::*;

use shared::domain::SpeciesRef;

fn person(name: &str) -> Person {
    Person {
        name: name.to_string(),
        height: "100".to_string(),
        mass: "50".to_string(),
        gender: "n/a".to_string(),
        species: Vec::new(),
    }
}

fn numbered(count: usize) -> Vec<Person> {
    (0..count).map(|i| person(&format!("Person {i:03}"))).collect()
}

fn loaded_with(people: Vec<Person>) -> ViewState {
    ViewState::loading().loaded(Directory {
        people,
        refs: ClassificationRefs {
            human: SpeciesRef::from("https://api/species/1/"),
            droid: SpeciesRef::from("https://api/species/2/"),
        },
    })
}

fn names(people: &[&Person]) -> Vec<String> {
    people.iter().map(|p| p.name.clone()).collect()
}

fn star_wars_names() -> Vec<Person> {
    [
        "Luke Skywalker",
        "C-3PO",
        "R2-D2",
        "Darth Vader",
        "Leia Organa",
        "Owen Lars",
        "Beru Whitesun lars",
        "R5-D4",
        "Biggs Darklighter",
        "Obi-Wan Kenobi",
        "Anakin Skywalker",
        "Wilhuff Tarkin",
    ]
    .into_iter()
    .map(person)
    .collect()
}

#[test]
fn starts_loading_with_initial_window() {
    let state = ViewState::loading();
    assert!(state.is_loading());
    assert_eq!(state.window(), Window::new(0, 10));
    assert!(state.visible().is_empty());
}

#[test]
fn loaded_clears_loading_and_keeps_fetch_order() {
    let state = loaded_with(numbered(3));
    assert!(!state.is_loading());
    assert!(Arc::ptr_eq(state.all(), state.display()));
    assert_eq!(state.visible()[0].name, "Person 000");
}

#[test]
fn loaded_keeps_filter_typed_while_loading() {
    let state = ViewState::loading()
        .set_filter("007")
        .loaded(Directory {
            people: numbered(12),
            refs: ClassificationRefs::default(),
        });
    assert_eq!(names(&state.visible()), vec!["Person 007"]);
}

#[test]
fn paging_forward_and_back_over_23_entities() {
    let state = loaded_with(numbered(23));
    assert_eq!(state.window(), Window::new(0, 10));

    let state = state.page_forward();
    assert_eq!(state.window(), Window::new(10, 20));

    let state = state.page_forward();
    assert_eq!(state.window(), Window::new(20, 23));
    assert_eq!(state.visible().len(), 3);

    let state = state.page_backward();
    assert_eq!(state.window(), Window::new(10, 20));

    let state = state.page_backward();
    assert_eq!(state.window(), Window::new(0, 10));
    assert!(!state.has_previous());
}

#[test]
fn last_page_of_25_hides_next_and_shows_previous() {
    let state = loaded_with(numbered(25));
    assert_eq!(state.window(), Window::new(0, 10));
    assert!(state.has_next());
    assert!(!state.has_previous());

    let state = state.page_forward().page_forward();
    assert_eq!(state.window(), Window::new(20, 25));
    assert!(!state.has_next());
    assert!(state.has_previous());
    assert_eq!(state.position(), (25, 25));
    assert_eq!(
        names(&state.visible()),
        vec!["Person 020", "Person 021", "Person 022", "Person 023", "Person 024"]
    );
}

#[test]
fn exact_multiple_pages_back_without_snapping() {
    let state = loaded_with(numbered(30)).page_forward().page_forward();
    assert_eq!(state.window(), Window::new(20, 30));
    assert!(!state.has_next());

    let state = state.page_backward();
    assert_eq!(state.window(), Window::new(10, 20));
}

#[test]
fn short_list_paging_reproduces_negative_window() {
    let state = loaded_with(numbered(5));
    assert_eq!(state.visible().len(), 5);
    assert!(state.has_next());

    let state = state.page_forward();
    assert_eq!(state.window(), Window::new(10, 5));
    assert!(state.visible().is_empty());
    assert!(state.has_previous());

    let state = state.page_backward();
    assert_eq!(state.window(), Window::new(-10, 0));
    assert!(state.visible().is_empty());

    let state = state.page_forward();
    assert_eq!(state.window(), Window::new(0, 5));
    assert_eq!(state.visible().len(), 5);
}

#[test]
fn filter_is_case_insensitive_substring_over_all_entities() {
    let state = loaded_with(star_wars_names()).set_filter("SKY");
    assert_eq!(state.filter(), "sky");
    assert_eq!(
        names(&state.visible()),
        vec!["Luke Skywalker", "Anakin Skywalker"]
    );
}

#[test]
fn filter_ignores_pagination_window() {
    let state = loaded_with(numbered(40)).set_filter("person");
    assert_eq!(state.visible().len(), 40);
    assert_eq!(state.window(), Window::new(0, 10));
}

#[test]
fn filter_matches_exactly_the_substring_set() {
    let people = star_wars_names();
    for text in ["r", "D", "lars", "-", "zzz", "o"] {
        let state = loaded_with(people.clone()).set_filter(text);
        let needle = text.to_lowercase();
        let expected: Vec<String> = people
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names(&state.visible()), expected, "filter {text:?}");
    }
}

#[test]
fn clearing_filter_returns_to_paginated_view() {
    let state = loaded_with(numbered(25)).page_forward().set_filter("person");
    assert_eq!(state.visible().len(), 25);

    let state = state.set_filter("");
    assert!(!state.is_filtering());
    assert_eq!(state.visible().len(), 10);
    assert_eq!(state.visible()[0].name, "Person 010");
}

#[test]
fn filter_does_not_reset_window() {
    let state = loaded_with(numbered(25)).page_forward().set_filter("x");
    assert_eq!(state.window(), Window::new(10, 20));
}

#[test]
fn pager_flags_stay_window_based_while_filtering() {
    let state = loaded_with(numbered(25)).set_filter("person 02");
    assert_eq!(state.visible().len(), 5);
    assert!(state.has_next());
    assert!(!state.has_previous());
}

#[test]
fn empty_filter_result_has_no_visible_entities() {
    let state = loaded_with(star_wars_names()).set_filter("jar jar");
    assert!(state.visible().is_empty());
}

#[test]
fn ascending_sorts_by_lowercased_name() {
    let state = loaded_with(vec![person("beta"), person("Alpha"), person("gamma")])
        .set_sort(SortMode::Ascending);
    assert_eq!(names(&state.visible()), vec!["Alpha", "beta", "gamma"]);
}

#[test]
fn descending_is_reverse_of_ascending_for_distinct_names() {
    let people = star_wars_names();
    let ascending = loaded_with(people.clone()).set_sort(SortMode::Ascending);
    let descending = ascending.clone().set_sort(SortMode::Descending);

    let mut asc: Vec<String> = ascending.display().iter().map(|p| p.name.clone()).collect();
    asc.reverse();
    let desc: Vec<String> = descending.display().iter().map(|p| p.name.clone()).collect();
    assert_eq!(asc, desc);
}

#[test]
fn equal_keys_keep_fetch_order_in_both_directions() {
    let mut first = person("Rey");
    first.gender = "first".to_string();
    let mut second = person("REY");
    second.gender = "second".to_string();
    let people = vec![first, person("Ackbar"), second, person("Zam")];

    let asc = loaded_with(people.clone()).set_sort(SortMode::Ascending);
    let genders: Vec<&str> = asc
        .display()
        .iter()
        .filter(|p| p.name_key() == "rey")
        .map(|p| p.gender.as_str())
        .collect();
    assert_eq!(genders, vec!["first", "second"]);

    let desc = loaded_with(people).set_sort(SortMode::Descending);
    let genders: Vec<&str> = desc
        .display()
        .iter()
        .filter(|p| p.name_key() == "rey")
        .map(|p| p.gender.as_str())
        .collect();
    assert_eq!(genders, vec!["first", "second"]);
    assert_eq!(desc.display()[0].name, "Zam");
}

#[test]
fn none_restores_original_order_after_any_sort() {
    let base = loaded_with(star_wars_names());
    for mode in [SortMode::Ascending, SortMode::Descending] {
        let restored = base.clone().set_sort(mode).set_sort(SortMode::None);
        assert!(Arc::ptr_eq(restored.display(), restored.all()));
        assert_eq!(restored.display()[..], base.all()[..]);
    }
}

#[test]
fn sorting_never_touches_original_order() {
    let state = loaded_with(star_wars_names()).set_sort(SortMode::Descending);
    assert_eq!(state.all()[0].name, "Luke Skywalker");
    assert!(!Arc::ptr_eq(state.display(), state.all()));
}

#[test]
fn sorting_keeps_current_window() {
    let state = loaded_with(numbered(25)).page_forward();
    let sorted = state.set_sort(SortMode::Descending);
    assert_eq!(sorted.window(), Window::new(10, 20));
    assert_eq!(sorted.visible()[0].name, "Person 014");
}

#[test]
fn filter_applies_to_sorted_sequence() {
    let state = loaded_with(star_wars_names())
        .set_sort(SortMode::Ascending)
        .set_filter("skywalker");
    assert_eq!(
        names(&state.visible()),
        vec!["Anakin Skywalker", "Luke Skywalker"]
    );
}

#[test]
fn reduce_dispatches_every_action() {
    let state = reduce(
        ViewState::loading(),
        ViewAction::Loaded(Directory {
            people: numbered(25),
            refs: ClassificationRefs::default(),
        }),
    );
    let state = reduce(state, ViewAction::PageForward);
    assert_eq!(state.window(), Window::new(10, 20));
    let state = reduce(state, ViewAction::PageBackward);
    assert_eq!(state.window(), Window::new(0, 10));
    let state = reduce(state, ViewAction::SetSort(SortMode::Descending));
    assert_eq!(state.sort(), SortMode::Descending);
    let state = reduce(state, ViewAction::SetFilter("024".to_string()));
    assert_eq!(names(&state.visible()), vec!["Person 024"]);
}
