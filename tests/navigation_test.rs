//! Navigation over real and fake decks: the resolver feeding the navigator,
//! boundary behavior, and category switches.

use training_deck::catalog::Catalog;
use training_deck::models::slide::{Navigator, SlideViewer};

mod common;
use common::{deck, fake_catalog};

#[test]
fn three_slide_deck_stops_at_the_end() {
    let slides = deck("three", 3).slides;
    let mut nav = Navigator::new(&slides);
    nav.next();
    nav.next();
    assert_eq!(nav.current_index(), 2);
    nav.next();
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.current_slide().map(|s| s.id), Some(3));
}

#[test]
fn previous_on_first_slide_is_noop() {
    let slides = deck("three", 3).slides;
    let mut nav = Navigator::new(&slides);
    nav.previous();
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn jump_keeps_position_on_bad_index() {
    let slides = deck("five", 5).slides;
    let mut nav = Navigator::new(&slides);
    nav.jump_to(3);
    assert_eq!(nav.current_index(), 3);
    nav.jump_to(10);
    assert_eq!(nav.current_index(), 3);
}

#[test]
fn jump_sets_index_iff_in_range() {
    let slides = deck("five", 5).slides;
    for target in 0..12 {
        let mut nav = Navigator::new(&slides);
        nav.jump_to(2);
        let moved = nav.jump_to(target);
        assert_eq!(moved, target < slides.len());
        let expected = if target < slides.len() { target } else { 2 };
        assert_eq!(nav.current_index(), expected, "target {target}");
    }
}

#[test]
fn unknown_category_has_no_current_slide() {
    let catalog = fake_catalog();
    let slides = catalog.resolve("unknown-category");
    assert!(slides.is_empty());
    let mut nav = Navigator::new(slides);
    assert!(nav.current_slide().is_none());
    nav.next();
    nav.previous();
    nav.jump_to(0);
    assert!(nav.current_slide().is_none());
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn java_deck_resolves_in_authored_order() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let java = catalog.resolve("java");
    assert!(!java.is_empty());
    let lowest = java.iter().map(|s| s.id).min();
    assert_eq!(Some(java[0].id), lowest);
    assert_eq!(java[0].topic, "Introduction to Java");
}

#[test]
fn switching_categories_starts_over() {
    let catalog = Catalog::from_parts(vec![], vec![deck("twenty", 20), deck("five", 5)])
        .expect("catalog");
    let mut viewer = SlideViewer::open(&catalog, "twenty");
    viewer.navigator_mut().jump_to(15);
    assert_eq!(viewer.navigator().current_index(), 15);

    viewer.change_category(&catalog, "five");
    assert_eq!(viewer.navigator().current_index(), 0);
    assert_ne!(viewer.navigator().current_index(), 4);
    assert_eq!(viewer.navigator().current_slide().map(|s| s.id), Some(1));
}

#[test]
fn every_builtin_deck_walks_end_to_end() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    for course in catalog.courses() {
        let slides = catalog.resolve(&course.id);
        let mut nav = Navigator::new(slides);
        let mut visited = usize::from(nav.current_slide().is_some());
        while nav.next() {
            visited += 1;
        }
        assert_eq!(visited, slides.len(), "{}", course.id);
        while nav.previous() {}
        assert_eq!(nav.current_index(), 0);
    }
}
