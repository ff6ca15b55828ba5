use std::sync::Once;

use showcase_core::{update, AppState, Category, CategoryFilter, Msg, Project};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn project(id: &str, title: &str, category: Category, tags: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        image_url: format!("https://picsum.photos/seed/{id}/800/600"),
        demo_url: None,
        github_url: None,
        creator: None,
        stats: None,
    }
}

fn fixture() -> Vec<Project> {
    vec![
        project("1", "AeroLink Smart Tower", Category::Ai, &["ai", "iot", "cloud"]),
        project(
            "2",
            "EtherFlow Dashboard",
            Category::Crypto,
            &["blockchain", "analytics"],
        ),
        project(
            "3",
            "Lumina UI Kit",
            Category::Design,
            &["design", "accessibility"],
        ),
        project(
            "4",
            "Aura Social Network",
            Category::Web,
            &["react", "encryption"],
        ),
        project(
            "5",
            "Zenith Fitness Tracker",
            Category::Mobile,
            &["mobile", "health"],
        ),
    ]
}

#[test]
fn category_selection_narrows_the_gallery() {
    init_logging();
    let state = AppState::new(fixture());

    let (mut state, effects) = update(
        state,
        Msg::CategorySelected(CategoryFilter::Only(Category::Ai)),
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.visible_projects.len(), 1);
    assert_eq!(view.visible_projects[0].title, "AeroLink Smart Tower");
    assert_eq!(view.selected_category, CategoryFilter::Only(Category::Ai));
}

#[test]
fn search_narrows_the_gallery() {
    init_logging();
    let state = AppState::new(fixture());

    let (mut state, effects) = update(state, Msg::SearchChanged("dashboard".to_string()));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.visible_projects.len(), 1);
    assert_eq!(view.visible_projects[0].title, "EtherFlow Dashboard");
}

#[test]
fn clearing_the_search_restores_the_gallery() {
    init_logging();
    let state = AppState::new(fixture());
    let (state, _) = update(state, Msg::SearchChanged("dashboard".to_string()));

    let (state, _) = update(state, Msg::SearchChanged(String::new()));

    assert_eq!(state.view().visible_projects.len(), 5);
}

#[test]
fn reselecting_the_same_category_does_not_mark_dirty() {
    init_logging();
    let state = AppState::new(fixture());
    let (mut state, _) = update(
        state,
        Msg::CategorySelected(CategoryFilter::Only(Category::Web)),
    );
    assert!(state.consume_dirty());

    let (mut next, effects) = update(
        state,
        Msg::CategorySelected(CategoryFilter::Only(Category::Web)),
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn empty_gallery_is_a_valid_view() {
    init_logging();
    let state = AppState::new(fixture());

    let (state, _) = update(state, Msg::SearchChanged("no such project".to_string()));

    assert!(state.view().visible_projects.is_empty());
}
