use showcase_core::{visible_projects, Category, CategoryFilter, FilterState, Project};

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

fn ids(visible: &[&Project]) -> Vec<String> {
    visible.iter().map(|project| project.id.clone()).collect()
}

#[test]
fn all_and_empty_query_returns_full_list() {
    let projects = fixture();
    let visible = visible_projects(&projects, &FilterState::default());

    assert_eq!(visible.len(), projects.len());
    assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn category_selects_the_single_ai_project() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::Only(Category::Ai),
        ..FilterState::default()
    };

    let visible = visible_projects(&projects, &filter);
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn both_criteria_apply_together() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::Only(Category::Crypto),
        search_query: "dashboard".to_string(),
    };
    assert_eq!(ids(&visible_projects(&projects, &filter)), vec!["2"]);

    // Same query under a category it does not belong to: nothing matches.
    let filter = FilterState {
        selected_category: CategoryFilter::Only(Category::Ai),
        search_query: "dashboard".to_string(),
    };
    assert!(visible_projects(&projects, &filter).is_empty());
}

#[test]
fn dashboard_query_selects_etherflow() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::All,
        search_query: "dashboard".to_string(),
    };

    let visible = visible_projects(&projects, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "EtherFlow Dashboard");
}

#[test]
fn query_matches_tags_case_insensitively() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::All,
        search_query: "REACT".to_string(),
    };

    // "REACT" must find the project tagged "react".
    assert_eq!(ids(&visible_projects(&projects, &filter)), vec!["4"]);
}

#[test]
fn query_matches_titles_case_insensitively() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::All,
        search_query: "eThErFlOw".to_string(),
    };

    assert_eq!(ids(&visible_projects(&projects, &filter)), vec!["2"]);
}

#[test]
fn unmatched_query_yields_empty_set() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::All,
        search_query: "quantum mainframe".to_string(),
    };

    // An empty gallery is a valid outcome, not an error.
    assert!(visible_projects(&projects, &filter).is_empty());
}

#[test]
fn result_preserves_source_order() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::All,
        search_query: "er".to_string(),
    };

    // Matches in titles only ("Tower", "EtherFlow", "Tracker"), in the
    // order the catalog lists them.
    assert_eq!(ids(&visible_projects(&projects, &filter)), vec!["1", "2", "5"]);
}

#[test]
fn filtering_is_idempotent() {
    let projects = fixture();
    let filter = FilterState {
        selected_category: CategoryFilter::Only(Category::Web),
        search_query: "react".to_string(),
    };

    let first = visible_projects(&projects, &filter);
    let second = visible_projects(&projects, &filter);
    assert_eq!(first, second);
}
