use crate::project::{Category, Project};

/// Category criterion: one concrete category, or no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// The pair of active filter criteria for the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub selected_category: CategoryFilter,
    pub search_query: String,
}

/// Pure filter: the ordered subsequence of `projects` matching `filter`.
///
/// A project is visible when its category matches the selection (or the
/// selection is `All`) and its title or any of its tags contains the search
/// query, case-insensitively. An empty query matches everything. An empty
/// result is a normal outcome, not an error.
pub fn visible_projects<'a>(projects: &'a [Project], filter: &FilterState) -> Vec<&'a Project> {
    let query = filter.search_query.to_lowercase();
    projects
        .iter()
        .filter(|project| matches_category(project, filter.selected_category))
        .filter(|project| matches_query(project, &query))
        .collect()
}

fn matches_category(project: &Project, selected: CategoryFilter) -> bool {
    match selected {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => project.category == category,
    }
}

// `query` is already lowercased by the caller.
fn matches_query(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(query)
        || project.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}
