use std::fmt;

/// Fixed enumeration of portfolio categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Web,
    Mobile,
    Ai,
    Design,
    Crypto,
}

impl Category {
    /// Every category, in the order the gallery lists them.
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Mobile,
        Category::Ai,
        Category::Design,
        Category::Crypto,
    ];

    /// Human-readable label shown on the filter chips.
    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web Development",
            Category::Mobile => "Mobile Apps",
            Category::Ai => "Artificial Intelligence",
            Category::Design => "UI/UX Design",
            Category::Crypto => "Blockchain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectStats {
    pub stars: Option<u32>,
    pub forks: Option<u32>,
    pub views: Option<u32>,
}

/// One showcased work. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub creator: Option<Creator>,
    pub stats: Option<ProjectStats>,
}
