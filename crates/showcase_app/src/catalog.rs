//! The in-process project catalog shown by the gallery.

use showcase_core::{Category, Creator, Project};

/// Every showcased work, in gallery order. Loaded once at startup and
/// never mutated afterwards.
pub fn initial_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "AeroLink Smart Tower",
            "A cloud-integrated aeroponic system featuring real-time environmental monitoring \
             and remote nutrient management.",
            Category::Ai,
            &["ai", "iot", "cloud"],
            "https://picsum.photos/seed/neural/800/600",
        ),
        project(
            "2",
            "EtherFlow Dashboard",
            "Real-time blockchain analytics and transaction visualization platform.",
            Category::Crypto,
            &["blockchain", "analytics", "react"],
            "https://picsum.photos/seed/crypto/800/600",
        ),
        project(
            "3",
            "Lumina UI Kit",
            "A comprehensive design system focusing on accessibility and glassmorphism.",
            Category::Design,
            &["design", "accessibility", "figma"],
            "https://picsum.photos/seed/design/800/600",
        ),
        project(
            "4",
            "Aura Social Network",
            "Privacy-first social platform with end-to-end encrypted messaging.",
            Category::Web,
            &["react", "encryption", "web"],
            "https://picsum.photos/seed/social/800/600",
        ),
        project(
            "5",
            "Zenith Fitness Tracker",
            "Predictive health monitoring app using wearable sensor data.",
            Category::Mobile,
            &["mobile", "health", "wearables"],
            "https://picsum.photos/seed/fitness/800/600",
        ),
    ]
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    tags: &[&str],
    image_url: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        image_url: image_url.to_string(),
        demo_url: Some("https://github.com".to_string()),
        github_url: None,
        creator: Some(Creator {
            name: "John Lloyd Tortor".to_string(),
            url: "https://facebook.com".to_string(),
        }),
        stats: None,
    }
}
