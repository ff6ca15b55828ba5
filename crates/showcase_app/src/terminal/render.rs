use showcase_core::{AppViewModel, CategoryFilter, ChatMessage, ChatRole, ChatViewModel, Project};

/// Formats the filtered gallery as printable lines.
pub fn render_gallery(view: &AppViewModel) -> Vec<String> {
    let heading = match view.selected_category {
        CategoryFilter::All => "All Projects".to_string(),
        CategoryFilter::Only(category) => category.label().to_string(),
    };
    let mut lines = if view.search_query.is_empty() {
        vec![format!("{heading} ({})", view.visible_projects.len())]
    } else {
        vec![format!(
            "{heading}, matching \"{}\" ({})",
            view.search_query,
            view.visible_projects.len()
        )]
    };

    if view.visible_projects.is_empty() {
        lines.push("No projects found. Try adjusting your search or filters.".to_string());
        return lines;
    }

    for project in &view.visible_projects {
        lines.push(format_project_row(project));
    }
    lines
}

fn format_project_row(project: &Project) -> String {
    if project.tags.is_empty() {
        format!(
            "[{id}] {title} ({category}) - {description}",
            id = project.id,
            title = project.title,
            category = project.category,
            description = project.description
        )
    } else {
        format!(
            "[{id}] {title} ({category}; {tags}) - {description}",
            id = project.id,
            title = project.title,
            category = project.category,
            tags = project.tags.join(", "),
            description = project.description
        )
    }
}

/// Formats the whole transcript, newest last.
pub fn render_chat(chat: &ChatViewModel) -> Vec<String> {
    let mut lines: Vec<String> = chat.messages.iter().map(format_message).collect();
    if chat.sending {
        lines.push(TYPING_INDICATOR.to_string());
    }
    lines
}

/// Formats just the newest message, for reveal-on-change printing.
pub fn chat_tail(chat: &ChatViewModel) -> Vec<String> {
    let mut lines: Vec<String> = chat.messages.last().map(format_message).into_iter().collect();
    if chat.sending {
        lines.push(TYPING_INDICATOR.to_string());
    }
    lines
}

const TYPING_INDICATOR: &str = "assistant> ...";

fn format_message(message: &ChatMessage) -> String {
    match message.role {
        ChatRole::User => format!("you> {}", message.text),
        ChatRole::Model => format!("assistant> {}", message.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::Category;

    fn project(id: &str, title: &str, category: Category, tags: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: "desc".to_string(),
            category,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            image_url: String::new(),
            demo_url: None,
            github_url: None,
            creator: None,
            stats: None,
        }
    }

    #[test]
    fn empty_gallery_shows_the_empty_state_line() {
        let view = AppViewModel {
            search_query: "zzz".to_string(),
            ..AppViewModel::default()
        };

        let lines = render_gallery(&view);
        assert_eq!(lines[0], "All Projects, matching \"zzz\" (0)");
        assert_eq!(
            lines[1],
            "No projects found. Try adjusting your search or filters."
        );
    }

    #[test]
    fn gallery_rows_carry_category_and_tags() {
        let view = AppViewModel {
            visible_projects: vec![project("2", "EtherFlow Dashboard", Category::Crypto, &[
                "blockchain",
            ])],
            ..AppViewModel::default()
        };

        let lines = render_gallery(&view);
        assert_eq!(lines[0], "All Projects (1)");
        assert_eq!(
            lines[1],
            "[2] EtherFlow Dashboard (Blockchain; blockchain) - desc"
        );
    }

    #[test]
    fn transcript_marks_speakers_and_typing() {
        let chat = ChatViewModel {
            messages: vec![
                ChatMessage {
                    role: ChatRole::Model,
                    text: "Hi!".to_string(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    text: "hello".to_string(),
                },
            ],
            sending: true,
        };

        assert_eq!(
            render_chat(&chat),
            vec!["assistant> Hi!", "you> hello", "assistant> ..."]
        );
        assert_eq!(chat_tail(&chat), vec!["you> hello", "assistant> ..."]);
    }
}
