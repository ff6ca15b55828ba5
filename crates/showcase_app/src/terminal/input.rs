use showcase_core::{Category, CategoryFilter, Msg};

/// What one line of terminal input asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed these messages through the core update loop.
    Dispatch(Vec<Msg>),
    /// Print the filtered gallery.
    ShowProjects,
    /// Print the chat transcript.
    ShowChat,
    /// Print the command summary.
    Help,
    /// Leave the app.
    Quit,
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Dispatch(Vec::new());
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "projects" => Command::ShowProjects,
        "chat" => Command::ShowChat,
        "all" => Command::Dispatch(vec![Msg::CategorySelected(CategoryFilter::All)]),
        "category" => match parse_category(rest) {
            Some(category) => {
                Command::Dispatch(vec![Msg::CategorySelected(CategoryFilter::Only(category))])
            }
            None => Command::Help,
        },
        "search" => Command::Dispatch(vec![Msg::SearchChanged(rest.to_string())]),
        "clear" => Command::Dispatch(vec![Msg::SearchChanged(String::new())]),
        // The widget's submit handler: stage the draft, then submit it.
        "say" => Command::Dispatch(vec![
            Msg::ChatInputChanged(rest.to_string()),
            Msg::ChatSubmitted,
        ]),
        _ => Command::Help,
    }
}

fn parse_category(word: &str) -> Option<Category> {
    match word.to_ascii_lowercase().as_str() {
        "web" => Some(Category::Web),
        "mobile" => Some(Category::Mobile),
        "ai" => Some(Category::Ai),
        "design" => Some(Category::Design),
        "crypto" | "blockchain" => Some(Category::Crypto),
        _ => None,
    }
}

pub const HELP: &[&str] = &[
    "commands:",
    "  all                 show every category",
    "  category <name>     filter by category (web, mobile, ai, design, crypto)",
    "  search <text>       filter by title or tag",
    "  clear               clear the search query",
    "  say <text>          ask the assistant",
    "  projects            print the filtered gallery",
    "  chat                print the chat transcript",
    "  quit                exit",
];
