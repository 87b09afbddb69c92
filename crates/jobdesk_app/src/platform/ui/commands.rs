use jobdesk_core::{JobId, SortKey};

pub const HELP: &str = "Type to search. Commands: :sort relevance|recent|title, :page N, \
:next, :prev, :open ID, :close, :bookmark ID, :bookmarks, :retry, :params QUERY, :help, :quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search(String),
    Sort(SortKey),
    Page(usize),
    NextPage,
    PreviousPage,
    Open(JobId),
    Close,
    ToggleBookmark(JobId),
    ToggleBookmarksView,
    Retry,
    Params(String),
    Help,
    Quit,
    Invalid(String),
}

/// Plain text is search input; a leading `:` introduces a command.
pub fn parse_line(line: &str) -> UiCommand {
    let Some(command) = line.trim_end_matches(['\r', '\n']).strip_prefix(':') else {
        return UiCommand::Search(line.trim_end_matches(['\r', '\n']).to_string());
    };
    let (name, arg) = match command.trim().split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };

    match name {
        "sort" => SortKey::parse(arg)
            .map(UiCommand::Sort)
            .unwrap_or_else(|| invalid(format!("unknown sort {arg:?}"))),
        "page" => arg
            .parse()
            .map(UiCommand::Page)
            .unwrap_or_else(|_| invalid(format!("bad page {arg:?}"))),
        "next" => UiCommand::NextPage,
        "prev" => UiCommand::PreviousPage,
        "open" => parse_id(arg).map_or_else(invalid, UiCommand::Open),
        "close" => UiCommand::Close,
        "bookmark" => parse_id(arg).map_or_else(invalid, UiCommand::ToggleBookmark),
        "bookmarks" => UiCommand::ToggleBookmarksView,
        "retry" => UiCommand::Retry,
        "params" => UiCommand::Params(arg.to_string()),
        "help" | "h" | "?" => UiCommand::Help,
        "quit" | "q" => UiCommand::Quit,
        other => invalid(format!("unknown command :{other}")),
    }
}

fn parse_id(arg: &str) -> Result<JobId, String> {
    arg.parse().map_err(|_| format!("bad job id {arg:?}"))
}

fn invalid(message: String) -> UiCommand {
    UiCommand::Invalid(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_search_input_verbatim() {
        assert_eq!(parse_line("  Rust Dev\n"), UiCommand::Search("  Rust Dev".into()));
        assert_eq!(parse_line(""), UiCommand::Search(String::new()));
    }

    #[test]
    fn commands_take_arguments() {
        assert_eq!(parse_line(":sort recent"), UiCommand::Sort(SortKey::Recent));
        assert_eq!(parse_line(":page 3"), UiCommand::Page(3));
        assert_eq!(parse_line(":open 42"), UiCommand::Open(42));
        assert_eq!(parse_line(":bookmark 7\r\n"), UiCommand::ToggleBookmark(7));
        assert_eq!(
            parse_line(":params search=go&page=2"),
            UiCommand::Params("search=go&page=2".into())
        );
        assert_eq!(parse_line(":q"), UiCommand::Quit);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(parse_line(":open x"), UiCommand::Invalid(_)));
        assert!(matches!(parse_line(":sort price"), UiCommand::Invalid(_)));
        assert!(matches!(parse_line(":fly"), UiCommand::Invalid(_)));
    }
}
