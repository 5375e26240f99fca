use clap::{arg, Command};

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("List favorites and the current page of contacts")
}

pub(crate) fn search_cli() -> Command {
    Command::new("search")
        .about("Filter contacts by first name; no query clears the filter")
        .arg(arg!([QUERY] "The search text"))
}

pub(crate) fn next_cli() -> Command {
    Command::new("next")
        .about("Go to the next page of contacts")
}

pub(crate) fn prev_cli() -> Command {
    Command::new("prev")
        .about("Go to the previous page of contacts")
}
