use clap::{arg, Arg, ArgAction, Command};

pub(crate) fn show_cli() -> Command {
    Command::new("show")
        .about("Show contact details")
        .arg(arg!(<ID> "The contact id to show"))
        .arg_required_else_help(true)
}

pub(crate) fn add_cli() -> Command {
    Command::new("add")
        .about("Add a new contact")
        .arg(arg!(<FIRST> "The first name"))
        .arg(arg!([LAST] "The last name"))
        .arg(
            Arg::new("number")
                .short('n')
                .long("number")
                .help("A phone number; repeat for multiple numbers")
                .action(ArgAction::Append),
        )
}

pub(crate) fn rename_cli() -> Command {
    Command::new("rename")
        .about("Change a contact's name")
        .arg(arg!(<ID> "The contact id to rename"))
        .arg(arg!(--first <NAME> "The new first name").required(false))
        .arg(arg!(--last <NAME> "The new last name").required(false))
        .arg_required_else_help(true)
}

pub(crate) fn remove_cli() -> Command {
    Command::new("remove")
        .about("Delete a contact")
        .arg(arg!(<ID> "The contact id to delete"))
        .arg_required_else_help(true)
}

pub(crate) fn fav_cli() -> Command {
    Command::new("fav")
        .about("Toggle a contact's favorite mark")
        .arg(arg!(<ID> "The contact id to toggle"))
        .arg_required_else_help(true)
}
