use clap::{error, ArgMatches, Command, Parser};
use reedline::{Reedline, Signal};

mod prompt;
use prompt::ShellPrompt;

mod cmds {
    pub(crate) mod contact_cmd;
    pub(crate) mod page_cmd;
}

use yellowpage::{
    configuration as cfg,
    Contact,
    ContactChange,
    ContactId,
    DraftContact,
    HasMore,
    Partitioned,
    Phonebook,
};

fn build_cli() -> Command {
    let mut cmd = Command::new("yellowpage")
        .about("Interactive phonebook shell application")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::page_cmd::list_cli())
        .subcommand(cmds::page_cmd::search_cli())
        .subcommand(cmds::page_cmd::next_cli())
        .subcommand(cmds::page_cmd::prev_cli())
        .subcommand(cmds::contact_cmd::show_cli())
        .subcommand(cmds::contact_cmd::add_cli())
        .subcommand(cmds::contact_cmd::rename_cli())
        .subcommand(cmds::contact_cmd::remove_cli())
        .subcommand(cmds::contact_cmd::fav_cli())
        .help_template("{subcommands}");

    cmd.error(error::ErrorKind::InvalidSubcommand, "Invalid command provided");
    cmd
}

fn parse_id(m: &ArgMatches) -> Option<ContactId> {
    let input = m.get_one::<String>("ID").unwrap();
    match input.parse::<ContactId>() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("Error: invalid contact id: {}", input);
            None
        }
    }
}

fn print_card(c: &Contact, pinned: bool) {
    let mark = if pinned { "*" } else { " " };
    println!(" {}[{}] {}  {}",
        mark,
        c.id(),
        c.display_name(),
        c.primary_number().unwrap_or("-")
    );
}

fn print_page(book: &Phonebook, page: &Partitioned) {
    if !page.favorites().is_empty() {
        println!("Favorites:");
        for c in page.favorites() {
            print_card(c, true);
        }
    }

    match book.search() {
        Some(query) => println!("Contacts matching '{}' (page {}):", query, book.page()),
        None => println!("Contacts (page {}):", book.page()),
    }

    if page.remaining().is_empty() {
        println!("  (none)");
    }
    for c in page.remaining() {
        print_card(c, false);
    }

    if book.has_more() == HasMore::Likely {
        println!("More contacts may follow; type 'next'.");
    }
}

async fn show_page(book: &mut Phonebook) {
    match book.load_page().await {
        Ok(page) => print_page(book, &page),
        Err(e) => println!("Error loading contacts: {}", e),
    }
}

async fn execute_command(matches: ArgMatches, book: &mut Phonebook) {
    match matches.subcommand() {
        Some(("list", _)) => {
            show_page(book).await;
        }

        Some(("search", m)) => {
            match m.get_one::<String>("QUERY") {
                Some(query) => book.set_search(query),
                None => book.clear_search(),
            }
            show_page(book).await;
        }

        Some(("next", _)) => {
            match book.next_page() {
                true => show_page(book).await,
                false => println!("No more pages."),
            }
        }

        Some(("prev", _)) => {
            match book.prev_page() {
                true => show_page(book).await,
                false => println!("Already at the first page."),
            }
        }

        Some(("show", m)) => {
            let Some(id) = parse_id(m) else {
                return;
            };

            match book.detail(id).await {
                Ok(Some(contact)) => {
                    println!("Name: {}", contact.display_name());
                    let count = contact.phones().len();
                    for (idx, phone) in contact.phones().iter().enumerate() {
                        match count > 1 {
                            true  => println!("Number {}: {}", idx + 1, phone.number()),
                            false => println!("Number: {}", phone.number()),
                        }
                    }
                    println!("People added at {}", contact.created_display());
                }
                Ok(None) => println!("No contact found with id: {}", id),
                Err(e) => println!("Error fetching contact: {}", e),
            }
        }

        Some(("add", m)) => {
            let mut draft = DraftContact::new();
            draft.set_first_name(m.get_one::<String>("FIRST").unwrap());
            if let Some(last) = m.get_one::<String>("LAST") {
                draft.set_last_name(last);
            }
            if let Some(numbers) = m.get_many::<String>("number") {
                for (idx, number) in numbers.enumerate() {
                    if idx > 0 {
                        draft.add_number_field();
                    }
                    draft.set_number(idx, number);
                }
            }

            match book.save(&mut draft).await {
                Ok(Some(contact)) => {
                    println!("Contact created: {} [{}]", contact.display_name(), contact.id());
                }
                Ok(None) => {
                    println!("{}", draft.error().unwrap_or("Invalid contact"));
                }
                Err(e) => println!("Error creating contact: {}", e),
            }
        }

        Some(("rename", m)) => {
            let Some(id) = parse_id(m) else {
                return;
            };

            let mut change = ContactChange::new();
            if let Some(first) = m.get_one::<String>("first") {
                change.with_first_name(first);
            }
            if let Some(last) = m.get_one::<String>("last") {
                change.with_last_name(last);
            }
            if change.is_empty() {
                println!("Nothing to change; pass --first or --last.");
                return;
            }

            match book.rename(id, &change).await {
                Ok(contact) => println!("Contact renamed: {}", contact.display_name()),
                Err(e) => println!("Error renaming contact: {}", e),
            }
        }

        Some(("remove", m)) => {
            let Some(id) = parse_id(m) else {
                return;
            };

            match book.remove(id).await {
                Ok(id) => println!("Contact {} is deleted.", id),
                Err(e) => println!("Error deleting contact: {}", e),
            }
        }

        Some(("fav", m)) => {
            let Some(id) = parse_id(m) else {
                return;
            };

            match book.toggle_favorite(id) {
                true  => println!("Contact {} pinned to favorites.", id),
                false => println!("Contact {} unpinned.", id),
            }
        }

        _ => println!("Unknown command"),
    }
}

#[derive(Parser, Debug)]
#[command(name = "yellowpage")]
#[command(version = "0.1")]
#[command(about = "YellowPage interactive phonebook shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();
    let cfg = cfg::Builder::new()
        .load(opts.config.as_ref().map_or("default.conf", |v| &v))
        .and_then(|b| b.build());

    let cfg = match cfg {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Loading configuration error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    let mut book = match Phonebook::new(&cfg) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating phonebook session error: {e}");
            return;
        }
    };

    let mut cli = build_cli();
    let mut rl = Reedline::create();
    let prompt = ShellPrompt;

    println!("Welcome to the YellowPage phonebook shell. Type 'exit' to quit.\n");

    loop {
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();

                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace().map(|s| s.to_string())
                    .collect();

                if args.len() > 1 && args[0] == "help" {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let cmd = args.join(" ");
                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &mut book).await,
                    Err(_) => {
                        println!("Error: command not found: '{}'", cmd);
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }
}
