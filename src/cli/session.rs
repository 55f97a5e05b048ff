use std::io::{self, BufRead};

use clap::Parser;
use nudge::{Document, Entry};
use tracing::{instrument, warn};

use super::terminal::Style;
use super::{banner, render};

#[derive(Debug, Default, Parser)]
#[command(about = "Browse entries interactively (default)")]
pub struct Session {}

/// A parsed interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// `n` - show the next random suggestion.
    Next,
    /// `o` - open the parent link.
    OpenParent,
    /// `o<N>` - open the N-th sub-item link (1-based).
    OpenChild(usize),
    /// `l` - list every entry.
    List,
    /// `q` - quit the session.
    Quit,
    /// An `o` suffix that is not a number.
    Malformed,
    /// Anything else.
    Unknown,
}

/// Parses one line of user input. Commands are case-insensitive and
/// surrounding whitespace is ignored.
fn parse_input(line: &str) -> Input {
    let command = line.trim().to_lowercase();
    match command.as_str() {
        "n" => Input::Next,
        "o" => Input::OpenParent,
        "l" => Input::List,
        "q" => Input::Quit,
        other => match other.strip_prefix('o') {
            Some(suffix) if !suffix.is_empty() => suffix
                .parse::<usize>()
                .map_or(Input::Malformed, Input::OpenChild),
            _ => Input::Unknown,
        },
    }
}

impl Session {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, document: &Document, style: &Style) -> anyhow::Result<()> {
        let mut rng = rand::rng();

        let Some(mut current) = document.pick_unfinished(&mut rng) else {
            style.clear_screen();
            banner::print(style);
            if document.is_empty() {
                println!("{}", style.err("No entries found."));
            } else {
                println!("{}", style.warn("Every entry is already completed!"));
            }
            return Ok(());
        };

        show_entry(document, current, style);

        let stdin = io::stdin();
        loop {
            print_menu(current, style);
            eprint!("\n{} ", style.ok("command:"));

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // End of input behaves like quit so piped sessions terminate.
                println!();
                break;
            }

            match parse_input(&line) {
                Input::Next => {
                    if let Some(next) = document.pick_unfinished(&mut rng) {
                        current = next;
                        show_entry(document, current, style);
                    } else {
                        println!("{}", style.warn("Every entry is already completed!"));
                    }
                }
                Input::OpenParent => match current.parent.url() {
                    Some(url) => open_url(url, None, style),
                    None => println!("{}", style.warn("This entry has no link to open.")),
                },
                Input::OpenChild(number) => {
                    let links = current.child_links();
                    match number.checked_sub(1).and_then(|index| links.get(index)) {
                        Some(link) => open_url(&link.url, Some(number), style),
                        None => println!("{}", style.err("Invalid sub-item index.")),
                    }
                }
                Input::List => {
                    style.clear_screen();
                    banner::print(style);
                    render::list_pretty(document, style);

                    eprint!("\n{} ", style.ok("Press Enter to return..."));
                    let mut pause = String::new();
                    stdin.lock().read_line(&mut pause)?;

                    show_entry(document, current, style);
                }
                Input::Quit => {
                    println!("\n{}", style.warn("Goodbye!"));
                    break;
                }
                Input::Malformed => println!("{}", style.err("Invalid command format.")),
                Input::Unknown => println!("{}", style.err("Invalid command, try again.")),
            }
        }

        Ok(())
    }
}

fn show_entry(document: &Document, entry: &Entry, style: &Style) {
    style.clear_screen();
    banner::print(style);
    render::entry_pretty(document.title(), entry, style);
}

/// Prints the command menu, hiding open commands that cannot apply to the
/// current entry.
fn print_menu(entry: &Entry, style: &Style) {
    println!("\n{}", style.ok("Commands"));
    println!("  {} - next suggestion", style.ok("n"));
    if entry.parent.url().is_some() {
        println!("  {} - open the entry link", style.ok("o"));
    }
    if !entry.child_links().is_empty() {
        println!(
            "  {}, {}... - open a sub-item link",
            style.ok("o1"),
            style.ok("o2")
        );
    }
    println!("  {} - list all entries", style.ok("l"));
    println!("  {} - quit", style.ok("q"));
}

/// Hands a URL to the OS browser opener. Failures are reported and never
/// end the session.
fn open_url(url: &str, number: Option<usize>, style: &Style) {
    match open::that(url) {
        Ok(()) => match number {
            Some(number) => println!(
                "{}",
                style.ok(&format!("Opened sub-item {number} link in the browser."))
            ),
            None => println!("{}", style.ok("Opened link in the browser.")),
        },
        Err(error) => {
            warn!(%error, url, "failed to launch browser");
            println!("{}", style.err(&format!("Could not open link: {error}")));
        }
    }
}
