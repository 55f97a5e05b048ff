use std::path::PathBuf;

mod banner;
mod list;
mod random;
mod render;
mod session;
mod terminal;

use clap::ArgAction;
use list::List;
use nudge::{Config, Document, ReaderKind, storage::note};
use random::Random;
use session::Session;
use terminal::Style;
use tracing::{debug, warn};

/// Parse a reader kind from a string.
///
/// This is a CLI boundary function; it accepts the short one-letter forms
/// as well as the full names.
fn parse_kind(s: &str) -> Result<ReaderKind, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the checklist note file
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// The reader flavor: t (todo), r (read) or q (ques)
    #[arg(short, long, global = true, value_parser = parse_kind)]
    kind: Option<ReaderKind>,

    /// The path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(|message| anyhow::anyhow!(message))?,
            None => Config::default(),
        };

        let kind = self.kind.or(config.kind);
        let style = Style::detect(kind, config.color);

        // A missing path is a fatal startup condition; nothing else is
        // attempted.
        let path = self.file.or(config.default_file).ok_or_else(|| {
            anyhow::anyhow!("no note file given (pass --file or set default_file in the config)")
        })?;
        let path = std::path::absolute(&path)?;
        anyhow::ensure!(path.exists(), "note file does not exist: {}", path.display());

        // Read failures past this point degrade to an empty document so the
        // session itself stays alive.
        let document = match note::load(&path) {
            Ok(document) => document,
            Err(error) => {
                warn!(%error, path = %path.display(), "failed to load note");
                eprintln!("{}", style.err(&format!("Could not parse note: {error}")));
                Document::new(note::title_of(&path), Vec::new())
            }
        };
        debug!(entries = document.entries().len(), "note loaded");

        self.command
            .unwrap_or_else(|| Command::Session(Session::default()))
            .run(&document, &style)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Browse entries interactively (default)
    Session(Session),

    /// Print one random unfinished entry and exit
    Random(Random),

    /// Print every entry and exit
    List(List),
}

impl Command {
    fn run(self, document: &Document, style: &Style) -> anyhow::Result<()> {
        match self {
            Self::Session(command) => command.run(document, style),
            Self::Random(command) => command.run(document, style),
            Self::List(command) => command.run(document, style),
        }
    }
}
