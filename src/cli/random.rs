use clap::Parser;
use nudge::Document;
use tracing::instrument;

use super::terminal::Style;
use super::{banner, render};

#[derive(Debug, Parser)]
#[command(about = "Print one random unfinished entry and exit")]
pub struct Random {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Random {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, document: &Document, style: &Style) -> anyhow::Result<()> {
        let mut rng = rand::rng();
        let picked = document.pick_unfinished(&mut rng);

        match self.output {
            OutputFormat::Json => {
                let payload = picked.map_or(serde_json::Value::Null, render::entry_json);
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Pretty => {
                style.clear_screen();
                banner::print(style);
                match picked {
                    Some(entry) => render::entry_pretty(document.title(), entry, style),
                    None if document.is_empty() => {
                        println!("{}", style.err("No entries found."));
                    }
                    None => {
                        println!("{}", style.warn("Every entry is already completed!"));
                    }
                }
            }
        }

        Ok(())
    }
}
