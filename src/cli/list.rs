use clap::Parser;
use nudge::Document;
use tracing::instrument;

use super::terminal::Style;
use super::{banner, render};

#[derive(Debug, Parser)]
#[command(about = "Print every entry and exit")]
pub struct List {
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

impl List {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, document: &Document, style: &Style) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => {
                let payload = render::document_json(document);
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Pretty => {
                style.clear_screen();
                banner::print(style);
                render::list_pretty(document, style);
            }
        }

        Ok(())
    }
}
