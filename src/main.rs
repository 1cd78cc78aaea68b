use clap::Parser;
use triage_faq::cli::{Cli, Commands};
use triage_faq::search::detect_intents;
use triage_faq::{Corpus, FaqSearch};

fn main() -> anyhow::Result<()> {
    triage_faq::tracing::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            query,
            limit,
            data,
            debug,
        } => {
            let loaded;
            let corpus = match data {
                Some(path) => {
                    loaded = Corpus::load(&path);
                    &loaded
                }
                None => Corpus::shared(),
            };

            let mut results = FaqSearch::new(corpus).search(&query, limit);
            if !debug {
                for result in &mut results {
                    result.debug = None;
                }
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Intents { query } => {
            println!("{}", serde_json::to_string(&detect_intents(&query))?);
        }
    }

    Ok(())
}
