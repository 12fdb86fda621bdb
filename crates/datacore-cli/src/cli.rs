//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Datacore: stateless text analysis
#[derive(Parser)]
#[command(name = "datacore")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one operation over an input and print the result record
    Process {
        #[command(flatten)]
        source: InputArgs,

        /// Operation tag (analyze, validate, transform, summarize, extract)
        #[arg(short, long, default_value = "analyze")]
        operation: String,

        #[command(flatten)]
        processor: ProcessorArgs,

        /// Pretty-print the JSON record
        #[arg(long)]
        pretty: bool,
    },

    /// Run every operation over an input
    Report {
        #[command(flatten)]
        source: InputArgs,

        #[command(flatten)]
        processor: ProcessorArgs,

        /// Pretty-print the JSON records
        #[arg(long)]
        pretty: bool,
    },

    /// Keyword, sentiment, entity, summary and language views of a text
    Nlp {
        #[command(flatten)]
        source: InputArgs,

        /// Which view to print
        #[arg(long, default_value = "all")]
        view: NlpView,

        /// Number of keywords
        #[arg(long, default_value = "10")]
        top_n: usize,

        /// Maximum summary length in characters
        #[arg(long, default_value = "100")]
        max_length: usize,
    },

    /// Serve the processor over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        #[command(flatten)]
        processor: ProcessorArgs,
    },
}

/// Where the input comes from. With neither TEXT nor --file, stdin is read.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Input text
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the input from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Decode the input as JSON; a JSON string stays text, anything else is structured
    #[arg(long)]
    pub json: bool,
}

/// Processor configuration overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct ProcessorArgs {
    /// JSON file with processor configuration
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Character count above which validation warns about size
    #[arg(long)]
    pub large_threshold: Option<usize>,

    /// Entries in the most-common-words list
    #[arg(long)]
    pub top_words: Option<usize>,

    /// Omit processed_at timestamps
    #[arg(long)]
    pub no_timestamp: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NlpView {
    #[default]
    All,
    Tokens,
    Keywords,
    Sentiment,
    Entities,
    Summary,
    Language,
}

impl std::str::FromStr for NlpView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(NlpView::All),
            "tokens" | "tokenize" => Ok(NlpView::Tokens),
            "keywords" => Ok(NlpView::Keywords),
            "sentiment" => Ok(NlpView::Sentiment),
            "entities" => Ok(NlpView::Entities),
            "summary" => Ok(NlpView::Summary),
            "language" | "lang" => Ok(NlpView::Language),
            _ => Err(format!(
                "Unknown view: {}. Use all, tokens, keywords, sentiment, entities, summary, or language.",
                s
            )),
        }
    }
}

impl std::fmt::Display for NlpView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NlpView::All => write!(f, "all"),
            NlpView::Tokens => write!(f, "tokens"),
            NlpView::Keywords => write!(f, "keywords"),
            NlpView::Sentiment => write!(f, "sentiment"),
            NlpView::Entities => write!(f, "entities"),
            NlpView::Summary => write!(f, "summary"),
            NlpView::Language => write!(f, "language"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_process_defaults_to_analyze() {
        let cli = Cli::try_parse_from(["datacore", "process", "hello"]).unwrap();
        match cli.command {
            Commands::Process { source, operation, .. } => {
                assert_eq!(operation, "analyze");
                assert_eq!(source.text.as_deref(), Some("hello"));
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_nlp_view_parsing() {
        assert_eq!("LANG".parse::<NlpView>().unwrap(), NlpView::Language);
        assert!("nope".parse::<NlpView>().is_err());
    }
}
