use std::path::PathBuf;

use admitbot::Strategy;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "admitbot",
    about = "A college admissions assistant for prospective students"
)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable simulated service latency
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a single question
    Ask(AskArgs),
    /// Show how knowledge entries score against a query
    Rank(RankArgs),
    /// Show the best FAQ match for a query
    Faq(FaqArgs),
    /// Call the simulated generation service directly
    Generate(GenerateArgs),
    /// Inspect the knowledge catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Start an interactive chat session
    Chat(ChatArgs),
    /// Start MCP server for AI agent integration
    Mcp,
    /// Inspect the resolved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Ask --

#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question to answer
    pub query: String,

    /// Answer strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::default())]
    pub strategy: Strategy,

    /// Output the answer with its sources as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Rank --

#[derive(Debug, Parser)]
pub struct RankArgs {
    /// The query to score entries against
    pub query: String,

    /// Number of results to return (default: all matches)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// -- FAQ --

#[derive(Debug, Parser)]
pub struct FaqArgs {
    /// The query to match against the FAQ set
    pub query: String,

    /// Output the match as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Generate --

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Input text of the generation request
    #[arg(short, long)]
    pub input: String,

    /// Context the service dispatches on
    #[arg(short, long)]
    pub context: Option<String>,

    /// Output the full response as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Catalog --

#[derive(Debug, Subcommand)]
pub enum CatalogAction {
    /// List all knowledge entries
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one knowledge entry
    Show {
        /// Entry id
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

// -- Chat --

#[derive(Debug, Parser)]
pub struct ChatArgs {
    /// Answer strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::default())]
    pub strategy: Strategy,
}

// -- Config --

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration as JSON
    Show,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "admitbot",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_ask_defaults() {
        let cli = Cli::parse_from(["admitbot", "ask", "When is the deadline?"]);
        assert!(!cli.no_delay);
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.query, "When is the deadline?");
                assert_eq!(args.strategy, Strategy::KnowledgeStoreRag);
                assert!(!args.json);
            }
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn parse_strategy_names() {
        for (name, expected) in [
            ("faq", Strategy::FaqKeyword),
            ("rag", Strategy::KnowledgeStoreRag),
            ("context", Strategy::ContextDispatch),
        ] {
            let cli = Cli::parse_from(["admitbot", "chat", "--strategy", name]);
            match cli.command {
                Command::Chat(args) => assert_eq!(args.strategy, expected),
                _ => panic!("expected chat command"),
            }
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "admitbot",
            "generate",
            "--input",
            "hi",
            "--no-delay",
            "--config",
            "/tmp/admitbot.json",
            "-vv",
        ]);
        assert!(cli.no_delay);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/admitbot.json")));
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.input, "hi");
                assert!(args.context.is_none());
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn rejects_unknown_strategy() {
        let result =
            Cli::try_parse_from(["admitbot", "ask", "hi", "--strategy", "llm"]);
        assert!(result.is_err());
    }

    #[test]
    fn catalog_show_takes_id() {
        let cli = Cli::parse_from(["admitbot", "catalog", "show", "4"]);
        match cli.command {
            Command::Catalog {
                action: CatalogAction::Show { id, json },
            } => {
                assert_eq!(id, "4");
                assert!(!json);
            }
            _ => panic!("expected catalog show"),
        }
    }
}
