use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use ruparsec::fmt::stringify_forest;
use ruparsec::grammar::{BracketGrammar, ExpressionGrammar, JsonGrammar};
use ruparsec::parser::{DEFAULT_MAX_DEPTH, ParseConfig};

#[derive(Parser)]
#[command(name = "ruparsec", version, about = "Parse text with the bundled grammars")]
struct Cli {
    /// How deeply recursive rules may nest before the parse is aborted
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a JSON document and print it re-encoded
    Json {
        /// File to read; stdin when omitted
        path: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Parse an arithmetic expression and print it fully parenthesized
    Expr {
        source: String,

        /// Print the syntax tree instead
        #[arg(long)]
        tree: bool,
    },
    /// Parse nested `[` `]` groups and print them back
    Brackets { source: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ParseConfig::new().with_max_depth(cli.max_depth);

    match cli.command {
        Command::Json { path, pretty } => {
            let input = match &path {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => io::read_to_string(io::stdin()).context("failed to read stdin")?,
            };
            let value = JsonGrammar::new()?.parse_with(&input, config)?;
            if pretty {
                println!("{}", value.to_pretty_string());
            } else {
                println!("{value}");
            }
        }
        Command::Expr { source, tree } => {
            let expr = ExpressionGrammar::new()?
                .parse_with(&source, config)
                .with_context(|| format!("failed to parse `{source}`"))?;
            if tree {
                println!("{expr:#?}");
            } else {
                println!("{expr}");
            }
        }
        Command::Brackets { source } => {
            let forest = BracketGrammar::new()?.parse_with(&source, config)?;
            let groups: usize = forest.iter().map(|group| group.count()).sum();
            let depth = forest.iter().map(|group| group.depth()).max().unwrap_or(0);
            println!("{}", stringify_forest(&forest));
            println!("{groups} groups, nested {depth} deep");
        }
    }

    Ok(())
}
