use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rupal::cse::Machine;
use rupal::fmt::{render_value, tree_to_string};
use rupal::{lexer, parser, standardize};

/// Interpreter for the RPAL functional language.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Print the source listing
    #[arg(short = 'l')]
    listing: bool,

    /// Print the raw syntax tree
    #[arg(long)]
    ast: bool,

    /// Print the standardized tree
    #[arg(long)]
    st: bool,

    /// Program file to run
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    if args.listing {
        print!("{source}");
        if !source.ends_with('\n') {
            println!();
        }
    }

    let tokens = lexer::lex(&source)?;
    let raw = parser::parse(tokens)?;
    if args.ast {
        print!("{}", tree_to_string(&raw));
    }

    let standardized = standardize::standardize(raw);
    if args.st {
        print!("{}", tree_to_string(&standardized));
    }

    // The flags ask for artifacts of the front-end passes only.
    if args.listing || args.ast || args.st {
        return Ok(());
    }

    let result = Machine::new(&standardized).run()?;
    let rendered = render_value(&result);
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}
