//! Print the distinct combinations or permutations of a string.

use clap::{Parser, Subcommand};
use mset::enumerator::{
    parallel, CombinationPolicy, DerivePolicy, ParallelOptions, PermutationPolicy, Result,
    SequenceEnumerator,
};
use std::io::{self, BufWriter, Write};
use std::process;

#[derive(Parser)]
#[command(name = "mset")]
#[command(about = "Distinct combinations and permutations of a multiset of characters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order-independent selections of K characters
    Combinations(Args),
    /// Order-dependent arrangements of K characters
    Permutations(Args),
}

#[derive(clap::Args)]
struct Args {
    /// The source characters; repeats are allowed
    symbols: String,

    /// Output length
    k: usize,

    /// Only print how many outputs there are
    #[arg(long)]
    count: bool,

    /// Worker threads for --count (default: number of CPUs)
    #[arg(short, long)]
    threads: Option<usize>,
}

fn run<P>(args: &Args) -> Result<()>
where
    P: DerivePolicy + Clone + Default + Send,
{
    if args.count {
        let mut opts = ParallelOptions::new();
        if let Some(threads) = args.threads {
            opts.threads(threads);
        }
        let parts = SequenceEnumerator::<char, P>::partitions(args.symbols.chars(), args.k)?;
        println!("{}", parallel::count(parts, &opts)?);
        return Ok(());
    }

    let iter = SequenceEnumerator::<char, P>::from_chars(&args.symbols, args.k)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for output in iter.strings() {
        // a closed pipe just ends the listing.
        if writeln!(out, "{}", output).is_err() {
            return Ok(());
        }
    }
    let _ = out.flush();
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Combinations(args) => run::<CombinationPolicy>(args),
        Commands::Permutations(args) => run::<PermutationPolicy>(args),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
