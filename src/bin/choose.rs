use clap::Parser;
use n_choose_k::{
    binomial::evaluate_binomial,
    parser::{parse_pair_file, parse_pair_line},
};
use rayon::prelude::*;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Exact n-choose-k evaluator for unsigned 64 bit integers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an instance file with one `n k` pair per line; reads pairs
    /// interactively from stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Echo parsed inputs and print batch timing
    #[arg(short, long)]
    verbose: bool,
}

/// Evaluate every pair from an instance file, reporting in input order
fn run_batch(path: &PathBuf, verbose: bool) {
    let pairs = match parse_pair_file(path) {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("Error parsing input file: {}", e);
            std::process::exit(1);
        }
    };

    // The evaluator requires k <= n; reject bad pairs before computing
    if let Some(&(n, k)) = pairs.iter().find(|&&(n, k)| k > n) {
        eprintln!("Cannot compute C({}, {}): n must be at least k", n, k);
        std::process::exit(1);
    }

    if verbose {
        println!("Evaluating {} pairs from {:?}", pairs.len(), path);
    }

    let start = std::time::Instant::now();

    // Calls are independent and share no state, so fan out per pair
    let results: Vec<_> = pairs
        .par_iter()
        .map(|&(n, k)| evaluate_binomial(n, k))
        .collect();

    let elapsed = start.elapsed();

    for (&(n, k), result) in pairs.iter().zip(&results) {
        match result {
            Ok(value) if verbose => println!("C({}, {}) = {}", n, k, value),
            Ok(value) => println!("{}", value),
            Err(_) => eprintln!("ERROR: C({}, {}) overflows a 64 bit integer", n, k),
        }
    }

    if verbose {
        println!("Batch time: {:.3}s", elapsed.as_secs_f64());
    }
}

/// Read pairs from stdin one line at a time until EOF or a blank line
fn run_interactive() {
    println!("Enter n, k (one line, space separated)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                std::process::exit(1);
            }
        };

        if line.trim().is_empty() {
            break;
        }

        let (n, k) = match parse_pair_line(&line) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        if k > n {
            eprintln!("Cannot compute: n must be at least k");
            continue;
        }

        match evaluate_binomial(n, k) {
            Ok(value) => println!("{}\n", value),
            Err(e) => eprintln!("ERROR: {}", e),
        }
    }
}

fn main() {
    let args = Args::parse();

    match args.input {
        Some(path) => run_batch(&path, args.verbose),
        None => run_interactive(),
    }
}
