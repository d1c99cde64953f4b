use clap::Parser;
use n_choose_k::{binomial::evaluate_binomial, parser::parse_case_file};
use rayon::prelude::*;
use std::path::PathBuf;

/// Validation harness: checks evaluator output against expected values
///
/// Reads `n k expected` cases, one per line. An expected value of 0 marks
/// a pair whose coefficient must overflow 64 bits (0 is never a real
/// coefficient, so the convention is unambiguous).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the validation file with one `n k expected` case per line
    #[arg(short, long)]
    input: PathBuf,
}

fn main() {
    let args = Args::parse();

    let cases = match parse_case_file(&args.input) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("Error parsing input file: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(&(n, k, _)) = cases.iter().find(|&&(n, k, _)| k > n) {
        eprintln!("Invalid case C({}, {}): n must be at least k", n, k);
        std::process::exit(1);
    }

    println!("Validating {} cases from {:?}", cases.len(), args.input);
    println!();

    let start = std::time::Instant::now();

    let results: Vec<_> = cases
        .par_iter()
        .map(|&(n, k, _)| evaluate_binomial(n, k))
        .collect();

    let elapsed = start.elapsed();

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut overflowed = 0usize;

    for (&(n, k, expected), found) in cases.iter().zip(&results) {
        print!("n = {}, k = {}: ", n, k);
        match *found {
            Err(_) => {
                overflowed += 1;
                if expected == 0 {
                    passed += 1;
                    println!("OVERFLOW");
                } else {
                    failed += 1;
                    println!("FAILED\n\tFOUND: overflow\n\tEXPECTED: {}\n", expected);
                }
            }
            Ok(value) if expected == value => {
                passed += 1;
                println!("PASSED");
            }
            Ok(value) if expected == 0 => {
                failed += 1;
                println!("FAILED\n\tFOUND: {}\n\tEXPECTED: overflow\n", value);
            }
            Ok(value) => {
                failed += 1;
                println!("FAILED\n\tFOUND: {}\n\tEXPECTED: {}\n", value, expected);
            }
        }
    }

    println!();
    println!(
        "{} passed, {} failed, {} overflowed ({} cases in {:.3}s)",
        passed,
        failed,
        overflowed,
        cases.len(),
        elapsed.as_secs_f64()
    );

    if failed > 0 {
        std::process::exit(1);
    }
}
