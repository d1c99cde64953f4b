use clap::Parser;
use itertools::Itertools;
use n_choose_k::binomial::evaluate_binomial;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Input Generator for n-choose-k instance files.
///
/// Produces a text file with one case per line, in the format expected by
/// the `choose` and `validator` binaries:
///
/// <n> <k>              (default)
/// <n> <k> <expected>   (--with-expected; expected 0 marks an overflow case)
///
/// Design goals for "interesting" test instances:
/// - Every case satisfies k <= n
/// - A configurable share of cases is drawn from the band n = 60..=70,
///   where central coefficients straddle the 64 bit boundary, so both the
///   reduction path and the overflow path show up in generated data
/// - Duplicate cases are dropped, keeping first-seen order
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random n-choose-k instance files")]
struct Args {
    /// Number of cases to generate (before deduplication)
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Upper bound for n (inclusive)
    #[arg(long, default_value_t = 100)]
    n_max: u64,

    /// Probability of drawing a case from the near-limit band n = 60..=70
    #[arg(long, default_value_t = 0.25)]
    near_limit_bias: f64,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Append the expected value to every line (0 for overflow cases)
    #[arg(long, default_value_t = false)]
    with_expected: bool,

    /// Output file path to write the instance (mandatory)
    #[arg(long)]
    output: PathBuf,
}

/// Draw one (n, k) case with k <= n
fn random_case<R: Rng>(rng: &mut R, n_max: u64, near_limit_bias: f64) -> (u64, u64) {
    let band_high = n_max.min(70);
    let n = if band_high >= 60 && rng.gen::<f64>() < near_limit_bias {
        rng.gen_range(60..=band_high)
    } else {
        rng.gen_range(0..=n_max)
    };
    let k = rng.gen_range(0..=n);

    (n, k)
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.count == 0 {
        eprintln!("Error: count must be positive.");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&args.near_limit_bias) {
        eprintln!("Error: near_limit_bias must be in [0,1].");
        std::process::exit(1);
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            // Use system entropy
            let seed: u64 = rand::thread_rng().gen();
            StdRng::seed_from_u64(seed)
        }
    };

    let cases: Vec<(u64, u64)> = (0..args.count)
        .map(|_| random_case(&mut rng, args.n_max, args.near_limit_bias))
        .unique()
        .collect();

    let mut writer = File::create(&args.output)?;
    let mut overflow_cases = 0usize;

    for &(n, k) in &cases {
        if args.with_expected {
            // A real coefficient is never 0, so 0 safely encodes overflow
            let expected = evaluate_binomial(n, k).unwrap_or(0);
            if expected == 0 {
                overflow_cases += 1;
            }
            writeln!(writer, "{} {} {}", n, k, expected)?;
        } else {
            writeln!(writer, "{} {}", n, k)?;
        }
    }

    writer.flush()?;

    // Print stats to stdout (not into the file)
    println!("Generated instance:");
    println!("  cases = {} ({} requested)", cases.len(), args.count);
    println!("  n_max = {}", args.n_max);
    println!("  near_limit_bias = {:.3}", args.near_limit_bias);
    if let Some(seed) = args.seed {
        println!("  seed = {}", seed);
    }
    if args.with_expected {
        println!("  overflow cases = {}", overflow_cases);
    }
    println!("  output file: {:?}", args.output);

    Ok(())
}
