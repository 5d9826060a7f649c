use std::fs;

use clap::Parser;
use plotcalc::{Context, evaluate, mentions_x, parse_coefficients, sample, sample_polynomial,
               tokenize};

/// plotcalc evaluates arithmetic expressions and samples functions of `x`
/// over an interval.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plotcalc to look at a file instead of an expression. The file
    /// holds one expression per line, evaluated against a shared context.
    #[arg(short, long)]
    file: bool,

    /// Sample the expression over an interval instead of printing a single
    /// value. Input without an `x` is read as polynomial coefficients,
    /// highest degree first, separated by `,` or `;`.
    #[arg(short, long)]
    plot: bool,

    /// Lower bound of the sampling interval.
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    from: f64,

    /// Upper bound of the sampling interval.
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    to: f64,

    /// Distance between consecutive samples.
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let input = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.plot {
        run_plot(&input, args.from, args.to, args.step);
    } else {
        run_eval(&input);
    }
}

/// Evaluates each non-empty line against one shared context, so assignments
/// on earlier lines are visible to later ones.
fn run_eval(input: &str) {
    let mut context = Context::new();

    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        match evaluate(line, &mut context) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}

/// Samples the input over `[from, to]` and prints one `x<TAB>y` pair per
/// line. Falls back to polynomial coefficients when the input never
/// mentions `x`.
fn run_plot(input: &str, from: f64, to: f64, step: f64) {
    if !(step > 0.0) || !(to > from) {
        eprintln!("Plotting requires --step > 0 and --to > --from.");
        std::process::exit(1);
    }

    let has_x = tokenize(input).is_ok_and(|tokens| mentions_x(&tokens));

    let points = if has_x {
        match sample(input, from, to, step) {
            Ok(points) => points,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    } else {
        match parse_coefficients(input) {
            Ok(coefficients) => sample_polynomial(&coefficients, from, to, step),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    };

    for (x, y) in points {
        println!("{x}\t{y}");
    }
}
