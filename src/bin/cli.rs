//! Command-line front end for exercising the parser outside of MPSolve
//! itself: reads one polynomial from a file (or stdin) and prints its
//! coefficients.

use anyhow::{Context, Result};
use clap::Parser;
use mpsolve_polyparse::{StderrSink, parse_polynomial, ByteSource, ReaderSource};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mps-polyparse", about = "Parse a sum-of-monomials polynomial")]
struct Args {
    /// Path to the polynomial source; reads stdin if omitted.
    input: Option<PathBuf>,
}

fn open_source(args: &Args) -> Result<Box<dyn ByteSource>> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(ReaderSource::new(file)))
        }
        None => Ok(Box::new(ReaderSource::new(io::stdin()))),
    }
}

fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    let mut source = open_source(&args)?;
    let mut sink = StderrSink;

    match parse_polynomial(source.as_mut(), &mut sink) {
        Ok(Some(poly)) => {
            for (degree, coeff) in poly.coefficients().iter().enumerate() {
                println!("x^{degree}: {} + {}i", coeff.re, coeff.im);
            }
            Ok(())
        }
        Ok(None) => {
            println!("no polynomial (expression simplified to zero)");
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(err)),
    }
}
