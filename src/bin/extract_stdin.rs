//! Simple CLI that reads a digest text dump and prints the extracted
//! articles as JSON.
//!
//! Reads from the file named by the first argument, or from stdin when no
//! argument is given. Set `RUST_LOG=debug` to see pipeline decisions.

use std::env;
use std::fs;
use std::io::{self, Read};

use digest_extract::extract_bytes;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let bytes = if args.len() > 1 {
        fs::read(&args[1])?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    let result = extract_bytes(&bytes)?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
