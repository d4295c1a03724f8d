use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use board_bank::bin_utils::Service;
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a transfers file as the first argument")?;
    let player_count = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid player count `{raw}`"))?,
        None => 4,
    };
    let starting_balance = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid starting balance `{raw}`"))?,
        None => Decimal::from(1500),
    };
    let log_output: Option<Box<dyn Write>> = match args.next() {
        Some(path) => Some(Box::new(
            File::create(&path).with_context(|| format!("Failed to create `{path}`"))?,
        )),
        None => None,
    };

    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        log_output,
        player_count,
        starting_balance,
        error_printer: Box::new(|line, err| eprintln!("Error at line {line}: {err}")),
    };
    service.run()
}
