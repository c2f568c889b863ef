use clap::Parser;
use prefix_aggregate::args::Args;
use prefix_aggregate::config::init_logging;
use std::error::Error;
use std::io::{self, BufWriter, Write};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    init_logging()?;
    log::info!("#Start main()");

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let mut stderr = io::stderr().lock();

    prefix_aggregate::run(&args, stdin, &mut stdout, &mut stderr)?;
    stdout.flush()?;

    Ok(())
}
