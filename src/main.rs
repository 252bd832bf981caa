// src/main.rs

use ctime::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        // Hard failures carry their one-line diagnostic as the top-level
        // message; it goes to stdout, matching the rest of the report.
        println!("{err}");
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
