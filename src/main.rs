// src/main.rs

use waitmark::gate::GateOutcome;
use waitmark::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(GateOutcome::Success) => {}
        Ok(GateOutcome::TimedOut) => std::process::exit(1),
        Err(err) => {
            eprintln!("waitmark error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<GateOutcome> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
