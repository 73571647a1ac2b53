use ebs_core::logging;

mod cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run().await {
        eprintln!("ebs error: {:#}", err);
        std::process::exit(1);
    }
}
