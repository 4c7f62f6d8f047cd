use reporter::{
    run,
    Args,
    API_KEY_ENV,
};
use std::{
    io::Write,
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr, stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    let settings = args.into_settings(std::env::var(API_KEY_ENV).ok());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&settings, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            writeln!(out, "{}", err).ok();
            ExitCode::from(err.exit_code())
        }
    }
}
