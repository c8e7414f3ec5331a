use socialgraph::{cli, commands};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    // RUST_LOG wins over --verbose; logs go to stderr so stdout stays clean.
    let default_filter = if args.verbose {
        "socialgraph=debug"
    } else {
        "socialgraph=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::execute_command(&args).await?;
    Ok(())
}
