mod cli;

use ampere_utils::tracing::{TracingConfig, setup};
use anyhow::Result;
use clap::Parser;
use cli::opt;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = opt::Cli::parse();
    if opt.debug {
        setup(
            TracingConfig::builder()
                .package(env!("CARGO_PKG_NAME"))
                .version(env!("CARGO_PKG_VERSION"))
                .default_level(LevelFilter::DEBUG)
                .build(),
        )?;
    }
    cli::exec(opt.command).await
}
