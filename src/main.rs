use clap::Parser;
use preservation_tips::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Item(command) => cli::item::run(command).await,
    }
}
