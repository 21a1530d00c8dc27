use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waypost::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waypost=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, origin }) => {
            waypost::cli::init::run(&path, origin).await?;
        }
        Some(Commands::Serve {
            host,
            port,
            production,
        }) => {
            waypost::cli::serve::run(&cli.config, &host, port, production).await?;
        }
        Some(Commands::Migrate) => {
            waypost::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Resolve { name }) => {
            waypost::cli::resolve::run(&cli.config, &name).await?;
        }
        Some(Commands::Normalize { reference }) => {
            waypost::cli::normalize::run(&cli.config, &reference).await?;
        }
        Some(Commands::Doctor) => {
            waypost::cli::doctor::run(&cli.config).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
