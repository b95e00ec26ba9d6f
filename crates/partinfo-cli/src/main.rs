use anyhow::Context;
use clap::{Parser, Subcommand};
use partinfo_aliexpress::AliexpressProvider;
use partinfo_core::InfoProvider;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "partinfo")]
#[command(about = "Look up part information on Aliexpress")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the catalog by free-text keyword.
    Search { keyword: String },
    /// Fetch the full detail record for a numeric product id.
    Details { id: String },
    /// Print provider metadata and capabilities.
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = partinfo_core::load_provider_config_from_env()?;
    let provider = AliexpressProvider::new(&config).context("failed to build provider")?;

    match cli.command {
        Commands::Search { keyword } => {
            ensure_active(&provider)?;
            let hits = provider.search_by_keyword(&keyword).await?;
            if hits.is_empty() {
                println!("no results for \"{}\"", keyword.trim());
            } else {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            }
        }
        Commands::Details { id } => {
            ensure_active(&provider)?;
            let detail = provider.get_details(&id).await?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Commands::Info => {
            let info = provider.provider_info();
            println!("{} ({})", info.name, provider.provider_key());
            println!("{}", info.description);
            println!("homepage:     {}", info.url);
            println!("active:       {}", provider.is_active());
            println!("capabilities: {:?}", provider.capabilities());
        }
    }

    Ok(())
}

fn ensure_active(provider: &AliexpressProvider) -> anyhow::Result<()> {
    if provider.is_active() {
        Ok(())
    } else {
        anyhow::bail!(
            "provider is disabled: {}",
            provider.provider_info().disabled_help
        )
    }
}
