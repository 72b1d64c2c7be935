use anyhow::Result;
use clap::{Parser, Subcommand};

/// folio - Personal portfolio site with a contact relay
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site with a contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a contact message to a running server
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Base URL of the site (overrides `site.base_url`)
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = folio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability("folio", env!("CARGO_PKG_VERSION"), &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => folio::cli::server::serve(config, host, port).await,
        Commands::Send {
            name,
            email,
            message,
            url,
        } => folio::cli::message::send(config, url, name, email, message).await,
    }
}
