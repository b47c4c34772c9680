use anyhow::{Context, Result};
use clap::Parser;
use commerce_backend::{
    adapters::inbound::http::router::{create_router, AppState},
    app::AppBuilder,
    config::EnvSnapshot,
    services::assemble,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "commerce-backend")]
#[command(about = "Commerce backend provider wiring and file storage service", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "9000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Print the assembled provider registry (credentials masked) and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn init_logging(&self) -> Result<()> {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Snapshot the environment first so .env values feed both clap and the registry
    let env = EnvSnapshot::from_process_env();

    let cli = Cli::parse();
    cli.init_logging()?;

    let registry = assemble(&env);
    let rendered = serde_json::to_string_pretty(&registry.redacted_module_config())
        .context("Failed to render provider registry")?;

    if cli.print_config {
        println!("{}", rendered);
        return Ok(());
    }

    info!("Starting commerce backend");
    info!("Provider registry:\n{}", rendered);

    let services = AppBuilder::new()
        .with_registry(registry)
        .build()
        .await
        .context("Failed to build application")?;

    let state = AppState {
        registry: services.registry,
        file_provider: services.file_provider,
        static_dir: services.static_dir,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}
