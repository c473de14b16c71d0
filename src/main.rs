//! nlp-pipeline-api: tokenize, tag, lemmatize, serve.

mod api;
mod bag;
mod error;
mod function;
mod lemma;
mod pipeline;
mod pos;
mod tokenize;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nlp-pipeline-api")]
#[command(about = "Sentence preprocessing API: tokenize, tag, lemmatize, bag-of-words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        addr: String,

        /// Port to listen on.
        #[arg(long, short, default_value_t = 3000)]
        port: u16,
    },

    /// Process one function event and print the response envelope.
    Invoke {
        /// Path to an event JSON document, or "-" for stdin.
        event: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { addr, port } => run_serve(&addr, port)?,
        Command::Invoke { event } => run_invoke(&event)?,
    }
    Ok(())
}

fn run_serve(addr: &str, port: u16) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let app = api::router();
        let addr = format!("{}:{}", addr, port);
        info!("listening on http://{}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })?;
    Ok(())
}

fn run_invoke(path: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let event = function::read_event(path)?;
    let response = function::handle_event(event)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
