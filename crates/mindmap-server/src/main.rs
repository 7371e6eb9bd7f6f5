use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mindmap_llm::{resolve_generator, GeneratorConfig};
use mindmap_service::{HttpPlanner, LocalPlanner, PlanningService};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "mindmap-server", about = "Project breakdown mind map server")]
struct Cli {
    #[command(flatten)]
    generator: GeneratorConfig,

    /// Address to bind the HTTP server to
    #[arg(long, env = "MINDMAP_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port for the HTTP server
    #[arg(long, env = "MINDMAP_PORT", default_value = "5000")]
    port: u16,

    /// Directory with the front-end to serve for non-API paths
    #[arg(long, env = "MINDMAP_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full mind map for a project idea and print it as JSON
    Generate {
        /// The project idea
        idea: String,
        /// Use a running server instead of generating in-process
        #[arg(long)]
        server: Option<String>,
    },
    /// Expand a single task into sub-steps and print them as JSON
    Expand {
        /// The task to expand
        topic: String,
        /// Use a running server instead of generating in-process
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { idea, server }) => {
            let service = planning_service(&cli.generator, server).await;
            print_json(&service.generate_mind_map(&idea).await?)?;
        }
        Some(Commands::Expand { topic, server }) => {
            let service = planning_service(&cli.generator, server).await;
            print_json(&service.generate_subtopics(&topic).await?)?;
        }
        None => {
            // Default: start server
            let addr = SocketAddr::new(cli.bind.parse()?, cli.port);

            let generator = resolve_generator(&cli.generator).await;
            let planner = LocalPlanner::new(generator);

            if let Some(dir) = &cli.static_dir {
                info!("serving front-end from {}", dir.display());
            }

            let listener = TcpListener::bind(addr).await?;
            info!("mindmap-server listening on http://{addr}");

            mindmap_server::serve(listener, planner, cli.static_dir).await?;
        }
    }

    Ok(())
}

async fn planning_service(
    config: &GeneratorConfig,
    server: Option<String>,
) -> Box<dyn PlanningService> {
    match server {
        Some(url) => Box::new(HttpPlanner::new(&url)),
        None => Box::new(LocalPlanner::new(resolve_generator(config).await)),
    }
}

fn print_json(body: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}
