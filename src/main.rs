use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio_stream::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::api::{self, AppState};
use folio::client::FolioClient;
use folio::config::SiteConfig;
use folio::content;
use folio::effects::{Phase, Typewriter, TypewriterCycler};
use folio::render::{render_page, PageState};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Server-rendered personal portfolio")]
struct Cli {
    /// Config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content file replacing the built-in portfolio (JSON)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the portfolio over HTTP
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
    /// Write the page as a static index.html
    Render {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Play the hero typewriter in the terminal
    Roles {
        /// Number of full title cycles before exiting
        #[arg(short, long, default_value = "1")]
        cycles: usize,
    },
    /// Check whether a server is running
    Status {
        /// API base URL (defaults to FOLIO_URL or the local server)
        #[arg(long)]
        url: Option<String>,

        /// Also count the projects in this category
        #[arg(long)]
        category: Option<String>,
    },
}

/// Initialize tracing with output to stderr (when stdout carries output) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Typewriter frames and rendered output go to stdout
    let use_stderr = matches!(cli.command, Some(Commands::Roles { .. }));
    init_tracing(use_stderr);

    let mut config = SiteConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let portfolio = content::load(cli.content.as_deref()).context("Failed to load content")?;

    match cli.command {
        Some(Commands::Serve { port, host }) => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            serve(AppState::new(portfolio, config)).await?;
        }
        Some(Commands::Render { out }) => {
            let path = render_static(&portfolio, &config, &out)?;
            println!("Wrote {}", path.display());
        }
        Some(Commands::Roles { cycles }) => {
            let mut stdout = std::io::stdout();
            play_roles(&portfolio.profile.roles, &config, cycles, &mut stdout).await?;
        }
        Some(Commands::Status { url, category }) => {
            let client = match url {
                Some(url) => FolioClient::new(url),
                None => FolioClient::from_env(),
            };
            match client.health().await {
                Ok(health) => println!("Folio at {} is {}", client.base_url(), health.status),
                Err(e) => {
                    println!("Folio at {} is not reachable: {}", client.base_url(), e);
                    std::process::exit(1);
                }
            }
            let projects = client
                .projects(category.as_deref())
                .await
                .context("Failed to list projects")?;
            println!(
                "{} projects in {}",
                projects.len(),
                category.as_deref().unwrap_or("all")
            );
        }
        None => {
            // Default: start server
            serve(AppState::new(portfolio, config)).await?;
        }
    }

    Ok(())
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_addr();
    tracing::info!("Starting Folio for {} on {}", state.portfolio.profile.name, addr);

    let app = api::create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Folio listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Render the page without a live typewriter and write `<out>/index.html`.
fn render_static(
    portfolio: &folio::models::Portfolio,
    config: &SiteConfig,
    out: &Path,
) -> anyhow::Result<PathBuf> {
    let page = PageState::new(portfolio, config).with_static_hero();
    let html = render_page(&page);

    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create {}", out.display()))?;
    let path = out.join("index.html");
    std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Rendered static page to {}", path.display());
    Ok(path)
}

/// Print typewriter frames until `cycles` full passes over the titles are done.
async fn play_roles<W: Write>(
    roles: &[String],
    config: &SiteConfig,
    cycles: usize,
    stdout: &mut W,
) -> anyhow::Result<()> {
    let typewriter = Typewriter::new(roles, config.typewriter)
        .ok_or_else(|| anyhow::anyhow!("No roles to play"))?;
    let mut frames = TypewriterCycler::start(typewriter).into_stream();
    let total = cycles.saturating_mul(roles.len());
    let mut done = 0;
    let mut previous = Phase::Typing;

    while let Some(frame) = frames.next().await {
        if previous == Phase::Deleting && frame.phase == Phase::Typing {
            done += 1;
        }
        if done >= total {
            break;
        }
        previous = frame.phase;
        write!(stdout, "\r\x1b[2K{}|", frame.text)?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}
