use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio::{Config, ContentStore, ResolvedView, ThemeChoice};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Single-page personal portfolio")]
struct Cli {
    /// Colour theme of the window
    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate the built-in content, list the projects and exit
    #[arg(long)]
    check: bool,

    /// Print a page as HTML and exit (`home` or a project id)
    #[arg(long, value_name = "PAGE")]
    render: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content = ContentStore::builtin();
    content.validate().context("built-in portfolio content is invalid")?;
    tracing::info!(projects = content.projects().len(), "content loaded");

    if args.check {
        for project in content.projects() {
            println!(
                "{:<20} {} [{}]{}",
                project.id,
                project.title,
                project.tags.join(", "),
                if project.demo.is_some() { " (demo)" } else { "" }
            );
        }
        return Ok(());
    }

    if let Some(page) = args.render {
        let view = if page == "home" {
            ResolvedView::Home
        } else {
            content
                .get(&page)
                .map(ResolvedView::Project)
                .ok_or_else(|| anyhow::anyhow!("unknown project `{page}`"))?
        };
        println!("{}", view.render(&content));
        return Ok(());
    }

    let config = Config {
        theme: args.theme,
        window_width: args.width,
        window_height: args.height,
    };
    run_window(config, content)
}

#[cfg(feature = "gui")]
fn run_window(config: Config, content: ContentStore) -> anyhow::Result<()> {
    portfolio::gui::run(config, content).context("portfolio window failed")
}

#[cfg(not(feature = "gui"))]
fn run_window(_config: Config, _content: ContentStore) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; use --check or --render")
}
