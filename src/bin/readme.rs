//! Render a README to HTML with the same passes the project cards use

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_core::{MarkdownRenderer, ReadmeView, RepoRef, config::PREVIEW_THRESHOLD};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Render a README to HTML the way the portfolio cards do")]
struct Args {
    /// Markdown file to render
    path: PathBuf,

    /// Repository relative images resolve against, as owner/repo
    #[arg(long)]
    repo: Option<RepoRef>,

    /// Print only the preview rendering
    #[arg(long, conflicts_with = "card")]
    preview: bool,

    /// Print the whole README block with preview, full text and toggle
    #[arg(long)]
    card: bool,

    /// Characters kept in the preview
    #[arg(long, default_value_t = PREVIEW_THRESHOLD)]
    threshold: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let renderer = match args.repo {
        Some(repo) => MarkdownRenderer::for_repo(repo),
        None => MarkdownRenderer::new(),
    };

    let html = if args.card {
        ReadmeView::render(&renderer, &source, args.threshold).to_html()
    } else if args.preview {
        renderer.render_preview(&source, args.threshold)
    } else {
        renderer.render(&source)
    };
    println!("{html}");
    Ok(())
}
