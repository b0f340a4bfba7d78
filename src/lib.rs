mod builtin;
mod cli;
mod render;
mod server;
mod template;
mod theme;
mod toolbar;

use anyhow::Context as _;

pub use cli::Args;
pub use render::{INJECT_MARKER, escape_html, render_preview};
pub use server::app;
pub use template::TemplateSource;
pub use theme::{Theme, class_map_json};

pub async fn run(args: Args) -> anyhow::Result<()> {
    let template = if args.cache_template {
        let html = std::fs::read_to_string(&args.template)
            .with_context(|| format!("read {}", args.template.display()))?;
        TemplateSource::Cached(html)
    } else {
        TemplateSource::Disk(args.template.clone())
    };

    let app = server::app(template);
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("bind {}", args.bind))?;
    tracing::info!(addr = %args.bind, "theme preview server listening");
    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
