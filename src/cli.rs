use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Preview template HTML file. Must contain the literal markers `<html`,
    /// `</body>`, and `<!--injectSpace-->`.
    #[arg(long, default_value = "static/preview/index.html")]
    pub template: PathBuf,

    /// Read the template once at startup and serve it from memory instead of
    /// re-reading it on every request.
    #[arg(long)]
    pub cache_template: bool,
}
