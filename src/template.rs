use std::path::PathBuf;

use anyhow::Context as _;

/// Where the preview template comes from.
///
/// `Disk` re-reads the file on every request so edits show up immediately;
/// `Cached` snapshots the file once at startup and serves it from memory.
#[derive(Debug)]
pub enum TemplateSource {
    Disk(PathBuf),
    Cached(String),
}

impl TemplateSource {
    pub async fn load(&self) -> anyhow::Result<String> {
        match self {
            TemplateSource::Disk(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read {}", path.display())),
            TemplateSource::Cached(html) => Ok(html.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cached_source_serves_snapshot() {
        let source = TemplateSource::Cached("<html></body>".to_string());
        assert_eq!(source.load().await.unwrap(), "<html></body>");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let source = TemplateSource::Disk(PathBuf::from("/definitely/not/here.html"));
        assert!(source.load().await.is_err());
    }
}
