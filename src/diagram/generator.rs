use super::{source_or_error_diagram, DiagramSource, RenderError, Renderer};
use crate::devops::{DevOpsConfig, DevOpsRepository};
use std::sync::Arc;

/// Renders diagrams whose sources live in a DevOps git repository.
pub struct DiagramGenerator {
    repository: DevOpsRepository,
    renderer: Arc<dyn Renderer>,
}

impl DiagramGenerator {
    pub fn new(repository: DevOpsRepository, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    /// Retrieves the source at `path` and renders it to PNG.
    ///
    /// Retrieval failures are drawn as an error diagram; only rendering
    /// failures are returned as errors.
    pub async fn generate(&self, config: &DevOpsConfig, path: &str) -> Result<Vec<u8>, RenderError> {
        let source = self.retrieve_source_text(config, path).await;
        self.renderer.render(&source).await
    }

    async fn retrieve_source_text(&self, config: &DevOpsConfig, path: &str) -> DiagramSource {
        source_or_error_diagram(self.repository.fetch_item(config, path).await)
    }
}
