use super::DiagramSource;
use crate::metrics;
use async_trait::async_trait;
use std::{
    path::PathBuf,
    process::{ExitStatus, Stdio},
};
use thiserror::Error;
use tokio::{io::AsyncWriteExt, process::Command};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to start renderer '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("renderer i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("renderer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("renderer produced no image")]
    EmptyOutput,
}

#[async_trait]
pub trait Renderer: Send + Sync {
    /// Converts diagram source into PNG bytes.
    async fn render(&self, source: &DiagramSource) -> Result<Vec<u8>, RenderError>;
}

/// Runs the PlantUML executable in pipe mode: source on stdin, image on stdout.
#[derive(Debug, Clone)]
pub struct PlantUmlRenderer {
    command: PathBuf,
    args: Vec<String>,
}

impl PlantUmlRenderer {
    pub fn new(command: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

#[async_trait]
impl Renderer for PlantUmlRenderer {
    async fn render(&self, source: &DiagramSource) -> Result<Vec<u8>, RenderError> {
        log::info!("received a request to generate an image");
        let _timer = metrics::PLANTUML_EXECUTION_TIME.start_timer();

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RenderError::Spawn {
                command: self.command.display().to_string(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed"))?;
        let write_source = async move {
            stdin.write_all(source.as_str().as_bytes()).await?;
            // closing stdin marks the end of the diagram
            stdin.shutdown().await
        };
        let (written, output) = tokio::join!(write_source, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            // syntax errors are still drawn as an image
            if output.stdout.starts_with(&PNG_SIGNATURE) {
                log::warn!(
                    "renderer exited with {} but produced an image: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                return Ok(output.stdout);
            }
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::error!("unable to generate a diagram image from the supplied data: {}", stderr);
            return Err(RenderError::Failed {
                status: output.status,
                stderr,
            });
        }
        written?;

        if output.stdout.is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        log::info!("image successfully generated from the source content");
        Ok(output.stdout)
    }
}
