use crate::{metrics, rest_client::TransportError};
use std::fmt;

const NO_CONTENT_MESSAGE: &str = "No content was retrieved for the requested file";

/// Diagram description text handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSource(String);

impl DiagramSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// A diagram that draws `description` in a red error note.
    pub fn error(description: &str) -> Self {
        Self(format!(
            "@startuml\nparticipant Error #red\nnote over Error\n\t{description}\nend note\n@enduml"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for DiagramSource {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DiagramSource {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for DiagramSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns the outcome of a source fetch into something renderable.
/// Failures become an error diagram, so rendering never special-cases them.
pub fn source_or_error_diagram(
    fetch_result: Result<Option<String>, TransportError>,
) -> DiagramSource {
    match fetch_result {
        Ok(Some(text)) => {
            metrics::count_diagram_source("fetched");
            DiagramSource::from(text)
        }
        Ok(None) => {
            log::warn!("{}", NO_CONTENT_MESSAGE);
            metrics::count_diagram_source("error_diagram");
            DiagramSource::error(NO_CONTENT_MESSAGE)
        }
        Err(err) => {
            log::error!("unexpected error while retrieving diagram source: {}", err);
            metrics::count_diagram_source("error_diagram");
            DiagramSource::error(&err.to_string())
        }
    }
}
