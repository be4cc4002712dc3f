mod generator;
mod renderer;
mod source;

pub use self::{
    generator::DiagramGenerator,
    renderer::{PlantUmlRenderer, RenderError, Renderer, PNG_SIGNATURE},
    source::{source_or_error_diagram, DiagramSource},
};
