mod cli;
mod consts;
pub mod devops;
pub mod diagram;
mod http_server;
mod metrics;
pub mod rest_client;
mod settings;

pub use self::cli::Args;
pub use consts::SAMPLE_DIAGRAM;
pub use http_server::{
    configure_router, handlers::ApiError, run as run_http_server,
    run_with_router as run_http_server_with_router, AppRouter, Router,
};
pub use settings::{
    DevOpsSettings, DiagnosticsSettings, MetricsSettings, RendererSettings, ServerSettings,
    Settings,
};
