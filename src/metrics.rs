use actix_web::{dev::Server, App, HttpServer};
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use anyhow::anyhow;
use lazy_static::lazy_static;
use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};
use std::net::SocketAddr;

lazy_static! {
    pub static ref PLANTUML_EXECUTION_TIME: Histogram = register_histogram!(
        "azuml_plantuml_execution_time",
        "time of running plantuml binary in seconds",
    )
    .unwrap();
    pub static ref DIAGRAM_SOURCES: IntCounterVec = register_int_counter_vec!(
        "azuml_diagram_sources",
        "number of rendered diagram sources",
        &["kind"],
    )
    .unwrap();
}

pub fn count_diagram_source(kind: &str) {
    DIAGRAM_SOURCES.with_label_values(&[kind]).inc();
}

#[derive(Clone)]
pub struct Metrics {
    metrics_middleware: PrometheusMetrics,
    http_middleware: PrometheusMetrics,
}

impl Metrics {
    pub fn new(route: &str) -> anyhow::Result<Self> {
        let registry = prometheus::default_registry();
        let metrics_middleware = PrometheusMetricsBuilder::new("azuml_metrics")
            .registry(registry.clone())
            .endpoint(route)
            .build()
            .map_err(|err| anyhow!("failed to build metrics middleware: {}", err))?;
        // note: http middleware has no endpoint
        let http_middleware = PrometheusMetricsBuilder::new("azuml")
            .registry(registry.clone())
            .build()
            .map_err(|err| anyhow!("failed to build http middleware: {}", err))?;

        Ok(Self {
            metrics_middleware,
            http_middleware,
        })
    }

    pub fn middleware(&self) -> &PrometheusMetrics {
        &self.http_middleware
    }

    pub fn run_server(&self, addr: SocketAddr) -> std::io::Result<Server> {
        let metrics_middleware = self.metrics_middleware.clone();
        Ok(HttpServer::new(move || App::new().wrap(metrics_middleware.clone()))
            .bind(addr)?
            .run())
    }
}
