use azuml::{
    diagram::{DiagramSource, RenderError, Renderer},
    run_http_server_with_router, AppRouter, Settings,
};
use pretty_assertions::assert_eq;
use std::{collections::HashMap, sync::Arc, time::Duration};

struct EchoRenderer;

#[async_trait::async_trait]
impl Renderer for EchoRenderer {
    async fn render(&self, source: &DiagramSource) -> Result<Vec<u8>, RenderError> {
        Ok(source.as_str().as_bytes().to_vec())
    }
}

async fn get_with_retries(url: &str) -> reqwest::Response {
    let mut last_error = None;
    for _ in 0..20 {
        match reqwest::get(url).await {
            Ok(response) => return response,
            Err(err) => last_error = Some(err),
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("failed to connect to server: {last_error:?}")
}

#[actix_rt::test]
async fn server_start() {
    let mut settings = Settings::default();
    settings.server.addr = "127.0.0.1:18043".parse().unwrap();
    settings.metrics.enabled = true;
    settings.metrics.addr = "127.0.0.1:16060".parse().unwrap();
    let base = format!("http://{}", settings.server.addr);
    let metrics_base = format!("http://{}", settings.metrics.addr);

    let router = AppRouter::with_components(
        &settings,
        Arc::new(HashMap::<String, String>::new()),
        Arc::new(EchoRenderer),
    )
    .expect("router should be built");
    let _server_handle = {
        let settings = settings.clone();
        tokio::spawn(async move { run_http_server_with_router(settings, Arc::new(router)).await })
    };

    let resp = get_with_retries(&format!("{base}/health")).await;
    assert_eq!(resp.status(), 200);

    let resp = get_with_retries(&format!("{base}/api/TestDiagram")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.bytes().await.unwrap(),
        "@startuml\nBob -> Alice: Hello!\n@enduml\n"
    );

    let resp = get_with_retries(&format!("{metrics_base}/metrics")).await;
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    for s in [
        "# TYPE azuml_http_requests_duration_seconds histogram",
        "azuml_http_requests_duration_seconds_bucket{endpoint=\"/health\",method=\"GET\",status=\"200\"",
    ] {
        assert!(body.contains(s), "body doesn't have string {s}:\n{body}");
    }
}
