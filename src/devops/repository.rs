use super::{auth::encode_basic_auth, config::DevOpsConfig};
use crate::rest_client::{RestClient, TransportError};
use std::collections::BTreeMap;

const AUTHORIZATION_HEADER: &str = "Authorization";
const FILE_PATH_PARAM: &str = "path";
const API_VERSION_PARAM: &str = "api-version";

/// Reads file contents through the DevOps git "items" API.
#[derive(Debug, Clone)]
pub struct DevOpsRepository {
    client: RestClient,
    api_version: String,
}

impl DevOpsRepository {
    pub fn new(client: RestClient, api_version: impl Into<String>) -> Self {
        Self {
            client,
            api_version: api_version.into(),
        }
    }

    /// Fetches `file_path` from the repository described by `config`.
    /// `Ok(None)` means the server had no content for us (e.g. 404, 401).
    pub async fn fetch_item(
        &self,
        config: &DevOpsConfig,
        file_path: &str,
    ) -> Result<Option<String>, TransportError> {
        let auth_header = encode_basic_auth(&config.access_token);
        let headers = BTreeMap::from([(AUTHORIZATION_HEADER, auth_header.as_str())]);
        let query = BTreeMap::from([
            (FILE_PATH_PARAM, file_path),
            (API_VERSION_PARAM, self.api_version.as_str()),
        ]);

        self.client
            .get_text(&config.items_path(), &headers, &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn config() -> DevOpsConfig {
        DevOpsConfig {
            organization: "contoso".into(),
            project: "docs".into(),
            repository_id: "diagrams".into(),
            access_token: "abc".into(),
        }
    }

    fn repository(base_url: &str) -> DevOpsRepository {
        let client = RestClient::new(Url::parse(base_url).unwrap(), reqwest::Client::new());
        DevOpsRepository::new(client, "6.1-preview.1")
    }

    #[tokio::test]
    async fn fetches_item_with_credentials() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contoso/docs/_apis/git/repositories/diagrams/items"))
            .and(query_param("path", "/design/flow.puml"))
            .and(query_param("api-version", "6.1-preview.1"))
            .and(header("authorization", "Basic OmFiYw=="))
            .respond_with(ResponseTemplate::new(200).set_body_string("@startuml\nA -> B\n@enduml"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let content = repository(&mock_server.uri())
            .fetch_item(&config(), "/design/flow.puml")
            .await
            .unwrap();
        assert_eq!(content.as_deref(), Some("@startuml\nA -> B\n@enduml"));
    }

    #[tokio::test]
    async fn unauthorized_is_no_content() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let content = repository(&mock_server.uri())
            .fetch_item(&config(), "/design/flow.puml")
            .await
            .unwrap();
        assert_eq!(content, None);
    }
}
