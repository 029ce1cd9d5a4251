//! # Registry Client
//!
//! HTTP implementation of [`ProposalSource`] against the discovery registry.
//!
//! `GET {base_url}/proposals[?node_key=<provider>]` answers with
//! `{"proposals": [...]}`.

use crate::domain::entities::ServiceProposal;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::discovery::traits::ProposalSource;
use crate::infrastructure::error::SourceResult;
use crate::infrastructure::http_client::HttpClient;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const PROPOSALS_PATH: &str = "proposals";
const PROVIDER_PARAM: &str = "node_key";

#[derive(Debug, Deserialize)]
struct ProposalsResponse {
    #[serde(default)]
    proposals: Vec<ServiceProposal>,
}

/// Registry client over HTTP.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: HttpClient,
}

impl RegistryClient {
    /// Creates a registry client.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Creates a registry client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Internal` if the HTTP client cannot be built.
    pub fn from_url(base_url: &str, timeout_ms: u64) -> SourceResult<Self> {
        Ok(Self::new(HttpClient::new(base_url, timeout_ms)?))
    }
}

#[async_trait]
impl ProposalSource for RegistryClient {
    async fn find(&self, provider: Option<&ProviderId>) -> SourceResult<Vec<ServiceProposal>> {
        let response: ProposalsResponse = match provider {
            Some(provider) => {
                self.http
                    .get_with_params(PROPOSALS_PATH, &[(PROVIDER_PARAM, provider.as_str())])
                    .await?
            }
            None => self.http.get(PROPOSALS_PATH).await?,
        };

        debug!(
            count = response.proposals.len(),
            provider = provider.map(ProviderId::as_str),
            "fetched proposals from registry"
        );
        Ok(response.proposals)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::error::SourceError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn proposal_json(id: i64, provider: &str) -> serde_json::Value {
        json!({
            "id": id,
            "provider_id": provider,
            "service_type": "openvpn",
            "service_definition": {"location": {"asn": "AS1", "country": "NL", "city": "Amsterdam"}}
        })
    }

    #[tokio::test]
    async fn find_all() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/proposals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "proposals": [proposal_json(1, "0xP1"), proposal_json(2, "0xP2")]
            })))
            .mount(&server)
            .await;

        let client = RegistryClient::from_url(&format!("{}/v1", server.uri()), 1000).unwrap();
        let proposals = client.find(None).await.unwrap();

        assert_eq!(proposals.len(), 2);
        assert_eq!(proposals[0].id(), 1);
        assert_eq!(proposals[1].provider_id().as_str(), "0xP2");
    }

    #[tokio::test]
    async fn find_by_provider_sends_node_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/proposals"))
            .and(query_param("node_key", "0xP1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"proposals": [proposal_json(5, "0xP1")]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = RegistryClient::from_url(&server.uri(), 1000).unwrap();
        let provider = ProviderId::new("0xP1");
        let proposals = client.find(Some(&provider)).await.unwrap();

        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].id(), 5);
    }

    #[tokio::test]
    async fn missing_proposals_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = RegistryClient::from_url(&server.uri(), 1000).unwrap();
        assert!(client.find(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn registry_failure_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
            .mount(&server)
            .await;

        let client = RegistryClient::from_url(&server.uri(), 1000).unwrap();
        let err = client.find(None).await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 500, .. }));
    }
}
