//! HTTP client for the spire generator service.

use std::time::Duration;

use crate::error::QueryError;
use crate::params::GenerationParameters;
use crate::version::user_agent;
use crate::wire::{SpireResponse, decode_response, encode_query};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the generator's query endpoint.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/query".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the spire generator service.
///
/// Owns a reqwest client built once at construction. Queries are independent
/// and stateless beyond connection reuse; the caller awaits each to
/// completion, so one request is in flight at a time.
pub struct SpireClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl SpireClient {
    pub fn new(config: ClientConfig) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(value) = reqwest::header::HeaderValue::from_str(&user_agent()) {
            headers.insert(reqwest::header::USER_AGENT, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Encode `params`, POST the query, and decode the response text.
    ///
    /// The wire status token is authoritative: the body is decoded whatever
    /// the HTTP status, matching the service's plain-text protocol.
    pub async fn generate(
        &self,
        params: &GenerationParameters,
    ) -> Result<SpireResponse, QueryError> {
        let query = encode_query(params);
        tracing::debug!(query = %query, endpoint = %self.config.endpoint, "Sending spire query");

        let response = self
            .http
            .post(&self.config.endpoint)
            .body(query)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(status = %status, bytes = text.len(), "Received spire response");

        let decoded = decode_response(&text)?;
        if let SpireResponse::Rejected { message } = &decoded {
            tracing::warn!(message = %message, "Generator rejected the query");
        }
        Ok(decoded)
    }
}

impl Default for SpireClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_spec::{CoreSpec, ModifierCode, Tier};
    use crate::error::DecodeError;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn config_defaults() {
        let config = ClientConfig::default();
        assert!(config.endpoint.ends_with("/query"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    fn test_client(server: &MockServer) -> SpireClient {
        SpireClient::new(ClientConfig {
            endpoint: format!("{}/query", server.uri()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn generate_posts_the_encoded_query() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/query"))
            .and(body_string("upg=0000 f=1 rs=0 core=2/P:20"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok t=PPPPP core=2/P:20"))
            .expect(1)
            .mount(&server)
            .await;

        let mut params = GenerationParameters::new(1, 0);
        params.core = Some(CoreSpec::new(Tier::Uncommon).with_modifier(ModifierCode::Poison, 20));

        let response = test_client(&server).generate(&params).await.unwrap();
        match response {
            SpireResponse::Generated { spire, core } => {
                assert_eq!(spire.floors(), 1);
                assert_eq!(core.unwrap().tier, Tier::Uncommon);
            }
            SpireResponse::Rejected { message } => panic!("unexpected rejection: {message}"),
        }
    }

    #[tokio::test]
    async fn generate_surfaces_server_rejections() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_string("err bad params"))
            .mount(&server)
            .await;

        let params = GenerationParameters::new(5, 100);
        let response = test_client(&server).generate(&params).await.unwrap();
        assert_eq!(
            response,
            SpireResponse::Rejected {
                message: "bad params".to_string()
            }
        );
    }

    #[tokio::test]
    async fn generate_fails_on_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok t=AAA"))
            .mount(&server)
            .await;

        let params = GenerationParameters::new(5, 100);
        let err = test_client(&server).generate(&params).await.unwrap_err();
        assert!(matches!(
            err,
            QueryError::Decode(DecodeError::BadTrapLength(3))
        ));
    }

    #[tokio::test]
    async fn generate_fails_on_transport_errors() {
        // nothing listens here
        let client = SpireClient::new(ClientConfig {
            endpoint: "http://127.0.0.1:9/query".to_string(),
            timeout: Duration::from_secs(1),
        });

        let params = GenerationParameters::new(5, 100);
        let err = client.generate(&params).await.unwrap_err();
        assert!(matches!(err, QueryError::Transport(_)));
    }
}
