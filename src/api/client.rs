use crate::api::traits::ListingsApi;
use crate::api::types::LocationRecord;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::FeaturedProperty;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP client for the listings backend
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client pointed at the configured backend
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", path, response.status());
            return Err(ApiError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), path);

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ListingsApi for HttpApi {
    async fn search_locations(&self, city: &str) -> Result<Vec<LocationRecord>, ApiError> {
        self.get_json("/api/locations/search", &[("city", city)]).await
    }

    async fn featured_properties(&self) -> Result<Vec<FeaturedProperty>, ApiError> {
        self.get_json("/api/properties/featured", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn config(base: &str) -> Config {
        Config {
            api_base_url: base.to_string(),
            debounce: Duration::from_millis(300),
            min_query_len: 3,
            request_timeout: Duration::from_secs(5),
        }
    }

    fn api(base: &str) -> HttpApi {
        HttpApi {
            client: Client::builder().no_proxy().build().unwrap(),
            base_url: base.to_string(),
        }
    }

    /// Serve one canned response on an ephemeral port; yields the request line
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (base, handle)
    }

    #[test]
    fn endpoints_hang_off_the_configured_base() {
        let api = HttpApi::new(&config("http://api.example.test:8080")).unwrap();

        assert_eq!(
            api.endpoint("/api/properties/featured"),
            "http://api.example.test:8080/api/properties/featured"
        );
    }

    #[tokio::test]
    async fn location_search_sends_encoded_city() {
        let body = r#"[{"id":1,"name":"Lal Chowk","address":{"city":"Srinagar"},"latitude":34.07,"longitude":74.81}]"#;
        let (base, server) = serve_once("200 OK", body).await;
        let api = api(&base);

        let records = api.search_locations("Lal Chowk").await.unwrap();

        assert_eq!(server.await.unwrap(), "GET /api/locations/search?city=Lal+Chowk HTTP/1.1");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_deref(), Some("1"));
        assert_eq!(records[0].address.district_name(), Some("Srinagar"));
    }

    #[tokio::test]
    async fn featured_hits_its_own_path() {
        let body = r#"[{"_id":"65a1","title":"Houseboat","location":"Srinagar","price":4500000,"images":[]}]"#;
        let (base, server) = serve_once("200 OK", body).await;
        let api = api(&base);

        let featured = api.featured_properties().await.unwrap();

        assert_eq!(server.await.unwrap(), "GET /api/properties/featured HTTP/1.1");
        assert_eq!(featured[0].id, "65a1");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;
        let api = api(&base);

        let err = api.search_locations("Jammu").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn malformed_body_is_a_payload_error() {
        let (base, server) = serve_once("200 OK", "{nope").await;
        let api = api(&base);

        let err = api.featured_properties().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Payload(_)));
    }
}
