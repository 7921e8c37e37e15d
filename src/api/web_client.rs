use crate::api::{ApiError, ApiResponse, PlacesClient};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, ClientBuilder};
use url::Url;

/// HTTP access to the places endpoint.
pub struct WebClient {
    base: Url,
    client: Client,
}

impl WebClient {
    pub fn new(api_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(api_url)?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::Message(format!(
                "unsupported scheme `{}` in api url {api_url}",
                base.scheme()
            )));
        }

        let client = ClientBuilder::default()
            .user_agent(concat!("places-web/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base, client })
    }

    fn place_url(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            urlencoding::encode(id)
        )
    }

    async fn fetch(&self, url: &str) -> Result<ApiResponse, ApiError> {
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("GET {url} -> {status} ({} bytes)", body.len());

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl PlacesClient for WebClient {
    fn collection_url(&self) -> String {
        self.base.to_string()
    }

    async fn get_collection(&self) -> Result<ApiResponse, ApiError> {
        self.fetch(self.base.as_str()).await
    }

    async fn get_place(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.fetch(&self.place_url(id)).await
    }
}
