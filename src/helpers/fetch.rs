use std::future::Future;

use reqwest::{header, Client};
use tracing::{error, info};

use crate::constants::{MAX_ERROR_BODY_CHARS, USER_AGENT};
use crate::error::{Error, Result};

/// Source of booking page markup.
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches pages with a single GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> Result<Self> {
        info!("Initializing booking page client");
        let client = Client::builder()
            .default_headers(default_headers())
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        info!("Fetching booking page: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Error fetching the page: {}", e);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map(|text| body_excerpt(&text))
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Booking page returned error status {}", status);
            return Err(Error::Status { status, body });
        }

        match response.text().await {
            Ok(text) => {
                info!("Received booking page, {} chars", text.len());
                Ok(text)
            }
            Err(e) => {
                error!("Failed to read response body: {}", e);
                Err(e.into())
            }
        }
    }
}

/// Error pages can be whole HTML documents; keep a short single-line excerpt.
fn body_excerpt(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_ERROR_BODY_CHARS {
        return flat;
    }
    let mut excerpt: String = flat.chars().take(MAX_ERROR_BODY_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

fn default_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers
}
