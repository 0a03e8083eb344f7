//! HTTP client for the openFDA NDC directory.
//!
//! openFDA answers a search with no hits as HTTP 404 and an error envelope,
//! so 404 is folded into `Ok(None)` alongside an empty `results` array.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::RegistryError;
use crate::types::{NdcProduct, NdcSearchResponse};

const NDC_PATH: &str = "drug/ndc.json";

/// Client for `GET /drug/ndc.json?search=...`.
///
/// Use [`RegistryClient::new`] with `https://api.fda.gov` in production or a
/// wiremock URI in tests.
pub struct RegistryClient {
    client: Client,
    endpoint: Url,
}

impl RegistryClient {
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RegistryError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(NDC_PATH))
            .map_err(|e| RegistryError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Looks up a product by the decoded barcode payload, used verbatim as
    /// the `product_ndc` search term.
    ///
    /// Returns the first matching product, or `None` if nothing matched.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Http`] on network failure.
    /// - [`RegistryError::UnexpectedStatus`] on any non-2xx status except 404.
    /// - [`RegistryError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn lookup_product_ndc(
        &self,
        payload: &str,
    ) -> Result<Option<NdcProduct>, RegistryError> {
        let url = self.search_url(payload.trim());
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::info!(payload, "no registry match");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(RegistryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: NdcSearchResponse =
            serde_json::from_str(&body).map_err(|e| RegistryError::Deserialize {
                context: format!("ndc search for {payload}"),
                source: e,
            })?;

        let product = parsed.results.into_iter().next().map(NdcProduct::from);
        tracing::info!(payload, found = product.is_some(), "registry lookup complete");
        Ok(product)
    }

    fn search_url(&self, payload: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("search", &format!("product_ndc:{payload}"));
        url
    }
}
