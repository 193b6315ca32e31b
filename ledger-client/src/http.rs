//! HTTP client for the park backend REST API

use crate::config::ClientConfig;
use crate::domain::{Confirmation, SaleDomain};
use crate::error::{LedgerError, LedgerResult};
use crate::scope::Scope;
use serde::de::DeserializeOwned;
use shared::client::RejectionBody;
use shared::models::CatalogItem;

/// HTTP client for making requests to the park backend.
///
/// Stateless beyond the connection pool; every catalog and history
/// call re-fetches, nothing is cached across calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON body, reporting any failure as a detail string for
    /// the caller to wrap into its own error variant.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {}", url, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(format!("{} returned {}: {}", url, status, text));
        }

        response
            .json()
            .await
            .map_err(|e| format!("bad body from {}: {}", url, e))
    }

    /// Fetch a domain's catalog as normalized snapshot entries.
    pub async fn fetch_catalog<D: SaleDomain>(&self) -> LedgerResult<Vec<CatalogItem>> {
        let rows: Vec<D::CatalogRow> = self
            .get_json(D::catalog_path())
            .await
            .map_err(LedgerError::CatalogUnavailable)?;
        let items: Vec<CatalogItem> = rows.into_iter().map(D::catalog_item).collect();
        tracing::debug!(domain = %D::DOMAIN, count = items.len(), "fetched catalog");
        Ok(items)
    }

    /// Fetch a domain's raw sale rows for a resolved scope.
    pub async fn fetch_sales<D: SaleDomain>(&self, scope: &Scope) -> LedgerResult<Vec<D::SaleRow>> {
        let path = scope.sales_path(D::DOMAIN);
        self.get_json(&path)
            .await
            .map_err(|detail| LedgerError::AggregationFailed {
                domain: D::DOMAIN,
                detail,
            })
    }

    /// Submit one purchase. Exactly one POST per call.
    ///
    /// Non-2xx responses surface the backend's message verbatim when
    /// it sent one; transport failures become the generic retry error.
    pub async fn submit_purchase<D: SaleDomain>(
        &self,
        request: &D::PurchaseRequest,
    ) -> LedgerResult<Confirmation> {
        let url = self.url(D::purchase_path());
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(LedgerError::SubmissionNetworkError)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RejectionBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "purchase failed".to_string());
            tracing::warn!(domain = %D::DOMAIN, %status, "purchase rejected");
            return Err(LedgerError::SubmissionRejected(message));
        }

        let receipt: D::Receipt = response
            .json()
            .await
            .map_err(|e| LedgerError::InvalidResponse(e.to_string()))?;
        let confirmation = D::receipt(receipt);
        tracing::info!(
            domain = %D::DOMAIN,
            transaction_id = confirmation.transaction_id,
            "purchase confirmed"
        );
        Ok(confirmation)
    }
}
