use indexmap::IndexMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Result type for SDK calls.
pub type SdkResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct BoxRequest {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MaterialCostRequest {
    pub surface_area: f64,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCostResponse {
    pub material: String,
    pub surface_area_sqft: f64,
    pub estimated_cost: f64,
}

/// `{success, data}` envelope used by most endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub struct SuiteClient {
    client: Client,
    api_url: String,
}

impl SuiteClient {
    /// `base_url` is the server root, `prefix` the API mount point (e.g. "/api/v1").
    pub fn new(base_url: &str, prefix: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: format!("{}{}", base_url.trim_end_matches('/'), prefix),
        }
    }

    /// Calculate box properties. The result is returned as raw JSON
    /// (`dimensions`, `basic_calculations`, `geometry`, `practical`, `comparisons`).
    pub async fn calculate_box(
        &self,
        length: f64,
        width: f64,
        height: f64,
    ) -> SdkResult<serde_json::Value> {
        let resp = self
            .client
            .post(format!("{}/box-calculator", self.api_url))
            .json(&BoxRequest {
                length,
                width,
                height,
            })
            .send()
            .await?;

        let envelope: Envelope<serde_json::Value> = Self::parse(resp).await?;
        Ok(envelope.data)
    }

    /// Estimate material cost for a surface area in square inches.
    pub async fn material_cost(
        &self,
        surface_area: f64,
        material: &str,
    ) -> SdkResult<MaterialCostResponse> {
        let resp = self
            .client
            .post(format!("{}/material-cost", self.api_url))
            .json(&MaterialCostRequest {
                surface_area,
                material: material.to_string(),
            })
            .send()
            .await?;

        Self::parse(resp).await
    }

    /// Material key → description, in the server's catalog order.
    pub async fn materials(&self) -> SdkResult<IndexMap<String, String>> {
        let resp = self
            .client
            .get(format!("{}/materials", self.api_url))
            .send()
            .await?;

        let envelope: Envelope<IndexMap<String, String>> = Self::parse(resp).await?;
        Ok(envelope.data)
    }

    pub async fn calculator_info(&self) -> SdkResult<serde_json::Value> {
        let resp = self
            .client
            .get(format!("{}/calculator-info", self.api_url))
            .send()
            .await?;

        let envelope: Envelope<serde_json::Value> = Self::parse(resp).await?;
        Ok(envelope.data)
    }

    pub async fn health(&self) -> SdkResult<HealthResponse> {
        let resp = self
            .client
            .get(format!("{}/health", self.api_url))
            .send()
            .await?;

        Self::parse(resp).await
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> SdkResult<T> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Server returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str::<T>(&text)?)
    }
}
