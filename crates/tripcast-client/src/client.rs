use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tripcast_core::{
    ClientConfig, ClientError, EvaluationResult, MapSelection, PredictionResult, Result,
    TripForm, TripRequest, Variant,
};

/// Talks to the predict/results service on behalf of one page variant.
#[derive(Debug, Clone)]
pub struct PredictClient {
    base: Url,
    variant: Variant,
    client: reqwest::Client,
}

impl PredictClient {
    pub fn new(base_url: &str, variant: Variant) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| ClientError::Transport(format!("Invalid base URL {}: {}", base_url, e)))?;

        Ok(Self {
            base,
            variant,
            client: reqwest::Client::new(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.base_url, config.variant)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Resolves a path the way a browser resolves it against the page URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| ClientError::Transport(format!("Invalid path {}: {}", path, e)))
    }

    /// Validates the typed fields, then posts them. Nothing is sent if a field is blank.
    pub async fn predict_form(&self, form: TripForm) -> Result<PredictionResult> {
        let request = TripRequest::from_form(form, self.variant, Utc::now())?;
        self.predict(&request).await
    }

    /// Posts the two selected map points. Nothing is sent until both exist.
    pub async fn predict_selection(&self, selection: &MapSelection) -> Result<PredictionResult> {
        let request = TripRequest::from_selection(selection)?;
        self.predict(&request).await
    }

    pub async fn predict(&self, request: &TripRequest) -> Result<PredictionResult> {
        let url = self.endpoint(self.variant.predict_path())?;
        let body = request.to_json()?;
        tracing::debug!("POST {} {}", url, body);

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;
        tracing::debug!("Predict responded {}", status);

        PredictionResult::from_body(&text).inspect_err(|e| {
            tracing::warn!("Predict failed ({}): {}", status, e);
        })
    }

    pub async fn results(&self) -> Result<EvaluationResult> {
        let url = self.endpoint(self.variant.results_path())?;
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await.map_err(transport)?;

        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;
        tracing::debug!("Results responded {}", status);

        EvaluationResult::from_body(&text).inspect_err(|e| {
            tracing::warn!("Results failed ({}): {}", status, e);
        })
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    tracing::warn!("Request failed: {}", e);
    ClientError::Transport(e.to_string())
}
