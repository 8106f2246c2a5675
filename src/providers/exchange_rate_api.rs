use crate::core::currency::{RateSource, RateTable};
use crate::core::error::{FxError, FxResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Rate source backed by the `/v4/latest/{base}` endpoint of exchangerate-api.com.
pub struct ExchangeRateApiSource {
    base_url: String,
    base_currency: String,
    client: reqwest::Client,
}

impl ExchangeRateApiSource {
    pub fn new(base_url: &str, base_currency: &str, timeout: Duration) -> FxResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent("visa-desk/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| FxError::SourceUnavailable(format!("HTTP client error: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            base_currency: base_currency.to_uppercase(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateSource for ExchangeRateApiSource {
    fn base_currency(&self) -> &str {
        &self.base_currency
    }

    #[instrument(name = "ExchangeRateFetch", skip(self), fields(base = %self.base_currency))]
    async fn fetch_rates(&self) -> FxResult<RateTable> {
        let url = format!("{}/v4/latest/{}", self.base_url, self.base_currency);
        debug!("Requesting exchange rates from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            let reason = if e.is_timeout() { "timed out" } else { "failed" };
            FxError::SourceUnavailable(format!("Request {reason}: {e} URL: {url}"))
        })?;

        if !response.status().is_success() {
            return Err(FxError::SourceUnavailable(format!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                self.base_currency
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FxError::SourceUnavailable(format!("Failed to read response: {e}")))?;

        let data: LatestRatesResponse = serde_json::from_str(&text).map_err(|e| {
            FxError::SourceUnavailable(format!(
                "Failed to parse JSON response for {}: {}",
                self.base_currency, e
            ))
        })?;

        let mut rates = RateTable::new();
        for (code, rate) in data.rates {
            if rate.is_finite() && rate > 0.0 {
                rates.insert(code.to_uppercase(), rate);
            } else {
                warn!(%code, rate, "Ignoring invalid exchange rate");
            }
        }
        debug!(count = rates.len(), "Parsed exchange rates");
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LATEST_PATH: &str = "/v4/latest/USD";

    async fn mount(mock_server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(response)
            .mount(mock_server)
            .await;
    }

    fn source(mock_server: &MockServer) -> ExchangeRateApiSource {
        ExchangeRateApiSource::new(&mock_server.uri(), "usd", DEFAULT_TIMEOUT).unwrap()
    }

    #[tokio::test]
    async fn test_successful_rates_fetch() {
        let mock_server = MockServer::start().await;
        let mock_response = r#"{
            "provider": "https://www.exchangerate-api.com",
            "base": "USD",
            "date": "2026-10-19",
            "time_last_updated": 1760832000,
            "rates": { "USD": 1, "EUR": 0.9, "GBP": 0.79, "JPY": 149.5 }
        }"#;
        mount(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(mock_response),
        )
        .await;

        let provider = source(&mock_server);
        assert_eq!(provider.base_currency(), "USD");

        let rates = provider.fetch_rates().await.expect("Failed to get rates");
        assert_eq!(rates.len(), 4);
        assert_eq!(rates.get("EUR"), Some(&0.9));
        assert_eq!(rates.get("JPY"), Some(&149.5));
    }

    #[tokio::test]
    async fn test_invalid_rates_are_dropped() {
        let mock_server = MockServer::start().await;
        mount(
            &mock_server,
            ResponseTemplate::new(200)
                .set_body_string(r#"{"rates": {"eur": 0.9, "XXX": 0, "YYY": -2.5}}"#),
        )
        .await;

        let rates = source(&mock_server).fetch_rates().await.unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates.get("EUR"), Some(&0.9));
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = MockServer::start().await;
        mount(&mock_server, ResponseTemplate::new(500)).await;

        let err = source(&mock_server).fetch_rates().await.unwrap_err();
        assert_eq!(
            err,
            FxError::SourceUnavailable(
                "HTTP error: 500 Internal Server Error for base currency: USD".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_server = MockServer::start().await;
        mount(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(r#"{"conversion_rates": {}}"#),
        )
        .await;

        let err = source(&mock_server).fetch_rates().await.unwrap_err();
        match err {
            FxError::SourceUnavailable(reason) => {
                assert!(reason.contains("Failed to parse JSON response for USD"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let mock_server = MockServer::start().await;
        mount(
            &mock_server,
            ResponseTemplate::new(200)
                .set_body_string(r#"{"rates": {"EUR": 0.9}}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let provider =
            ExchangeRateApiSource::new(&mock_server.uri(), "USD", Duration::from_millis(50))
                .unwrap();
        let err = provider.fetch_rates().await.unwrap_err();
        assert!(matches!(err, FxError::SourceUnavailable(_)));
    }
}
