use std::sync::Arc;

use super::{AppState, error::ApiResult, extract::AppQuery};
use crate::core::{ConversionRequest, ConversionResult};
use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::{Deserialize, Serialize};

/// Raw query parameters; validated by [`ConversionRequest::parse`].
#[derive(Debug, Deserialize)]
struct ConvertParams {
    amount: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

#[derive(Debug, Serialize)]
struct SupportedCurrencies {
    currencies: Vec<String>,
}

async fn convert(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<ConvertParams>,
) -> ApiResult<Json<ConversionResult>> {
    let request = ConversionRequest::parse(
        params.amount.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
    )?;
    let result = state
        .converter
        .convert(request.amount, &request.from, &request.to)
        .await?;
    Ok(Json(result))
}

async fn supported_currencies(State(state): State<Arc<AppState>>) -> Json<SupportedCurrencies> {
    Json(SupportedCurrencies {
        currencies: state.converter.supported_currencies(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currency/convert", get(convert))
        .route("/currency/supported", get(supported_currencies))
}
