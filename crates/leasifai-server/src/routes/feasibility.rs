//! Feasibility study route.

use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use leasifai_core::Error;
use leasifai_core::types::{BusinessDetails, FeasibilityAnalysis, PropertyDetails};

use crate::error::ApiError;
use crate::state::AppState;

/// Feasibility request body. Both halves are required; they are optional
/// here only so the handler can answer their absence with the documented
/// 400 body instead of a generic deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct FeasibilityRequest {
    #[serde(default)]
    pub property: Option<PropertyDetails>,
    #[serde(default)]
    pub business: Option<BusinessDetails>,
}

/// Handle a feasibility study request.
///
/// The body is parsed once; the same parsed value feeds both the provider
/// prompt and, if needed, the fallback synthesis. Provider or parse failure
/// is never surfaced: the caller always receives a complete analysis.
pub async fn feasibility(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FeasibilityRequest>,
) -> Result<Json<FeasibilityAnalysis>, ApiError> {
    let (Some(property), Some(business)) = (request.property, request.business) else {
        return Err(ApiError::bad_request(Error::MissingDetails.to_string()));
    };

    let outcome = state.feasibility.analyze(&property, &business).await;
    info!(fallback = outcome.is_fallback(), "feasibility analysis complete");

    Ok(Json(outcome.into_analysis()))
}
