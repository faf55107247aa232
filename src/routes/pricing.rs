use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::job::ServiceType;
use crate::models::pricing::{PricingRequest, PricingResponse};
use crate::services::pricing::PricingError;

/// POST /api/v1/pricing/suggest — Suggest a price for a job request.
pub async fn suggest_price(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> Result<Json<PricingResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.advisor.suggest_price(&request).await?;
    Ok(Json(response))
}

/// GET /api/v1/service-types — Service types offered on the job form.
pub async fn list_service_types() -> Json<Vec<String>> {
    Json(ServiceType::catalogue())
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Error returned by pricing handlers. Messages pass through verbatim.
///
/// A body that is not valid JSON for `PricingRequest` is reported like any
/// other validation failure.
#[derive(Debug)]
pub enum ApiError {
    Pricing(PricingError),
    Body(JsonRejection),
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        Self::Pricing(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Pricing(PricingError::Validation(e)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: e.to_string(),
                    kind: "validation",
                    fields: e.fields().to_vec(),
                },
            ),
            ApiError::Pricing(err @ PricingError::Upstream(_)) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    error: err.to_string(),
                    kind: "upstream",
                    fields: Vec::new(),
                },
            ),
            ApiError::Body(rejection) => {
                tracing::warn!(status = %rejection.status(), "Rejected pricing request body");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: rejection.body_text(),
                        kind: "validation",
                        fields: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
