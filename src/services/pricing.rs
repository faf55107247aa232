use std::sync::Arc;
use std::time::Instant;

use garde::Validate;
use serde_json::Value;
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;

use crate::models::pricing::{PricingRequest, PricingResponse};
use crate::services::completion::{
    CompletionService, FieldKind, OutputField, OutputShape, UpstreamError,
};
use crate::services::prompt::render_pricing_prompt;

/// Output shape requested from the completion service.
pub const PRICING_SHAPE: OutputShape = OutputShape {
    fields: &[
        OutputField {
            name: "suggestedPrice",
            kind: FieldKind::Number,
            description: "The suggested price for the service.",
        },
        OutputField {
            name: "reasoning",
            kind: FieldKind::String,
            description: "The reasoning behind the suggested price.",
        },
    ],
};

/// Suggests a price for a job by asking a completion service.
///
/// Holds no per-call state; concurrent calls share only the completion
/// handle.
#[derive(Clone)]
pub struct PricingAdvisor {
    completion: Arc<dyn CompletionService>,
}

impl PricingAdvisor {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }

    /// Validate `request`, ask the completion service for a price, and
    /// return the reply exactly as parsed.
    ///
    /// An invalid request fails before any outbound call. There are no
    /// retries and no fallback price.
    pub async fn suggest_price(
        &self,
        request: &PricingRequest,
    ) -> Result<PricingResponse, PricingError> {
        let span = tracing::info_span!(
            "suggest_price",
            request_id = %Uuid::new_v4(),
            service_type = request.service_type.as_deref().unwrap_or(""),
        );

        async {
            metrics::counter!("pricing_requests_total").increment(1);

            if let Err(report) = request.validate() {
                warn!(errors = %report, "Rejected pricing request");
                metrics::counter!("pricing_requests_failed", "kind" => "validation").increment(1);
                return Err(PricingError::Validation(ValidationError::from(report)));
            }

            let prompt = render_pricing_prompt(request);
            let start = Instant::now();
            let outcome = self
                .completion
                .complete(&prompt, &PRICING_SHAPE)
                .await
                .and_then(parse_reply);
            metrics::histogram!("pricing_upstream_seconds").record(start.elapsed().as_secs_f64());

            match outcome {
                Ok(response) => {
                    info!(suggested_price = response.suggested_price, "Price suggested");
                    Ok(response)
                }
                Err(e) => {
                    error!(error = %e, "Pricing upstream call failed");
                    metrics::counter!("pricing_requests_failed", "kind" => "upstream").increment(1);
                    Err(PricingError::Upstream(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Check a completion reply against the pricing shape. Nothing is coerced:
/// a quoted number is as wrong as a missing one.
pub fn parse_reply(reply: Value) -> Result<PricingResponse, UpstreamError> {
    let Value::Object(fields) = &reply else {
        return Err(UpstreamError::Shape(format!(
            "expected a JSON object, got {}",
            json_kind(&reply)
        )));
    };

    for field in PRICING_SHAPE.fields {
        let value = fields
            .get(field.name)
            .ok_or_else(|| UpstreamError::Shape(format!("missing field `{}`", field.name)))?;
        let matches = match field.kind {
            FieldKind::Number => value.is_number(),
            FieldKind::String => value.is_string(),
        };
        if !matches {
            return Err(UpstreamError::Shape(format!(
                "field `{}` must be a {}, got {}",
                field.name,
                field.kind.schema_type(),
                json_kind(value)
            )));
        }
    }

    let response: PricingResponse = serde_json::from_value(reply)?;
    response
        .validate()
        .map_err(|report| UpstreamError::Shape(report.to_string()))?;
    Ok(response)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Required request fields that were missing or empty, named as they
/// appear on the wire.
#[derive(Debug, thiserror::Error)]
#[error("Invalid pricing request: {summary}")]
pub struct ValidationError {
    fields: Vec<String>,
    summary: String,
}

impl ValidationError {
    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl From<garde::Report> for ValidationError {
    fn from(report: garde::Report) -> Self {
        let mut fields = Vec::new();
        let mut problems = Vec::new();
        for (path, error) in report.iter() {
            let name = PricingRequest::wire_name(&path.to_string()).to_string();
            problems.push(format!("{}: {}", name, error.to_string().trim_end()));
            fields.push(name);
        }

        Self {
            fields,
            summary: problems.join("; "),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Pricing service unavailable: {0}")]
    Upstream(#[from] UpstreamError),
}
