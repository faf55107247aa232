use garde::Validate;
use serde::{Deserialize, Serialize};

/// Job parameters submitted for a price suggestion.
///
/// Required fields are `Option` so that a field missing from the JSON body
/// reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[garde(required, length(min = 1))]
    pub service_type: Option<String>,

    #[garde(skip)]
    pub job_description: Option<String>,

    #[garde(required, length(min = 1))]
    pub location: Option<String>,

    /// Human-readable date such as "5 Dec, 24". Never parsed.
    #[garde(required, length(min = 1))]
    pub preferred_date: Option<String>,

    #[garde(skip)]
    pub historical_quote_data: Option<String>,
}

impl PricingRequest {
    pub fn new(
        service_type: impl Into<String>,
        location: impl Into<String>,
        preferred_date: impl Into<String>,
    ) -> Self {
        Self {
            service_type: Some(service_type.into()),
            job_description: None,
            location: Some(location.into()),
            preferred_date: Some(preferred_date.into()),
            historical_quote_data: None,
        }
    }

    pub fn with_job_description(mut self, description: impl Into<String>) -> Self {
        self.job_description = Some(description.into());
        self
    }

    pub fn with_historical_quote_data(mut self, data: impl Into<String>) -> Self {
        self.historical_quote_data = Some(data.into());
        self
    }

    /// JSON name of a field, given the Rust field name used in validation
    /// reports.
    pub fn wire_name(field: &str) -> &str {
        match field {
            "service_type" => "serviceType",
            "job_description" => "jobDescription",
            "location" => "location",
            "preferred_date" => "preferredDate",
            "historical_quote_data" => "historicalQuoteData",
            other => other,
        }
    }
}

/// Price suggestion produced by the completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    #[garde(skip)]
    pub suggested_price: f64,

    #[garde(length(min = 1))]
    pub reasoning: String,
}
