use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Service types offered on the job-posting form.
///
/// Advisory only: `PricingRequest::service_type` stays free text.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq,
)]
pub enum ServiceType {
    Plumbing,
    Carpentry,
    #[strum(serialize = "Electrical Work")]
    #[serde(rename = "Electrical Work")]
    ElectricalWork,
    Housekeeping,
}

impl ServiceType {
    /// Display labels for every catalogue entry, in form order.
    pub fn catalogue() -> Vec<String> {
        Self::iter().map(|s| s.to_string()).collect()
    }
}
