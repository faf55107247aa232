use crate::models::pricing::PricingRequest;

const PRICING_TEMPLATE: &str = "\
You are an expert pricing strategist for service providers. Based on the job details, location, and market trends, suggest an optimal price for the service.

Service Type: {serviceType}
Job Description: {jobDescription}
Location: {location}
Preferred Date: {preferredDate}
Historical Quote Data: {historicalQuoteData}

Consider these factors when determining the price:
- The type of service being requested.
- The location of the service.
- The preferred date of the service.
- Any additional details provided in the job description.
- Historical quote data for similar jobs in the area.

Provide a suggested price and a brief explanation of your reasoning.
";

/// Render the pricing prompt for a request.
///
/// Field values are substituted verbatim; absent fields render as empty.
/// Substitution is a single left-to-right pass, so placeholder-like text
/// inside a value is never expanded.
pub fn render_pricing_prompt(request: &PricingRequest) -> String {
    let fields: [(&str, &Option<String>); 5] = [
        ("serviceType", &request.service_type),
        ("jobDescription", &request.job_description),
        ("location", &request.location),
        ("preferredDate", &request.preferred_date),
        ("historicalQuoteData", &request.historical_quote_data),
    ];

    let mut out = String::with_capacity(PRICING_TEMPLATE.len() + 256);
    let mut rest = PRICING_TEMPLATE;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after
            .find('}')
            .map(|close| &after[..close])
            .and_then(|name| fields.iter().find(|(key, _)| *key == name));

        match placeholder {
            Some((name, value)) => {
                out.push_str(value.as_deref().unwrap_or(""));
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
