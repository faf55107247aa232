//! Request and reply fixtures shared by the integration tests

use serde_json::{json, Value};

pub const ACCOUNT_ID: &str = "test-account";
pub const API_TOKEN: &str = "test-token";
pub const MODEL: &str = "@cf/meta/llama-3.1-8b-instruct";

/// The plumbing job used throughout the pricing scenarios.
pub fn plumbing_request() -> Value {
    json!({
        "serviceType": "Plumbing",
        "location": "Austin, TX",
        "preferredDate": "5 Dec, 24"
    })
}

/// A successful Workers AI envelope wrapping `response`.
pub fn workers_ai_envelope(response: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": { "response": response }
    })
}

/// A well-formed pricing reply.
pub fn pricing_reply(price: f64, reasoning: &str) -> Value {
    workers_ai_envelope(json!({
        "suggestedPrice": price,
        "reasoning": reasoning
    }))
}
