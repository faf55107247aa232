use async_trait::async_trait;
use serde_json::{json, Map, Value};

/// JSON type of a field in a structured completion reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    String,
}

impl FieldKind {
    pub fn schema_type(self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::String => "string",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OutputField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

/// Target shape for a structured completion reply.
#[derive(Debug, Clone, Copy)]
pub struct OutputShape {
    pub fields: &'static [OutputField],
}

impl OutputShape {
    /// JSON schema requiring every field and nothing else.
    pub fn json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| {
                (
                    f.name.to_string(),
                    json!({ "type": f.kind.schema_type(), "description": f.description }),
                )
            })
            .collect();
        let required: Vec<&str> = self.fields.iter().map(|f| f.name).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        })
    }
}

/// A text-completion capability that returns structured content.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `prompt` and return the reply, which the service was asked to
    /// shape as `shape`. Callers must still check the reply against it.
    async fn complete(&self, prompt: &str, shape: &OutputShape) -> Result<Value, UpstreamError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion service reported errors: {0}")]
    Api(String),

    #[error("Completion service returned no output")]
    EmptyReply,

    #[error("Failed to parse completion reply as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Completion reply does not match the expected shape: {0}")]
    Shape(String),
}
