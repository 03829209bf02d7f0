use actix_web::HttpResponse;
use serde::Serialize;
use tracing::warn;
use validator::ValidationErrors;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fields: serde_json::Value,
}

impl ErrorResponse {
    pub fn validation(errors: &ValidationErrors) -> Self {
        ErrorResponse {
            error: "Validation failed".to_string(),
            fields: field_errors(errors),
        }
    }
}

/// Render validator errors as `{"<field>": {"errors": [...]}}`
pub fn field_errors(errors: &ValidationErrors) -> serde_json::Value {
    let mut fields = serde_json::Map::new();

    for (field, errors) in errors.field_errors() {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation error in field: {}", field))
            })
            .collect();
        fields.insert(field.to_string(), serde_json::json!({"errors": messages}));
    }

    serde_json::Value::Object(fields)
}

/// Map a JSON body deserialization failure to per-field messages
fn deserialize_errors(err_string: &str) -> serde_json::Value {
    let mut fields = serde_json::Map::new();

    if err_string.contains("EOF while parsing") {
        fields.insert(
            "message".to_string(),
            serde_json::json!("Request body is empty. Expected JSON payload"),
        );
    } else if err_string.contains("unknown variant") || err_string.contains("expected job status") {
        // status is the only enum in the job payloads; a non-string value
        // fails with "invalid type: ..., expected job status"
        fields.insert(
            "status".to_string(),
            serde_json::json!({"errors": ["Status must be one of: unassigned, open, completed"]}),
        );
    } else if let Some(field) = missing_field(err_string) {
        fields.insert(
            field.to_string(),
            serde_json::json!({"errors": ["This field is required"]}),
        );
    } else {
        fields.insert("message".to_string(), serde_json::json!("Invalid JSON format"));
    }

    serde_json::Value::Object(fields)
}

/// Extract `name` from serde's "missing field `name`" message
fn missing_field(err_string: &str) -> Option<&str> {
    let rest = err_string.split("missing field `").nth(1)?;
    rest.split('`').next()
}

/// Creates a configured JsonConfig with standardized error handling for the entire project
pub fn json_config(limit: usize) -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            warn!("Rejected {} {}: {}", req.method(), req.path(), err);

            let error_response = match err {
                actix_web_validator::Error::Validate(validation_errors) => {
                    ErrorResponse::validation(&validation_errors)
                }
                actix_web_validator::Error::Deserialize(de_err) => ErrorResponse {
                    error: "Request validation failed".to_string(),
                    fields: deserialize_errors(&de_err.to_string()),
                },
                other => ErrorResponse {
                    error: "Validation failed".to_string(),
                    fields: serde_json::json!({"message": other.to_string()}),
                },
            };

            actix_web::error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(error_response),
            )
            .into()
        })
}
