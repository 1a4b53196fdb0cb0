use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::format::format_number;

pub const WELCOME_MESSAGE: &str = "Welcome to the payment system";
pub const BAD_REQUEST: &str = "Bad Request";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct PaymentMethods {
    pub credit_cards: bool,
    pub paypal: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct AvailablePayments {
    pub payment_methods: PaymentMethods,
}

impl Default for AvailablePayments {
    fn default() -> Self {
        Self {
            payment_methods: PaymentMethods {
                credit_cards: true,
                paypal: false,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userName", default)]
    pub user_name: Option<Value>,
}

pub async fn index() -> &'static str {
    WELCOME_MESSAGE
}

/// Cart ids are one or more ASCII digits; anything else is not a route.
pub async fn cart(Path(id): Path<String>) -> Response {
    if is_numeric_id(&id) {
        (StatusCode::OK, format!("Payment methods for cart {}", id)).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Wrong method on a known path is answered like an unknown path.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub async fn available_payments() -> Json<AvailablePayments> {
    Json(AvailablePayments::default())
}

pub async fn login(payload: Result<Json<LoginRequest>, JsonRejection>) -> Response {
    let name = match payload {
        Ok(Json(request)) => request.user_name.as_ref().and_then(display_name),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "login body rejected");
            None
        }
    };

    match name {
        Some(name) => (StatusCode::OK, format!("Welcome {}", name)).into_response(),
        None => (StatusCode::BAD_REQUEST, BAD_REQUEST).into_response(),
    }
}

fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the greeting name when `userName` is truthy.
///
/// Null, `false`, `0` and the empty string are falsy. Arrays and objects are
/// truthy and render as string interpolation would (`a,b`, `[object Object]`).
fn display_name(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64().is_none_or(|f| f == 0.0) => None,
        other => Some(interpolate(other)),
    }
}

fn interpolate(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => interpolate(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
