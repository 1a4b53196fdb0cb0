use serde::{Deserialize, Serialize};

pub const SUCCESSFUL_RESPONSE: &str = "Successful response from the API";

/// Payload returned by the payment API when a token request succeeds.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentToken {
    pub data: String,
}

impl PaymentToken {
    pub fn successful() -> Self {
        Self {
            data: SUCCESSFUL_RESPONSE.to_string(),
        }
    }
}
