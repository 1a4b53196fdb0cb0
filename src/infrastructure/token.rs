use crate::domain::ports::PaymentTokenProvider;
use crate::domain::token::PaymentToken;
use async_trait::async_trait;

/// Token provider that answers immediately with a fixed payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticTokenProvider;

impl StaticTokenProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentTokenProvider for StaticTokenProvider {
    async fn payment_token(&self, success: bool) -> Option<PaymentToken> {
        if success {
            Some(PaymentToken::successful())
        } else {
            tracing::debug!("payment token request declined");
            None
        }
    }
}
