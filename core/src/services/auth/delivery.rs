//! OTP delivery channel abstraction

use async_trait::async_trait;
use tracing::info;

/// Delivery channel trait for handing a generated code to its recipient
///
/// Production implementations wrap an SMS or messaging gateway; the
/// orchestrator only needs fire-and-forget semantics with a string
/// error for logging.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Deliver `code` to the recipient identified by `key`
    async fn deliver(&self, key: &str, code: &str) -> Result<(), String>;
}

/// Development delivery channel that writes codes to the log instead of
/// sending them anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDelivery;

#[async_trait]
impl DeliveryChannel for ConsoleDelivery {
    async fn deliver(&self, key: &str, code: &str) -> Result<(), String> {
        info!(
            recipient = %key,
            otp_code = %code,
            event = "otp_delivered",
            "OTP code ready for delivery"
        );
        Ok(())
    }
}
