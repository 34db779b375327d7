//! Trait definitions for the Feuilleton novel generation library.
//!
//! The single seam between the sequencing logic and concrete text-generation
//! backends is [`FeuilletonDriver`]: prompt in, completion text out.

use async_trait::async_trait;
use feuilleton_core::{GenerateRequest, GenerateResponse};
use feuilleton_error::FeuilletonResult;

/// A text-generation backend behind a uniform generate call.
///
/// Implementations map the request into the backend's wire format, perform
/// one blocking round trip (no streaming, no retry), and return the full
/// completion text. Failures propagate immediately to the caller.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use feuilleton_core::{GenerateRequest, GenerateResponse};
/// use feuilleton_error::FeuilletonResult;
/// use feuilleton_interface::FeuilletonDriver;
///
/// struct FixedDriver;
///
/// #[async_trait]
/// impl FeuilletonDriver for FixedDriver {
///     async fn generate(&self, _req: &GenerateRequest) -> FeuilletonResult<GenerateResponse> {
///         Ok(GenerateResponse { text: "第1章 初见：相遇".to_string() })
///     }
///
///     fn provider_name(&self) -> &'static str {
///         "fixed"
///     }
///
///     fn model_name(&self) -> &str {
///         "fixed-v1"
///     }
/// }
/// ```
#[async_trait]
pub trait FeuilletonDriver: Send + Sync {
    /// Send one prompt and return the full completion text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying call does not complete successfully.
    async fn generate(&self, req: &GenerateRequest) -> FeuilletonResult<GenerateResponse>;

    /// Name of the backend provider, for logging and tracing.
    fn provider_name(&self) -> &'static str;

    /// Name of the configured model.
    fn model_name(&self) -> &str;
}
