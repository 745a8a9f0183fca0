//! Logging port used by the registration handler.

use crate::task::error::RegistrationError;

/// Leveled logging capability.
///
/// Implementations must be safe to call concurrently. Delivery is best
/// effort: a logger must never fail the operation that calls it.
pub trait TaskLogger: Send + Sync {
    /// Records a debug-level progress message.
    fn debug(&self, message: &str);

    /// Records an error-level message together with the originating error.
    fn error(&self, message: &str, error: &RegistrationError);
}
