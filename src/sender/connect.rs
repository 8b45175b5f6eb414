//! Connection establishment with a hard timeout

use std::time::Duration;

use super::errors::SenderError;
use super::sources::UtxoSource;

/// Race the source's connect against a fixed timeout.
///
/// Exactly one outcome is observed. On timeout the in-flight connect
/// future is dropped, which cancels it at its next suspension point; it
/// is never invoked a second time and a late settlement cannot leak. A
/// connect error that arrives first is surfaced unchanged. No retry at
/// this layer.
pub async fn connect_with_timeout(
    source: &dyn UtxoSource,
    limit: Duration,
) -> Result<(), SenderError> {
    match tokio::time::timeout(limit, source.connect()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(SenderError::External(e)),
        Err(_elapsed) => Err(SenderError::ConnectionTimedOut(limit)),
    }
}
