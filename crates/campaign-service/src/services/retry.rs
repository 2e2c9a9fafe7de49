//! Conflict retry for units of work

use std::future::Future;

use tracing::warn;

use campaign_core::error::DomainError;
use campaign_core::traits::RepoResult;

use super::error::{ServiceError, ServiceResult};

/// Attempts made before a conflicting write is reported as an internal error
pub(crate) const MAX_ATTEMPTS: u32 = 2;

/// Run `unit_of_work` again when it fails with `ReactionConflict`
///
/// Each call must open its own unit of work, so a retry starts from a clean
/// transaction. Any other error is returned immediately.
pub(crate) async fn retry_on_conflict<T, F, Fut>(
    operation: &'static str,
    mut unit_of_work: F,
) -> ServiceResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RepoResult<T>>,
{
    let mut attempt = 1;
    loop {
        match unit_of_work().await {
            Err(DomainError::ReactionConflict) if attempt < MAX_ATTEMPTS => {
                warn!(operation, attempt, "Write conflicted, retrying unit of work");
                attempt += 1;
            }
            Err(DomainError::ReactionConflict) => {
                return Err(ServiceError::internal(format!(
                    "{operation} still conflicting after {MAX_ATTEMPTS} attempts"
                )));
            }
            result => return result.map_err(ServiceError::from),
        }
    }
}
