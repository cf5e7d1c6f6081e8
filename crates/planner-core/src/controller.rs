//! Resource Controllers
//!
//! The async half of each view: load the list, submit the form, toggle a
//! task. Failures are logged and handed back; callers leave the form open
//! and keep the last list they had. Nothing is applied optimistically.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::client::{ApiClient, ApiError, ApiResult, HttpTransport};
use crate::domain::{DomainError, Resource, Task};
use crate::form::{FormState, Submission};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Blocked client-side; no request was sent
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The create or update call failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Fetch a view's list.
pub async fn load<R: Resource, T: HttpTransport>(client: &ApiClient<T>) -> ApiResult<Vec<R>> {
    client.list::<R>().await.inspect_err(|err| {
        error!(resource = R::COLLECTION, error = %err, "failed to fetch list");
    })
}

/// Validate and send the form, then re-fetch the list.
///
/// `Ok(None)` means the mutation landed but the re-fetch failed; the form
/// should still close, since resubmitting would duplicate a create.
pub async fn submit<R: Resource, T: HttpTransport>(
    client: &ApiClient<T>,
    form: &FormState<R::Draft>,
) -> Result<Option<Vec<R>>, SubmitError> {
    let submission = form.submission().inspect_err(|err| {
        warn!(resource = R::COLLECTION, error = %err, "submit blocked");
    })?;

    match submission {
        Submission::Create(payload) => {
            let created = client.create::<R>(&payload).await.inspect_err(|err| {
                error!(resource = R::COLLECTION, error = %err, "failed to create");
            })?;
            info!(resource = R::COLLECTION, id = %created.id(), "created");
        }
        Submission::Update { id, payload } => {
            client.update::<R>(&id, &payload).await.inspect_err(|err| {
                error!(resource = R::COLLECTION, %id, error = %err, "failed to update");
            })?;
            info!(resource = R::COLLECTION, %id, "updated");
        }
    }

    Ok(load::<R, T>(client).await.ok())
}

/// Flip a task's completion with a full update, then re-fetch.
pub async fn toggle_complete<T: HttpTransport>(client: &ApiClient<T>, task: &Task) -> ApiResult<Vec<Task>> {
    client
        .update::<Task>(&task.id, &task.toggled_payload())
        .await
        .inspect_err(|err| {
            error!(id = %task.id, error = %err, "failed to toggle task");
        })?;
    load::<Task, T>(client).await
}
