//! Handle to a detached notification task.

use tokio::task::JoinHandle;
use uuid::Uuid;

/// A notification running in the background.
///
/// Dropping the handle detaches the task; it still runs to completion.
/// Awaiting it through [`Delivery::wait`] only waits; the outcome is
/// reported through the logger's own error record, not returned here.
#[derive(Debug)]
pub struct Delivery {
    id: Uuid,
    task: JoinHandle<()>,
}

impl Delivery {
    pub(crate) fn new(id: Uuid, task: JoinHandle<()>) -> Self {
        Self { id, task }
    }

    /// Identifier carried by the delivery's tracing span.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Wait for the attempt to finish, successfully or not.
    pub async fn wait(self) {
        if let Err(e) = self.task.await {
            tracing::warn!(delivery_id = %self.id, error = %e, "Notification task did not complete");
        }
    }
}
