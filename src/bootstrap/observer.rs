//! Keeps a widget's binding in step with the host root

use crate::host::{HandleBinding, SharedHandle};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Rebind `binding` every time the root publishes a different handle.
///
/// `handles` must be the receiver the initial handle was read from, so a
/// replacement published in between is still reported as a change.
/// A withdrawn handle is ignored; the binding keeps the last one it saw.
/// Stops when `cancel` fires or the root goes away.
pub fn spawn_handle_observer(
    mut handles: watch::Receiver<Option<SharedHandle>>,
    binding: Arc<HandleBinding>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                changed = handles.changed() => {
                    if changed.is_err() {
                        tracing::debug!("Host root dropped; stopping handle observer");
                        break;
                    }
                    let latest = handles.borrow_and_update().clone();
                    if let Some(handle) = latest {
                        if binding.rebind_if_changed(&handle) {
                            tracing::debug!("Host handle replaced; widget rebound");
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::MockHandle;
    use crate::host::HostRoot;
    use std::time::Duration;

    async fn wait_until(mut condition: impl FnMut() -> bool) {
        tokio::time::timeout(Duration::from_secs(1), async {
            while !condition() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("condition should become true");
    }

    #[tokio::test]
    async fn test_follows_replacements_and_ignores_withdrawal() {
        let first: SharedHandle = Arc::new(MockHandle::new());
        let second: SharedHandle = Arc::new(MockHandle::new());
        let root = HostRoot::with_handle(first.clone());
        let binding = Arc::new(HandleBinding::new(&first));
        let cancel = CancellationToken::new();
        let task = spawn_handle_observer(root.observe(), binding.clone(), cancel.clone());

        root.publish(second.clone());
        wait_until(|| binding.is_bound_to(&second)).await;

        root.withdraw();
        tokio::task::yield_now().await;
        assert!(binding.is_bound_to(&second));

        cancel.cancel();
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_stops_when_root_dropped() {
        let first: SharedHandle = Arc::new(MockHandle::new());
        let root = HostRoot::with_handle(first.clone());
        let binding = Arc::new(HandleBinding::new(&first));
        let task = spawn_handle_observer(root.observe(), binding, CancellationToken::new());

        drop(root);

        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("observer should stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_replacement_before_spawn_is_not_missed() {
        let first: SharedHandle = Arc::new(MockHandle::new());
        let second: SharedHandle = Arc::new(MockHandle::new());
        let root = HostRoot::with_handle(first.clone());

        let mut handles = root.observe();
        let initial = handles.borrow_and_update().clone().unwrap();
        let binding = Arc::new(HandleBinding::new(&initial));
        // Host replaces its handle after the initial read but before the
        // observer task starts
        root.publish(second.clone());

        let cancel = CancellationToken::new();
        let task = spawn_handle_observer(handles, binding.clone(), cancel.clone());

        wait_until(|| binding.is_bound_to(&second)).await;
        assert!(!binding.is_bound_to(&first));

        cancel.cancel();
        task.await.unwrap();
    }
}
