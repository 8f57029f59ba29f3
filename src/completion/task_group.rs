//! Launch-ordered join barrier over spawned tokio tasks.

use std::future::Future;
use tokio::task::{JoinError, JoinHandle};

/// A group of concurrently running tasks whose results come back in launch order.
///
/// Every task starts running as soon as it is spawned. [`TaskGroup::join`] waits
/// for all of them and returns one result per task, indexed the way the tasks
/// were spawned, regardless of which finished first. Tasks still running when
/// the group is dropped are aborted.
pub struct TaskGroup<T> {
    handles: Vec<JoinHandle<T>>,
}

impl<T: Send + 'static> TaskGroup<T> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Spawn a task, returning its launch index.
    pub fn spawn<F>(&mut self, future: F) -> usize
    where
        F: Future<Output = T> + Send + 'static,
    {
        self.handles.push(tokio::spawn(future));
        self.handles.len() - 1
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every task. A panicked task yields its `JoinError` in its slot.
    pub async fn join(mut self) -> Vec<Result<T, JoinError>> {
        futures::future::join_all(self.handles.iter_mut()).await
    }
}

impl<T: Send + 'static> Default for TaskGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for TaskGroup<T> {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
