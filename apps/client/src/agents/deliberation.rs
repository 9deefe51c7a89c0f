//! Delayed, cancellable agent actions.
//!
//! Each agent owns one [`Deliberation`] with a slot per kind of action. A slot
//! holds at most one pending task: scheduling again cancels the previous one.
//! Cancellation only covers the delay; once a task has started its command it
//! runs to completion.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Pass,
    Play,
}

impl Slot {
    fn index(self) -> usize {
        match self {
            Slot::Pass => 0,
            Slot::Play => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Pass => "pass",
            Slot::Play => "play",
        }
    }
}

pub struct Deliberation {
    handle: Handle,
    slots: Mutex<[Option<CancellationToken>; 2]>,
}

impl Deliberation {
    /// Bind to the runtime the caller is running on.
    pub fn current() -> Result<Self, ClientError> {
        let handle = Handle::try_current()
            .map_err(|e| ClientError::runtime(format!("agents need a tokio runtime: {e}")))?;
        Ok(Self::new(handle))
    }

    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            slots: Mutex::new([None, None]),
        }
    }

    /// Run `task` after `delay` unless the slot is rescheduled or cancelled first.
    pub fn schedule<F>(&self, slot: Slot, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.slots.lock()[slot.index()].replace(token.clone()) {
            previous.cancel();
        }

        self.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    trace!(slot = slot.as_str(), "deliberation cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    task.await;
                }
            }
        });
    }

    pub fn cancel(&self, slot: Slot) {
        if let Some(token) = self.slots.lock()[slot.index()].take() {
            token.cancel();
        }
    }

    pub fn cancel_all(&self) {
        for token in self.slots.lock().iter_mut().filter_map(Option::take) {
            token.cancel();
        }
    }

    /// Whether the slot holds a task that has not been cancelled.
    ///
    /// A task that already fired still counts until the slot is reused or cancelled.
    pub fn is_scheduled(&self, slot: Slot) -> bool {
        self.slots.lock()[slot.index()]
            .as_ref()
            .is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for Deliberation {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
