use std::{
    sync::{
        mpsc::{self, RecvTimeoutError, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::core::Clock;
use crate::storage::TimestampStore;

use super::{check_and_notify, NotificationPolicy, Notifier};

/// Background thread that runs [`check_and_notify`] once immediately and
/// then every `interval` until cancelled or dropped.
pub struct ReminderTask {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ReminderTask {
    pub fn spawn(
        interval: Duration,
        policy: NotificationPolicy,
        store: Arc<dyn TimestampStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            if let Err(err) =
                check_and_notify(&policy, store.as_ref(), notifier.as_ref(), clock.as_ref())
            {
                tracing::warn!(error = %err, "reminder check failed");
            }
            match stopped.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Stops the schedule and waits for an in-flight check to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    /// Blocks until the task ends; it only ends once cancelled elsewhere.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ReminderTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}
