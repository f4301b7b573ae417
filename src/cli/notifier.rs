use crate::config::Config;
use crate::errors::Result;
use crate::notify::{Notifier, Permission};

use super::output::{self, MessageKind, NoticeQueue};

/// Shows reminders as highlighted lines on the guard's terminal.
///
/// Permission is whatever the config says; there is nobody to ask.
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    enabled: bool,
    deferred: Option<NoticeQueue>,
}

impl TerminalNotifier {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            deferred: None,
        }
    }

    /// Queues reminders on `queue` instead of printing them, for use while
    /// an interactive prompt owns the terminal.
    pub fn deferred(mut self, queue: NoticeQueue) -> Self {
        self.deferred = Some(queue);
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.notifications_enabled)
    }
}

impl Notifier for TerminalNotifier {
    fn permission(&self) -> Permission {
        if self.enabled {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn request_permission(&self) -> Permission {
        self.permission()
    }

    fn notify(&self, title: &str, body: &str) -> Result<()> {
        let line = format!("{title}: {body}");
        match &self.deferred {
            Some(queue) => queue.push(MessageKind::Warning, line),
            None => output::warning(line),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_follows_config() {
        let mut config = Config::default();
        assert_eq!(
            TerminalNotifier::from_config(&config).request_permission(),
            Permission::Granted
        );
        config.notifications_enabled = false;
        assert_eq!(
            TerminalNotifier::from_config(&config).permission(),
            Permission::Denied
        );
    }

    #[test]
    fn deferred_reminders_wait_in_queue() {
        let queue = NoticeQueue::default();
        let notifier = TerminalNotifier::new(true).deferred(queue.clone());

        notifier.notify("Report overdue", "No report in the last hour").unwrap();

        assert_eq!(
            queue.drain(),
            vec![(
                MessageKind::Warning,
                "Report overdue: No report in the last hour".to_string()
            )]
        );
    }
}
