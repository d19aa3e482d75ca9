use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// User-facing toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

/// Shared queue of notices raised by the controllers of one session
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<Vec<Notice>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, title: &str, description: &str) {
        tracing::info!("{}: {}", title, description);
        self.push(title, description, NoticeVariant::Default);
    }

    /// Raise the generic destructive "Error" notice
    pub fn error(&self, description: &str) {
        tracing::warn!("Error: {}", description);
        self.push("Error", description, NoticeVariant::Destructive);
    }

    fn push(&self, title: &str, description: &str, variant: NoticeVariant) {
        self.queue.lock().push(Notice {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
    }

    /// Take all pending notices, oldest first
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.queue.lock())
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn last(&self) -> Option<Notice> {
        self.queue.lock().last().cloned()
    }
}
