//! Transient Notifications
//!
//! Toast queue shown after mutations settle.

/// Maximum toasts on screen; the oldest is dropped first
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice success",
            NoticeLevel::Error => "notice error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u32,
    items: Vec<Notice>,
}

impl NoticeQueue {
    /// Queue a notice, returning its id for later dismissal
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
        id
    }

    /// Remove a notice; unknown ids are ignored
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}
