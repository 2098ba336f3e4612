//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::notifications::{NoticeLevel, NoticeQueue};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to invalidate tree and list data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to invalidate tree and list data - write
    set_reload_trigger: WriteSignal<u32>,
    /// Toasts currently on screen
    pub notices: RwSignal<NoticeQueue>,
    /// Resolved configuration
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notices: RwSignal<NoticeQueue>,
        config: StoredValue<AppConfig>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notices,
            config,
        }
    }

    /// Trigger a refetch of everything the current page shows
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a toast that removes itself after the configured delay
    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let mut id = 0;
        self.notices.update(|queue| id = queue.push(level, message));
        let ttl = self.config.with_value(|c| c.notification_ttl_ms);
        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            notices.update(|queue| queue.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|queue| queue.dismiss(id));
    }
}

/// Get the app context from the component tree
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
