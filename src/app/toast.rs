use std::time::{Duration, Instant};

pub const LOADED_MESSAGE: &str = "Data loaded.";
pub const NOT_FOUND_MESSAGE: &str = "City can't be found.";
pub const EMPTY_CITY_MESSAGE: &str = "City name can't be empty.";

const SUCCESS_LIFETIME: Duration = Duration::from_secs(2);
const ERROR_LIFETIME: Duration = Duration::from_secs(3);
const VALIDATION_LIFETIME: Duration = Duration::from_secs(4);

/// Notification channel. At most one toast per channel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: &str, lifetime: Duration, now: Instant) -> Self {
        Self {
            kind,
            message: message.to_string(),
            expires_at: now + lifetime,
        }
    }

    #[must_use]
    pub fn loaded(now: Instant) -> Self {
        Self::new(ToastKind::Success, LOADED_MESSAGE, SUCCESS_LIFETIME, now)
    }

    #[must_use]
    pub fn city_not_found(now: Instant) -> Self {
        Self::new(ToastKind::Error, NOT_FOUND_MESSAGE, ERROR_LIFETIME, now)
    }

    #[must_use]
    pub fn empty_city(now: Instant) -> Self {
        Self::new(ToastKind::Error, EMPTY_CITY_MESSAGE, VALIDATION_LIFETIME, now)
    }

    #[must_use]
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    /// Shows `toast`, replacing any live toast on the same channel.
    pub fn push(&mut self, toast: Toast) {
        self.items.retain(|item| item.kind != toast.kind);
        self.items.push(toast);
    }

    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|item| item.is_live(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn latest(&self, kind: ToastKind) -> Option<&Toast> {
        self.items.iter().find(|item| item.kind == kind)
    }
}
