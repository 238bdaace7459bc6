//! Transient status messages ("Diagrama importado", parse errors, ...).
//!
//! The editor has no clock of its own. A notice is stamped the first time
//! the host polls it and disappears [`NOTICE_TTL_MS`] later.

pub const NOTICE_TTL_MS: f64 = 5_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    shown_at: Option<f64>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            shown_at: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            shown_at: None,
        }
    }
}

/// Holds at most one notice; a newer one replaces the old.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn post(&mut self, notice: Notice) {
        log::debug!("notice ({}): {}", notice.kind.as_str(), notice.message);
        self.current = Some(notice);
    }

    /// The live notice at `now_ms`, if any.
    pub fn poll(&mut self, now_ms: f64) -> Option<&Notice> {
        let expired = match self.current.as_mut() {
            Some(notice) => {
                let shown_at = *notice.shown_at.get_or_insert(now_ms);
                now_ms - shown_at >= NOTICE_TTL_MS
            }
            None => return None,
        };
        if expired {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
