//! Transient notification state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any module can push a toast by updating the shared signal; the tray
//! component owns rendering and dismissal timing. Ids are a per-tab counter
//! so keyed rendering can track each toast across list changes.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual and timing category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// How long a toast of this kind stays up before auto-dismissal.
    /// Errors linger longer so a failed fetch can actually be read.
    pub fn dismiss_after_ms(self) -> u64 {
        match self {
            Self::Success => 2_000,
            Self::Error => 4_000,
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of active toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove the toast with `id`, if it is still queued.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}
