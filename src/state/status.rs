//! Transient success/error feedback shown after an operation completes.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::time::Duration;

/// How long a status message stays visible before auto-hiding.
pub const STATUS_HIDE_DELAY: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Success,
    Error,
}

impl StatusKind {
    /// CSS class applied to the message element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The single status message slot.
///
/// Each `show` bumps `seq`; a hide is scheduled with the `seq` it belongs to
/// and is ignored once a newer message has replaced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub visible: bool,
    pub seq: u64,
}

impl StatusMessage {
    /// Replace the current message and make it visible. Returns the sequence
    /// number the matching auto-hide must carry.
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) -> u64 {
        self.seq += 1;
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
        self.seq
    }

    /// Hide the message if `seq` is still current. Returns whether anything changed.
    pub fn hide(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Class list for the message element, `hidden` included when not visible.
    pub fn class_list(&self) -> String {
        if self.visible {
            self.kind.css_class().to_owned()
        } else {
            format!("{} hidden", self.kind.css_class())
        }
    }
}
