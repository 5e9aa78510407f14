// SPDX-License-Identifier: GPL-3.0-only

/// Presentation state of the message region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Error,
}

impl MessageKind {
    /// CSS class applied to the message region
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Loading => "loading",
            MessageKind::Error => "error",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css_class())
    }
}
