// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

use crate::fl;

/// Everything that can go wrong between the search box and the rendered card
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StarryError {
    #[error("empty search query")]
    Validation,
    #[error("pokémon not found")]
    NotFound,
    #[error("unexpected upstream status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("could not decode upstream response: {0}")]
    Decode(String),
    #[error("upstream record is missing `{0}`")]
    MissingField(&'static str),
    #[error("could not render the card: {0}")]
    Render(String),
}

impl StarryError {
    /// Localized text shown in the message region for this error
    pub fn user_message(&self) -> String {
        match self {
            StarryError::Validation => fl!("enter-name-or-id"),
            // Any non-success status reads as "not found" to the user
            StarryError::NotFound | StarryError::Status(_) => fl!("pokemon-not-found"),
            StarryError::Transport(_) => fl!("network-error"),
            StarryError::Decode(_) | StarryError::MissingField(_) => fl!("incomplete-data"),
            StarryError::Render(_) => fl!("render-error"),
        }
    }
}

impl From<reqwest::Error> for StarryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StarryError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            StarryError::Status(status.as_u16())
        } else {
            StarryError::Transport(err.to_string())
        }
    }
}

impl From<askama::Error> for StarryError {
    fn from(err: askama::Error) -> Self {
        StarryError::Render(err.to_string())
    }
}
