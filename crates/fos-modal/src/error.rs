//! Error types

use fos_dom::DomError;

/// Failure to resolve or attach an element-like value
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("Invalid HTML tag: {0}")]
    InvalidTag(String),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Listener argument validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("event: Only 'string' => {event}, callback: Only 'function' => {callback}")]
    TypeArgument {
        /// Runtime type of the event argument
        event: &'static str,
        /// Runtime type of the callback argument
        callback: &'static str,
    },
}

/// Modal construction and wiring errors
#[derive(Debug, thiserror::Error)]
pub enum ModalError {
    #[error("No element with id '{id}' in the document")]
    NotFound { id: String },

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Bind(#[from] BindError),
}
