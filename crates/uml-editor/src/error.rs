use crate::store::StoreError;
use thiserror::Error;
use uml_core::error::DocumentError;
use uml_core::id::ElementId;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("the diagram is locked")]
    Locked,

    #[error("no prompt is waiting for an answer")]
    NoPrompt,

    #[error("the name must not be empty")]
    EmptyName,

    #[error("unknown element {0}")]
    UnknownElement(ElementId),

    #[error("{id} belongs to {owner} and cannot be removed on its own")]
    Owned { id: ElementId, owner: ElementId },

    #[error("{0} cannot change owner")]
    OwnerChanged(ElementId),

    #[error("the palette item produced no shapes")]
    NothingCreated,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
