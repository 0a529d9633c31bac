use crate::models::types::{ItemId, OwnerId, TemplateId};
use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// No inventory snapshot exists for this owner
    #[error("unknown owner: {0}")]
    UnknownOwner(OwnerId),

    /// Item id does not resolve inside the owner's inventory
    #[error("item {item} not found in inventory of {owner}")]
    ItemNotFound { owner: OwnerId, item: ItemId },

    /// Instance references a template the catalog does not know
    #[error("unknown template: {0}")]
    UnknownTemplate(TemplateId),

    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The trade collaborator refused or failed to execute a sale
    #[error("trade rejected: {0}")]
    TradeRejected(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
