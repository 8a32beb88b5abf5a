use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Invalid index {index} for a sequence of {len} entries")]
    InvalidIndex { index: i64, len: usize },

    #[error("Asset write failed: {0}")]
    AssetWrite(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
