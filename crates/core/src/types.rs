/// Document identifiers are opaque UUID strings assigned at creation.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh document id.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC time, used for `created_at` / `updated_at` stamping.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
