use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResourceKind {
    Article,
    Video,
    Podcast,
    App,
    Book,
    Website,
    Helpline,
    SupportGroup,
    Therapy,
    Other,
}

/// A curated self-help or support resource.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: ResourceKind,
    pub category: String,
    pub url: Option<String>,
    pub phone: Option<String>,
    pub is_free: bool,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
