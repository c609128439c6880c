use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deal a group of buyers is purchasing together. Only the fields the
/// board displays are carried here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    pub id: String,
    pub title: String,
}

impl Deal {
    #[allow(dead_code)] // Used by tests and demo seeding
    pub fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
        }
    }
}
