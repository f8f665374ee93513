use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shopping-list entry. Invariant: `checked_at` is Some exactly when
/// `checked` is true; the toggle path in `service::shopping_service` is the
/// only writer and maintains it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub checked: bool,
    pub checked_at: Option<DateTime<Utc>>,
}

impl ShoppingItem {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            checked: false,
            checked_at: None,
        }
    }
}
