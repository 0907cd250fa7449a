//! The todo item and its write payload.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A persisted todo item. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Body of create and update requests.
///
/// Carries no `id`: on create the store assigns one, on update the path selects the row.
/// An `id` field sent by the client is ignored. `description` and `completed` fall back to
/// their defaults when absent or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewTodo {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i32) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}
