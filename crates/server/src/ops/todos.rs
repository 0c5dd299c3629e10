//! Todo creation and the accumulated-creations list.

use aggra_client::{NewTodo, Todo, UpstreamApi};
use aggra_core::cache::keys;
use aggra_core::{Error, TtlCache};
use serde_json::{Value, json};

use super::map_upstream;

/// Create a todo upstream and append the returned record (with its assigned
/// id) to the process-lifetime list. The list has no TTL and is never capped.
pub async fn create_todo_impl(cache: &TtlCache, upstream: &dyn UpstreamApi, draft: &NewTodo) -> Result<Todo, Error> {
    let todo = upstream.create_todo(draft).await.map_err(map_upstream)?;

    match serde_json::to_value(&todo) {
        Ok(value) => cache.push(keys::NEW_TODOS, value),
        Err(e) => return Err(Error::Internal(e.to_string())),
    }

    tracing::debug!(id = todo.id, "todo created and recorded");
    Ok(todo)
}

/// The accumulated todos in creation order, or a fixed message when nothing
/// has been created yet.
pub fn new_todos_impl(cache: &TtlCache) -> Value {
    match cache.get(keys::NEW_TODOS) {
        Some(Value::Array(items)) if !items.is_empty() => Value::Array(items),
        _ => json!({ "message": "No new todos created!" }),
    }
}
