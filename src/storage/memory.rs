//! In-memory [`TodoStore`] used as a dependency-injected test double and for
//! running the API without a database.

use crate::domain::todo::{NewTodo, Todo, TodoPatch};
use crate::storage::TodoStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryTodoStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Todo>,
}

impl Default for Inner {
    fn default() -> Self {
        Self { next_id: 1, rows: BTreeMap::new() }
    }
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows. Handy for asserting that a rejected request
    /// never reached persistence.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, todo: &NewTodo) -> anyhow::Result<i64> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.insert(
            id,
            Todo {
                id,
                title: todo.title.clone(),
                description: todo.description.clone(),
                done: 0,
            },
        );
        Ok(id)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Todo>> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Todo>> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.contains_key(&id))
    }

    async fn update(&self, id: i64, patch: &TodoPatch) -> anyhow::Result<()> {
        let mut inner = self.inner.lock().await;
        if let Some(row) = inner.rows.get_mut(&id) {
            if let Some(title) = &patch.title {
                row.title = title.clone();
            }
            if let Some(description) = &patch.description {
                row.description = description.clone();
            }
            if let Some(done) = patch.done {
                row.done = done;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<()> {
        let mut inner = self.inner.lock().await;
        inner.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
