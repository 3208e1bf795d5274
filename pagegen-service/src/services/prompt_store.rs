//! The editable system prompt shared by every request.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-lifetime holder of the current system prompt.
///
/// Writers swap the whole value under the write lock; readers take an `Arc`
/// snapshot, so a reader sees either the old or the new prompt, never a mix.
/// Concurrent writers race and the last one wins. Nothing is persisted.
#[derive(Clone)]
pub struct PromptStore {
    inner: Arc<RwLock<Arc<str>>>,
}

impl PromptStore {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial: String = initial.into();
        Self {
            inner: Arc::new(RwLock::new(Arc::from(initial))),
        }
    }

    pub async fn get(&self) -> Arc<str> {
        self.inner.read().await.clone()
    }

    /// Replace the prompt. Empty values are ignored; returns whether the value
    /// was applied.
    pub async fn set(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        *self.inner.write().await = Arc::from(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_is_visible_to_next_get() {
        let store = PromptStore::new("default");
        assert_eq!(&*store.get().await, "default");

        assert!(store.set("be terse").await);
        assert_eq!(&*store.get().await, "be terse");
    }

    #[tokio::test]
    async fn empty_value_is_ignored() {
        let store = PromptStore::new("default");
        assert!(!store.set("").await);
        assert_eq!(&*store.get().await, "default");
    }

    #[tokio::test]
    async fn clones_share_the_same_prompt() {
        let store = PromptStore::new("default");
        let handle = store.clone();

        handle.set("updated").await;
        assert_eq!(&*store.get().await, "updated");
    }

    #[tokio::test]
    async fn snapshot_survives_later_writes() {
        let store = PromptStore::new("first");
        let snapshot = store.get().await;

        store.set("second").await;
        assert_eq!(&*snapshot, "first");
        assert_eq!(&*store.get().await, "second");
    }

    #[tokio::test]
    async fn concurrent_writers_leave_one_complete_value() {
        let store = PromptStore::new("start");
        let candidates: Vec<String> = (0..16)
            .map(|i| format!("prompt-{i}-{}", "x".repeat(i * 64)))
            .collect();

        let handles: Vec<_> = candidates
            .iter()
            .cloned()
            .map(|value| {
                let store = store.clone();
                tokio::spawn(async move { store.set(&value).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let last = store.get().await;
        assert!(candidates.iter().any(|c| c.as_str() == &*last));
    }
}
