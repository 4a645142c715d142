//! In-memory blog post store. One `RwLock` guards the whole collection, so
//! mutations are serialized against each other and against reads.

use crate::error::AppError;
use crate::model::{BlogPatch, BlogPost, BlogSummary, NewBlog};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct BlogStore {
    /// Insertion order is the list order.
    posts: RwLock<Vec<BlogPost>>,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<BlogPost>>, AppError> {
        self.posts.read().map_err(|_| AppError::Internal("store lock".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<BlogPost>>, AppError> {
        self.posts.write().map_err(|_| AppError::Internal("store lock".into()))
    }

    pub fn list(&self) -> Result<Vec<BlogSummary>, AppError> {
        Ok(self.read()?.iter().map(BlogSummary::from).collect())
    }

    pub fn get(&self, id: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    /// Assign a fresh id (UUID v4) and store the full record.
    pub fn insert(&self, new: NewBlog) -> Result<BlogPost, AppError> {
        let post = BlogPost {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            content: new.content,
            user_name: new.user_name,
            user_image: new.user_image,
        };
        self.write()?.push(post.clone());
        tracing::debug!(id = %post.id, "blog inserted");
        Ok(post)
    }

    /// Merge `patch` onto the record with `id`. `None` when no such record.
    pub fn update(&self, id: &str, patch: BlogPatch) -> Result<Option<BlogPost>, AppError> {
        let mut posts = self.write()?;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply_to(post);
        tracing::debug!(id = %id, "blog updated");
        Ok(Some(post.clone()))
    }

    /// Returns `false` when no record had `id`.
    pub fn remove(&self, id: &str) -> Result<bool, AppError> {
        let mut posts = self.write()?;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        let removed = posts.len() != before;
        if removed {
            tracing::debug!(id = %id, "blog removed");
        }
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_blog(title: &str) -> NewBlog {
        NewBlog {
            title: title.into(),
            content: "body".into(),
            user_name: "alice".into(),
            user_image: None,
        }
    }

    #[test]
    fn insert_assigns_unique_ids() {
        let store = BlogStore::new();
        let ids: HashSet<String> = (0..50)
            .map(|i| store.insert(new_blog(&format!("post {i}"))).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(store.len().unwrap(), 50);
    }

    #[test]
    fn list_keeps_insertion_order_and_drops_content() {
        let store = BlogStore::new();
        let a = store.insert(new_blog("a")).unwrap();
        let b = store.insert(new_blog("b")).unwrap();
        let listed = store.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str()]);
        let json = serde_json::to_value(&listed).unwrap();
        assert!(json[0].get("content").is_none());
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let store = BlogStore::new();
        let post = store.insert(new_blog("old")).unwrap();
        let patch = BlogPatch {
            title: Some("new".into()),
            user_image: Some("img.png".into()),
            ..Default::default()
        };
        let updated = store.update(&post.id, patch).unwrap().unwrap();
        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.user_name, "alice");
        assert_eq!(updated.user_image.as_deref(), Some("img.png"));
        assert_eq!(store.get(&post.id).unwrap(), Some(updated));
    }

    #[test]
    fn update_unknown_id_is_none() {
        let store = BlogStore::new();
        assert!(store.update("missing", BlogPatch::default()).unwrap().is_none());
    }

    #[test]
    fn remove_then_get_is_gone() {
        let store = BlogStore::new();
        let post = store.insert(new_blog("x")).unwrap();
        assert!(store.remove(&post.id).unwrap());
        assert!(!store.remove(&post.id).unwrap());
        assert!(store.get(&post.id).unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn concurrent_inserts_and_removes_stay_consistent() {
        let store = BlogStore::new();
        let kept: Vec<Vec<String>> = std::thread::scope(|s| {
            let workers: Vec<_> = (0..8)
                .map(|t| {
                    let store = &store;
                    s.spawn(move || {
                        let mut kept = Vec::new();
                        for i in 0..100 {
                            let post = store.insert(new_blog(&format!("t{t} p{i}"))).unwrap();
                            if i % 2 == 0 {
                                assert!(store.remove(&post.id).unwrap());
                            } else {
                                kept.push(post.id);
                            }
                        }
                        kept
                    })
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        let expected: HashSet<String> = kept.into_iter().flatten().collect();
        assert_eq!(expected.len(), 8 * 50);
        assert_eq!(store.len().unwrap(), expected.len());
        let listed: HashSet<String> = store.list().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(listed, expected);
    }
}
