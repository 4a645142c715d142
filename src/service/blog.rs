//! Blog operations over a `BlogStore`: validation, lookup and not-found mapping.

use crate::error::AppError;
use crate::model::{BlogPost, BlogSummary, CreateBlogRequest, UpdateBlogRequest};
use crate::service::RequestValidator;
use crate::store::BlogStore;

pub struct BlogService;

impl BlogService {
    pub fn list(store: &BlogStore) -> Result<Vec<BlogSummary>, AppError> {
        store.list()
    }

    /// Validate then insert. Nothing is stored when validation fails.
    pub fn create(store: &BlogStore, req: CreateBlogRequest) -> Result<BlogPost, AppError> {
        let new = RequestValidator::validate_create(req)?;
        let post = store.insert(new)?;
        tracing::info!(id = %post.id, "blog created");
        Ok(post)
    }

    pub fn read(store: &BlogStore, id: &str) -> Result<BlogPost, AppError> {
        store.get(id)?.ok_or_else(|| not_found(id))
    }

    /// No blankness checks on update.
    pub fn update(
        store: &BlogStore,
        id: &str,
        req: UpdateBlogRequest,
    ) -> Result<BlogPost, AppError> {
        store.update(id, req.into())?.ok_or_else(|| not_found(id))
    }

    pub fn delete(store: &BlogStore, id: &str) -> Result<(), AppError> {
        if !store.remove(id)? {
            return Err(not_found(id));
        }
        tracing::info!(id = %id, "blog deleted");
        Ok(())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("blog {}", id))
}
