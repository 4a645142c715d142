//! Blog post record, its list projection, and per-operation request bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full record as stored and as returned by create, get and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
}

/// List projection: everything except `content`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
}

impl From<&BlogPost> for BlogSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            user_name: post.user_name.clone(),
            user_image: post.user_image.clone(),
        }
    }
}

/// POST body. Fields are optional here so that a missing field is reported by
/// the validator with the same message as a blank one.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[schema(required = true, pattern = r".*\S.*", example = "Post title")]
    pub title: Option<String>,
    #[schema(required = true, pattern = r".*\S.*", example = "Post content")]
    pub content: Option<String>,
    #[schema(required = true, pattern = r".*\S.*", example = "alice")]
    pub user_name: Option<String>,
    #[schema(example = "https://example.com/alice.png")]
    pub user_image: Option<String>,
}

/// PUT body. Any subset of fields; absent or null fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
}

/// Validated create input, ready for insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub user_name: String,
    pub user_image: Option<String>,
}

/// Fields to merge onto an existing record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
}

impl From<UpdateBlogRequest> for BlogPatch {
    fn from(req: UpdateBlogRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            user_name: req.user_name,
            user_image: req.user_image,
        }
    }
}

impl BlogPatch {
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(user_name) = self.user_name {
            post.user_name = user_name;
        }
        if let Some(user_image) = self.user_image {
            post.user_image = Some(user_image);
        }
    }
}
