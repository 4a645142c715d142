//! Request validation for blog create input.

use crate::error::AppError;
use crate::model::{CreateBlogRequest, NewBlog};

pub struct RequestValidator;

impl RequestValidator {
    /// `title`, `content` and `userName` must be present and non-blank after
    /// trimming. `userImage` is not checked. Values are kept as submitted.
    pub fn validate_create(req: CreateBlogRequest) -> Result<NewBlog, AppError> {
        let title = required(req.title)?;
        let content = required(req.content)?;
        let user_name = required(req.user_name)?;
        Ok(NewBlog {
            title,
            content,
            user_name,
            user_image: req.user_image,
        })
    }
}

fn required(value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AppError::invalid_params()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_PARAMS;

    fn request(title: &str, content: &str, user_name: &str) -> CreateBlogRequest {
        CreateBlogRequest {
            title: Some(title.into()),
            content: Some(content.into()),
            user_name: Some(user_name.into()),
            user_image: None,
        }
    }

    #[test]
    fn accepts_non_blank_fields_verbatim() {
        let new = RequestValidator::validate_create(request(" Hello ", "World", "alice")).unwrap();
        assert_eq!(new.title, " Hello ");
        assert_eq!(new.content, "World");
        assert_eq!(new.user_name, "alice");
        assert_eq!(new.user_image, None);
    }

    #[test]
    fn user_image_may_be_empty() {
        let mut req = request("t", "c", "u");
        req.user_image = Some(String::new());
        let new = RequestValidator::validate_create(req).unwrap();
        assert_eq!(new.user_image.as_deref(), Some(""));
    }

    #[test]
    fn rejects_blank_or_whitespace_fields() {
        let cases = [
            request("", "c", "u"),
            request("t", "   ", "u"),
            request("t", "c", "\t\n"),
        ];
        for req in cases {
            match RequestValidator::validate_create(req) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, INVALID_PARAMS),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let mut req = request("t", "c", "u");
        req.user_name = None;
        assert!(matches!(
            RequestValidator::validate_create(req),
            Err(AppError::Validation(_))
        ));
    }
}
