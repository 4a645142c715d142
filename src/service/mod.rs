//! BlogService: blog operations on top of the store and validator.

mod blog;
mod validation;
pub use blog::BlogService;
pub use validation::RequestValidator;
