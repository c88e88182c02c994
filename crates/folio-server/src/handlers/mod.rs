//! HTTP request handlers.

pub(crate) mod achievements;
pub(crate) mod blog;
pub(crate) mod contact;
pub(crate) mod projects;
pub(crate) mod summary;
pub(crate) mod timeline;
