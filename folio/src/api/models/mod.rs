//! API request and response data models.
//!
//! This module contains the data structures used for HTTP request deserialization
//! and response serialization. These models define the public API contract.
//!
//! # Design Principles
//!
//! - **Separation of Concerns**: API models are distinct from database models,
//!   allowing independent evolution of API and storage representations
//! - **Wire format**: All bodies use camelCase keys (`profileId`, `sortOrder`, `createdAt`)
//! - **Validation**: Request bodies implement [`Validate`] and are checked before they reach storage
//! - **OpenAPI**: All models are annotated with `utoipa` for automatic API docs
//!
//! # Model Categories
//!
//! - [`users`]: Account creation and the password-free user representation
//! - [`profiles`]: Profile create/update payloads
//! - [`projects`]: Project create/update payloads
//! - [`skills`]: Skill categories, skills, and the nested category-with-skills shape
//! - [`education`], [`coursework`], [`interests`], [`social_links`]: Collection entries
//! - [`portfolio`]: The aggregate returned by `GET /api/portfolio/{userId}`
//! - [`pagination`]: Shared `skip`/`limit` query parameters
//!
//! # Example
//!
//! ```ignore
//! use folio::api::models::{Validate, projects::ProjectCreate};
//!
//! let create_req: ProjectCreate = serde_json::from_str(json_str)?;
//! create_req.validate()?;
//! ```

use crate::errors::Error;

pub mod coursework;
pub mod education;
pub mod interests;
pub mod pagination;
pub mod portfolio;
pub mod profiles;
pub mod projects;
pub mod skills;
pub mod social_links;
pub mod users;

/// Request-level checks that serde cannot express.
pub trait Validate {
    fn validate(&self) -> Result<(), Error>;
}

/// Reject empty or whitespace-only values for a required field.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::BadRequest {
            message: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

/// Like [`require_non_blank`], for fields of a partial update that may be omitted.
pub(crate) fn require_non_blank_if_present(field: &str, value: Option<&str>) -> Result<(), Error> {
    match value {
        Some(value) => require_non_blank(field, value),
        None => Ok(()),
    }
}
