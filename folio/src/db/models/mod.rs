//! Database record models matching table schemas.
//!
//! This module contains struct definitions that directly correspond to database
//! table rows. These models are used by repositories to return query results
//! and accept insertion/update data.
//!
//! # Design Principles
//!
//! - **Schema Mapping**: Each `*DBResponse` struct matches a table row and derives `sqlx::FromRow`
//! - **Separation**: Database models are distinct from API models to allow
//!   independent evolution of storage and API representations
//! - **Type Safety**: Uses type aliases for IDs (UserId, ProfileId, etc.)
//!
//! # Model Categories
//!
//! ## Accounts
//!
//! - [`users`]: Accounts that own a profile (password hashes only)
//!
//! ## Portfolio Content
//!
//! - [`profiles`]: Display fields for a single person, root of all content
//! - [`projects`]: Showcased projects with featured flag and ordering
//! - [`skills`]: Skill categories and the skills inside them
//! - [`education`], [`coursework`], [`interests`], [`social_links`]: Ordered collections
//! - [`portfolio`]: The aggregate of all of the above for one user
//!
//! # Conversion to API Models
//!
//! API request types convert into `*CreateDBRequest` via `From`, and `*DBResponse` types
//! convert into API responses the same way:
//!
//! ```ignore
//! use folio::db::models::projects::ProjectDBResponse;
//! use folio::api::models::projects::ProjectResponse;
//!
//! let db_project: ProjectDBResponse = /* ... */;
//! let api_response: ProjectResponse = db_project.into();
//! ```

pub mod coursework;
pub mod education;
pub mod interests;
pub mod portfolio;
pub mod profiles;
pub mod projects;
pub mod skills;
pub mod social_links;
pub mod users;
