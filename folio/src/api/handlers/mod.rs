//! HTTP request handlers for all API endpoints.
//!
//! Each submodule covers one resource. Handlers acquire a pooled connection, call a repository
//! from [`crate::db::handlers`], and convert the result to the camelCase API model. Failures are
//! returned as [`crate::errors::Error`], which renders `{"error": "..."}` with the mapped status.
//!
//! - [`portfolio`]: `GET /api/portfolio/{userId}` aggregate read
//! - [`profiles`]: `GET|PUT /api/profile/{userId}`, `POST /api/profile`
//! - [`projects`]: `GET /api/projects/{profileId}`, `POST /api/projects`, `PUT|DELETE /api/projects/{id}`
//! - [`skills`]: `GET /api/skills/{profileId}`, `POST /api/skill-categories`, `POST /api/skills`
//! - [`education`], [`coursework`], [`interests`], [`social_links`]: list by profile and create
//! - [`users`]: `GET /api/users`, `GET /api/users/{id}`, `POST /api/users`
//! - [`health`]: `GET /api/health` liveness probe

pub mod coursework;
pub mod education;
pub mod health;
pub mod interests;
pub mod portfolio;
pub mod profiles;
pub mod projects;
pub mod skills;
pub mod social_links;
pub mod users;
