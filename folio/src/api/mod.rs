//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//! - **[`extract`]**: Extractors whose rejections use the common JSON error body
//!
//! # API Structure
//!
//! Every route lives under `/api`:
//!
//! - **Portfolio** (`/api/portfolio/*`): Aggregate read used by the frontend
//! - **Profile** (`/api/profile/*`): One profile per user, addressed by user id
//! - **Projects** (`/api/projects/*`): Listing by profile, create, update, delete
//! - **Skills** (`/api/skills/*`, `/api/skill-categories`): Nested categories and skills
//! - **Collections** (`/api/education/*`, `/api/coursework/*`, `/api/interests/*`, `/api/social-links/*`)
//! - **Users** (`/api/users/*`): Accounts, never exposing password hashes
//! - **Health** (`/api/health`): Liveness probe
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/api/docs` when the server is running.

pub mod extract;
pub mod handlers;
pub mod models;
