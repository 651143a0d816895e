//! PostgreSQL access through sqlx.
//!
//! Route handlers never write SQL. They open a repository from [`handlers`] on a pooled
//! connection and get back row structs from [`models`]; constraint failures arrive as
//! [`errors::DbError`] variants so the HTTP layer can turn them into 400 or 409.
//!
//! ```ignore
//! use folio::db::handlers::{CollectionFilter, Profiles, Projects, Repository};
//!
//! let mut conn = pool.acquire().await?;
//! if let Some(profile) = Profiles::new(&mut conn).get_by_user(user_id).await? {
//!     let projects = Projects::new(&mut conn).list(&CollectionFilter::new(profile.id)).await?;
//! }
//! ```
//!
//! Writes are single statements, so there are no transactions. [`handlers::portfolio`] is the
//! exception to the one-connection rule: it takes the pool and spreads its reads across several
//! connections.
//!
//! The schema lives in `migrations/` and is applied by [`crate::migrator`] at startup.

pub mod errors;
pub mod handlers;
pub mod models;
