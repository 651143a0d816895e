//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut PgConnection` and owns the SQL for one table. Most implement
//! [`Repository`] for creation and ordered listing; the rest of their surface is inherent.
//!
//! - [`Users`]: Accounts
//! - [`Profiles`]: One profile per user, keyed by user id
//! - [`Projects`]: Featured-first project listing plus partial update and delete
//! - [`SkillCategories`], [`Skills`]: Categories and the skills grouped under them
//! - [`EducationEntries`], [`Coursework`], [`Interests`], [`SocialLinks`]: Ordered collections
//! - [`portfolio`]: Concurrent aggregate read across all of the above

pub mod coursework;
pub mod education;
pub mod interests;
pub mod portfolio;
pub mod profiles;
pub mod projects;
pub mod repository;
pub mod skills;
pub mod social_links;
pub mod users;

pub use coursework::Coursework;
pub use education::EducationEntries;
pub use interests::Interests;
pub use profiles::Profiles;
pub use projects::Projects;
pub use repository::{CollectionFilter, Repository};
pub use skills::{SkillCategories, SkillFilter, Skills};
pub use social_links::SocialLinks;
pub use users::{UserFilter, Users};
