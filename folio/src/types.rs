//! Common type definitions.
//!
//! All entity IDs are UUIDs wrapped in type aliases so signatures say which table they key into:
//!
//! - [`UserId`]: Account identifier
//! - [`ProfileId`]: Profile identifier (root of all portfolio content)
//! - [`ProjectId`], [`SkillCategoryId`], [`SkillId`], [`EducationId`], [`CourseworkId`],
//!   [`InterestId`], [`SocialLinkId`]: Portfolio collection entries
//!
//! # Utility Functions
//!
//! - [`abbrev_uuid`]: Abbreviate UUIDs to first 8 chars for logging

use uuid::Uuid;

// Type aliases for IDs
pub type UserId = Uuid;
pub type ProfileId = Uuid;
pub type ProjectId = Uuid;
pub type SkillCategoryId = Uuid;
pub type SkillId = Uuid;
pub type EducationId = Uuid;
pub type CourseworkId = Uuid;
pub type InterestId = Uuid;
pub type SocialLinkId = Uuid;

/// Abbreviate a UUID to its first 8 characters for more readable logs and traces
/// Example: "550e8400-e29b-41d4-a716-446655440000" -> "550e8400"
pub fn abbrev_uuid(uuid: &Uuid) -> String {
    uuid.to_string().chars().take(8).collect()
}
