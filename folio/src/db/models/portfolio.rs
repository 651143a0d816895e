//! Database model for the aggregate portfolio read.

use super::{
    coursework::CourseworkDBResponse, education::EducationDBResponse, interests::InterestDBResponse,
    profiles::ProfileDBResponse, projects::ProjectDBResponse, skills::SkillCategoryWithSkills,
    social_links::SocialLinkDBResponse,
};

/// Everything rendered on a portfolio page for one user.
///
/// `profile` is `None` when the user has no profile yet; every collection is then empty.
#[derive(Debug, Clone, Default)]
pub struct CompletePortfolioDBResponse {
    pub profile: Option<ProfileDBResponse>,
    pub projects: Vec<ProjectDBResponse>,
    pub skill_categories: Vec<SkillCategoryWithSkills>,
    pub education: Vec<EducationDBResponse>,
    pub coursework: Vec<CourseworkDBResponse>,
    pub interests: Vec<InterestDBResponse>,
    pub social_links: Vec<SocialLinkDBResponse>,
}
