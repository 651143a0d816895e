//! API response model for the aggregate portfolio.

use super::{
    coursework::CourseworkResponse, education::EducationResponse, interests::InterestResponse, profiles::ProfileResponse,
    projects::ProjectResponse, skills::SkillCategoryWithSkillsResponse, social_links::SocialLinkResponse,
};
use crate::db::models::portfolio::CompletePortfolioDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything the portfolio page renders for one user.
///
/// `profile` is `null` when the user has no profile; every collection is then empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub profile: Option<ProfileResponse>,
    pub projects: Vec<ProjectResponse>,
    pub skill_categories: Vec<SkillCategoryWithSkillsResponse>,
    pub education: Vec<EducationResponse>,
    pub coursework: Vec<CourseworkResponse>,
    pub interests: Vec<InterestResponse>,
    pub social_links: Vec<SocialLinkResponse>,
}

fn convert<D, R: From<D>>(rows: Vec<D>) -> Vec<R> {
    rows.into_iter().map(R::from).collect()
}

impl From<CompletePortfolioDBResponse> for PortfolioResponse {
    fn from(db: CompletePortfolioDBResponse) -> Self {
        Self {
            profile: db.profile.map(Into::into),
            projects: convert(db.projects),
            skill_categories: convert(db.skill_categories),
            education: convert(db.education),
            coursework: convert(db.coursework),
            interests: convert(db.interests),
            social_links: convert(db.social_links),
        }
    }
}
