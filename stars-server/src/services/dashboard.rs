//! Dashboard aggregation
//!
//! Joins four independent reads: settings, the person, their valid stars
//! and the whole class catalog. The reads are not snapshot-consistent.

use shared::models::UserData;

use crate::core::ServerState;
use crate::db::repository::{
    ClassRepository, PersonRepository, RepoResult, SettingsRepository, StarRepository,
};

#[derive(Clone, Debug)]
pub struct DashboardService {
    people: PersonRepository,
    stars: StarRepository,
    classes: ClassRepository,
    settings: SettingsRepository,
}

impl DashboardService {
    pub fn new(state: &ServerState) -> Self {
        Self {
            people: state.people(),
            stars: state.stars(),
            classes: state.classes(),
            settings: state.settings(),
        }
    }

    /// Dashboard for one person. An unknown person yields `null`, not an error.
    pub async fn user_data(&self, person_id: &str) -> RepoResult<UserData> {
        let init_info = self.settings.get().await?;
        let person = self.people.find_by_business_id(person_id).await?;
        let stars = self.stars.find_valid_by_person(person_id).await?;
        let classes = self.classes.find_all().await?;

        tracing::debug!(
            person_id = %person_id,
            found = person.is_some(),
            stars = stars.len(),
            classes = classes.len(),
            "Dashboard assembled"
        );

        Ok(UserData {
            resource: self.people.policy().resource().to_string(),
            person,
            stars,
            classes,
            init_info,
        })
    }
}
