use crate::entities::teams::Team as TeamEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub logo: String,
}

impl From<TeamEntity> for Team {
    fn from(entity: TeamEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo: entity.logo,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchTeamsArgs {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamArgs {
    pub name: String,
    #[serde(default)]
    pub logo: String,
}
