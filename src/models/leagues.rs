use crate::entities::leagues::League as LeagueEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub logo: String,
}

impl From<LeagueEntity> for League {
    fn from(entity: LeagueEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo: entity.logo,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateLeagueArgs {
    pub name: String,
    #[serde(default)]
    pub logo: String,
}
