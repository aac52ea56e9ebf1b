use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub logo: String,
}
