use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub logo: String,
}
