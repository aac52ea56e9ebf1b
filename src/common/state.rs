use crate::common::redis_pool::RedisPool;
use crate::models::events::ChangeEvent;
use sqlx::{MySql, Pool};
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<MySql>,
    pub redis: RedisPool,
    /// Local fan-out of change events to websocket subscribers
    pub events: broadcast::Sender<ChangeEvent>,
}
