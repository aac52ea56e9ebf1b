use crate::common::redis_pool::PoolResult;
use async_trait::async_trait;
use sqlx::{MySql, Pool};

/// Handles to the backing stores. Repositories are generic over this so the
/// same code serves request handlers and background tasks. Clones share the
/// underlying pools.
#[async_trait]
pub trait Context: Clone + Sync + Send + 'static {
    fn db(&self) -> &Pool<MySql>;
    async fn redis(&self) -> PoolResult;
}
