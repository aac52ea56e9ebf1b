use crate::common::context::Context;
use crate::models::events::ChangeEvent;
use redis::AsyncCommands;

pub const CHANGES_CHANNEL: &str = "football:events";

pub async fn publish<C: Context>(ctx: &C, event: &ChangeEvent) -> anyhow::Result<()> {
    let payload = serde_json::to_string(event)?;
    let mut redis = ctx.redis().await?;
    let _: () = redis.publish(CHANGES_CHANNEL, payload).await?;
    Ok(())
}
