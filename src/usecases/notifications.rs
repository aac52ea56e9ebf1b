use crate::common::context::Context;
use crate::models::events::ChangeEvent;
use crate::repositories::events;
use tracing::{info, warn};

/// Announces a completed mutation. The publish runs on its own task so the
/// caller never waits on Redis; a failure is only logged.
pub fn notify<C: Context>(ctx: &C, event: ChangeEvent) {
    let ctx = ctx.clone();
    tokio::spawn(async move {
        match events::publish(&ctx, &event).await {
            Ok(()) => info!(?event, "Published change event"),
            Err(e) => warn!(?event, "Failed to publish change event: {e:?}"),
        }
    });
}
