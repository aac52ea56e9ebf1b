pub mod handlers;

use crate::models::events::ChangeEvent;
use crate::repositories::events::CHANGES_CHANNEL;
use crate::settings::AppSettings;
use handlers::change_events;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast::Sender;
use tracing::{error, info};

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Relays published change events into the local broadcast channel. Runs on
/// a blocking thread for the lifetime of the process and reconnects on
/// failure.
pub fn spawn(settings: &AppSettings, events: Sender<ChangeEvent>) -> anyhow::Result<()> {
    let redis_client = redis::Client::open(settings.redis_url.as_str())?;
    tokio::task::spawn_blocking(move || run(redis_client, events));
    Ok(())
}

fn run(redis_client: redis::Client, events: Sender<ChangeEvent>) {
    loop {
        let Err(e) = consume(&redis_client, &events);
        error!("Change event consumer failed, reconnecting: {e:?}");
        std::thread::sleep(RECONNECT_DELAY);
    }
}

fn consume(
    redis_client: &redis::Client,
    events: &Sender<ChangeEvent>,
) -> anyhow::Result<Infallible> {
    let mut redis_conn = redis_client.get_connection()?;
    let mut pubsub = redis_conn.as_pubsub();
    pubsub.subscribe(CHANGES_CHANNEL)?;
    info!(channel = CHANGES_CHANNEL, "Subscribed to change events");
    loop {
        let msg = pubsub.get_message()?;
        change_events::handle(events, &msg);
    }
}
