pub mod pubsub_consumer;
