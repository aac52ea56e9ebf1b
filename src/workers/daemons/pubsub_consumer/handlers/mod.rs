pub mod change_events;
