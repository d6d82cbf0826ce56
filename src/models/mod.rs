// Domain models for the analytics API payload

mod connection;
mod entity;
mod health;
mod snapshot;

pub use connection::ConnectionState;
pub use entity::{Camera, Zone};
pub use health::Health;
pub use snapshot::{Hourly, Peak, Snapshot, Stats};
