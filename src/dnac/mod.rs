//! Catalyst Center (DNA Center) intent API client.

pub mod client;
pub mod types;

pub use client::DnacClient;
pub use types::{AuthToken, Device, DeviceInventory};
