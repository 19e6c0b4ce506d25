//! Loadout data model and store

pub mod instance;
pub mod record;
pub mod store;

pub use instance::{ItemInstance, ItemState};
pub use record::{GuardianClass, Loadout, LoadoutItem, LoadoutParameters, LoadoutRecord};
pub use store::{LoadoutStore, StoreError};
