//! Static item definitions
//!
//! Session-immutable metadata for item types, keyed by manifest hash.

pub mod index;
pub mod item;

pub use index::{DefinitionIndex, ResolvedItem};
pub use item::{item_sub_type, item_type, ItemDefinition, ItemHash};
