//! Storage layer - saved requests on disk
//!
//! The Storage actor runs file I/O off the App loop and reports results back.

pub mod actor;
pub mod store;

pub use actor::StorageActor;
pub use store::Storage;
