//! record-store: the data layer of the ERP client.
//!
//! Entity models with validated create inputs, the in-memory [`Collection`]
//! store behind every table view, the [`PersistenceProvider`] boundary with
//! its remote and snapshot implementations, and the document forms that turn
//! a finished draft into a persisted record.
//!
//! [`Collection`]: services::store::Collection
//! [`PersistenceProvider`]: services::provider::PersistenceProvider

pub mod models;
pub mod services;
