//! Services module: persistence providers, record collections, and forms.

pub mod forms;
pub mod provider;
pub mod remote;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use forms::DocumentForm;
pub use provider::PersistenceProvider;
pub use remote::RemoteProvider;
pub use snapshot::SnapshotProvider;
pub use store::Collection;
