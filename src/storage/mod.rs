// Storage layer - the store adapter contract and its two backends
//
// Repositories talk to `StoreAdapter` only; whether records live in a
// per-collection JSON file or a database table is invisible above this
// module.

pub mod adapter;
pub mod feed;
pub mod local;
pub mod remote;

pub use adapter::{ChangeEvent, ChangeKind, Collection, Document, StoreAdapter, StoreError};
pub use feed::{ChangeFeed, Subscription};
pub use local::LocalStore;
pub use remote::RemoteStore;
