pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod paths;
pub mod store;

pub use lifecycle::{
    CommitReceipt, Dashboard, DetailPhase, DetailSession, LifecycleError, LifecycleErrorKind,
};
pub use loader::{JsonFileLoader, LeadLoader};
pub use store::LeadStore;
