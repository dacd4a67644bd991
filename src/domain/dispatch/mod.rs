pub mod concurrency;
pub mod model;
pub mod service;

pub use concurrency::ConcurrencyLevel;
pub use model::{DispatchSettings, HaltReason};
pub use service::BatchDispatcher;
