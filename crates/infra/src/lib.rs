//! `trolley-infra` — concrete adapters behind the store's ports.
//!
//! HTTP inventory lookups, JSON-file snapshot persistence, and a
//! tracing-backed notification sink.

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpInventoryService;
pub use notify::TracingNotifier;
pub use storage::FileCartRepository;
