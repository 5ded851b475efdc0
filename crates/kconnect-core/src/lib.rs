//! K-Connect Core
//!
//! Platform-neutral logic behind the K-Connect front-end:
//! - domain: personas, sessions, opportunities, contacts, settings payloads
//! - pagination / listing: incremental opportunity window and list intents
//! - validation / error: pre-submit checks and the user-facing error type
//! - transport / service: settings and support endpoints over HTTP

pub mod config;
pub mod domain;
pub mod error;
pub mod listing;
pub mod pagination;
pub mod service;
pub mod transport;
pub mod validation;


pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, TransportError};
pub use listing::{list_state, ListState, OpportunityIntent};
pub use pagination::{PageCursor, PageWindow, LOAD_MORE_DELAY_MS, PAGE_SIZE};
pub use service::SettingsService;
pub use transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};
