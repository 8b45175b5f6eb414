//! kaspactl — a Kaspa wallet adapter built around one hardened path:
//! turning "send X KAS to this address" into signed, broadcast
//! transactions against a remote node.
//!
//! The [`sender`] module holds that path. Everything chain-specific
//! (key handling, the KIP-9 transaction generator, the node transport)
//! sits behind traits so the orchestration can be tested without a
//! node. The [`tools`] module wraps the pipeline and the public REST
//! indexer into the query/send operations the CLI exposes.

pub mod api;
pub mod config;
pub mod observability;
pub mod sender;
pub mod tools;
pub mod types;
pub mod wallet;

pub use config::Config;
pub use sender::{send_funds, SendOptions, SendOutcome, SendRequest, SenderError};
