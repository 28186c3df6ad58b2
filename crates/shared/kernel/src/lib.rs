//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts the layered configuration loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use raft_domain::config::RaftConfig;
//! use raft_kernel::config::load_config;
//!
//! let cfg: RaftConfig = load_config(Some("raft.toml")).unwrap_or_default();
//! assert_eq!(cfg.settings.override_key, "raft_pro_override");
//! ```

pub mod config;

pub use raft_domain as domain;
