use std::time::SystemTime;

pub mod config;
pub mod error;
pub mod example;
pub mod mcts;
pub mod oracle;
pub mod pit;
pub mod replay;
pub mod repr;
pub mod search;
pub mod self_play;

pub use config::Config;
pub use error::{Error, OracleError};
pub use mcts::{Analysis, Mcts};
pub use oracle::{Eval, Oracle, Policy};

/// Get UNIX time in seconds.
pub fn sys_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
