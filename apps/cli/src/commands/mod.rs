//! # Command Implementations
//!
//! One module per subcommand group. Every command receives the resolved
//! [`AppConfig`](crate::config::AppConfig) and returns
//! [`CliResult`](crate::error::CliResult).

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod lookup;
pub mod show;
