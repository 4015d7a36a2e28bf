//! CLI command implementations.
//!
//! Available commands:
//! - **report**: Print the terminal coverage summary for a coverage file
//! - **init**: Initialize a new covconsole configuration file

pub mod init;
pub mod report;

pub use init::{init_config, init_config_in};
pub use report::handle_report;
