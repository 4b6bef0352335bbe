//! Command handler modules for the showdown CLI.
//!
//! Each submodule implements one subcommand. Handlers take plain values plus
//! injected output streams so they stay testable without a terminal.

pub mod cfg;
pub mod deal;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
