//! Demo configuration assembly so CLI flags and core defaults resolve consistently.

mod cli;

pub(crate) use cli::{HubConfig, OutputMode};
