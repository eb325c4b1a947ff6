pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::cli::LocalStorage;

pub use crate::core::{
    arcade::ArcadePipeline, etl::EtlEngine, network_link::NetworkLinkPipeline,
};
pub use crate::domain::model::{ArcadeRecord, KmlOutput};
pub use crate::utils::error::{EtlError, Result};
