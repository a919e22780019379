pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{http::HttpPlanetApi, page::HeadlessPage};
pub use crate::config::toml_config::ClientConfig;
pub use crate::core::{assets::AssetResolver, controller::PageController};
pub use crate::domain::model::{ApiMessage, Planet};
pub use crate::utils::error::{PlanetError, Result};
