pub mod arcade;
pub mod etl;
pub mod network_link;
pub mod render;

pub use crate::domain::model::{ArcadeRecord, KmlOutput};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
