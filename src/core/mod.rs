pub mod assets;
pub mod controller;
pub mod events;

pub use crate::core::assets::AssetResolver;
pub use crate::domain::model::{
    ApiMessage, CommentRequest, Display, GalleryTile, Planet, RegisterRequest, VoteOption,
};
pub use crate::domain::ports::{
    ConfigProvider, Gallery, HoverEvents, InfoPanel, Notifier, PageElements, PlanetApi,
    Toggleable, VoteButton, VoteEvents, VoteSelect,
};
pub use crate::utils::error::Result;
