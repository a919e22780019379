use crate::domain::model::{
    ApiMessage, CommentRequest, Display, GalleryTile, Planet, RegisterRequest, VoteOption,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The planet server as seen by the page.
#[async_trait]
pub trait PlanetApi: Send + Sync {
    /// `GET /planets`, order preserved as received.
    async fn fetch_planets(&self) -> Result<Vec<Planet>>;
    /// `POST /vote/{planet_name}`.
    async fn submit_vote(&self, planet_name: &str) -> Result<ApiMessage>;
    /// `GET /api/planet/{name}`.
    async fn fetch_planet(&self, name: &str) -> Result<Planet>;
    /// `POST /comment`.
    async fn submit_comment(&self, request: &CommentRequest) -> Result<ApiMessage>;
    /// `POST /register`.
    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn asset_base(&self) -> &str;
    fn asset_extension(&self) -> &str;
    fn placeholder(&self) -> &str;
}

/// Pointer enter/leave on a single gallery tile.
pub trait HoverEvents: Send + Sync {
    fn on_hover(&self);
    fn on_unhover(&self);
}

/// The toggle link and the vote button.
#[async_trait]
pub trait VoteEvents: Send + Sync {
    fn on_toggle(&self);
    async fn on_submit(&self) -> Result<ApiMessage>;
}

// Element handles of the host page.

pub trait Gallery: Send + Sync {
    fn append_tile(&self, tile: GalleryTile, events: Arc<dyn HoverEvents>);
}

pub trait InfoPanel: Send + Sync {
    fn set_text(&self, text: &str);
}

pub trait Toggleable: Send + Sync {
    fn display(&self) -> Display;
    fn set_display(&self, display: Display);
}

pub trait VoteSelect: Toggleable {
    fn append_option(&self, option: VoteOption);
    /// `None` when nothing is selectable.
    fn selected_value(&self) -> Option<String>;
}

pub trait VoteButton: Toggleable {
    fn bind(&self, events: Arc<dyn VoteEvents>);
}

pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Handles the controller is wired to instead of looking elements up by id.
#[derive(Clone)]
pub struct PageElements {
    pub gallery: Arc<dyn Gallery>,
    pub info: Arc<dyn InfoPanel>,
    pub planet_select: Arc<dyn VoteSelect>,
    pub vote_button: Arc<dyn VoteButton>,
    pub notifier: Arc<dyn Notifier>,
}
