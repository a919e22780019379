use crate::core::controller::PageController;
use crate::core::{ApiMessage, HoverEvents, InfoPanel, PlanetApi, Result, VoteEvents};
use crate::utils::error::PlanetError;
use async_trait::async_trait;
use std::sync::{Arc, Weak};

/// Hover subscription of one gallery tile.
pub struct TileHoverHandler {
    info: Arc<dyn InfoPanel>,
    hover_text: String,
    placeholder: String,
}

impl TileHoverHandler {
    pub fn new(info: Arc<dyn InfoPanel>, hover_text: String, placeholder: String) -> Self {
        Self {
            info,
            hover_text,
            placeholder,
        }
    }
}

impl HoverEvents for TileHoverHandler {
    fn on_hover(&self) {
        self.info.set_text(&self.hover_text);
    }

    fn on_unhover(&self) {
        self.info.set_text(&self.placeholder);
    }
}

/// Routes the toggle and vote controls back into the controller.
///
/// The page's vote button owns this handler while the controller owns the
/// page elements, so the handler only holds a weak reference back.
pub struct VoteControlHandler<A: PlanetApi> {
    controller: Weak<PageController<A>>,
}

impl<A: PlanetApi> VoteControlHandler<A> {
    pub fn new(controller: &Arc<PageController<A>>) -> Self {
        Self {
            controller: Arc::downgrade(controller),
        }
    }

    fn controller(&self) -> Result<Arc<PageController<A>>> {
        self.controller
            .upgrade()
            .ok_or_else(|| PlanetError::ConfigError {
                message: "page controller has been dropped".to_string(),
            })
    }
}

#[async_trait]
impl<A: PlanetApi + 'static> VoteEvents for VoteControlHandler<A> {
    fn on_toggle(&self) {
        match self.controller() {
            Ok(controller) => {
                controller.toggle_vote_ui();
            }
            Err(e) => tracing::warn!("Toggle ignored: {}", e),
        }
    }

    async fn on_submit(&self) -> Result<ApiMessage> {
        self.controller()?.submit_vote().await
    }
}
