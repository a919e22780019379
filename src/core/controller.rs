use crate::core::events::{TileHoverHandler, VoteControlHandler};
use crate::core::{
    ApiMessage, AssetResolver, CommentRequest, Display, PageElements, Planet, PlanetApi,
    RegisterRequest, VoteOption,
};
use crate::utils::error::{PlanetError, Result};
use std::sync::Arc;

pub const DEFAULT_PLACEHOLDER: &str = "Hover over a planet to see its information.";

/// Drives the planet page: gallery, info panel and the vote controls.
pub struct PageController<A: PlanetApi> {
    api: A,
    elements: PageElements,
    assets: AssetResolver,
    placeholder: String,
}

impl<A: PlanetApi> PageController<A> {
    pub fn new(api: A, elements: PageElements, assets: AssetResolver) -> Self {
        Self {
            api,
            elements,
            assets,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Runs once the page is ready. The planet list is decoded in full
    /// before anything is appended, so a failed fetch leaves both the
    /// gallery and the dropdown empty.
    pub async fn initialize(&self) -> Result<Vec<Planet>> {
        tracing::debug!("Loading planet list");
        let planets = match self.api.fetch_planets().await {
            Ok(planets) => planets,
            Err(e) => {
                tracing::warn!("Planet list unavailable, gallery stays empty: {}", e);
                return Err(e);
            }
        };

        let tiles = self.render_gallery(&planets);
        self.populate_vote_options(&planets);
        tracing::info!("Rendered {} planets", tiles);

        Ok(planets)
    }

    /// Appends one hoverable tile per planet, in order. Returns the tile count.
    pub fn render_gallery(&self, planets: &[Planet]) -> usize {
        for planet in planets {
            let tile = self.assets.tile_for(planet);
            let events = TileHoverHandler::new(
                self.elements.info.clone(),
                planet.info_text(),
                self.placeholder.clone(),
            );
            self.elements.gallery.append_tile(tile, Arc::new(events));
        }
        planets.len()
    }

    pub fn populate_vote_options(&self, planets: &[Planet]) {
        for planet in planets {
            self.elements
                .planet_select
                .append_option(VoteOption::from(planet));
        }
    }

    /// Flips the dropdown and the vote button independently, reading each
    /// one's current display. Returns the dropdown's new display.
    pub fn toggle_vote_ui(&self) -> Display {
        let select = self.elements.planet_select.display().flipped();
        self.elements.planet_select.set_display(select);

        let button = self.elements.vote_button.display().flipped();
        self.elements.vote_button.set_display(button);

        tracing::debug!("Vote controls now {:?}/{:?}", select, button);
        select
    }

    /// Votes for whatever the dropdown currently holds.
    pub async fn submit_vote(&self) -> Result<ApiMessage> {
        let planet_name = self
            .elements
            .planet_select
            .selected_value()
            .ok_or(PlanetError::EmptySelection)?;
        self.vote_for(&planet_name).await
    }

    /// Posts a vote and alerts the server's message verbatim. Failures are
    /// returned without alerting.
    pub async fn vote_for(&self, planet_name: &str) -> Result<ApiMessage> {
        tracing::debug!("Submitting vote for {}", planet_name);
        let receipt = self.api.submit_vote(planet_name).await?;
        self.elements.notifier.alert(&receipt.message);
        Ok(receipt)
    }

    /// Looks a single planet up and shows it in the info panel.
    pub async fn describe_planet(&self, name: &str) -> Result<Planet> {
        if name.trim().is_empty() {
            return Err(PlanetError::ValidationError {
                message: "Planet name is required".to_string(),
            });
        }
        let planet = self.api.fetch_planet(name).await?;
        self.elements.info.set_text(&planet.info_text());
        Ok(planet)
    }

    pub async fn comment(&self, planet_name: &str, comment: &str) -> Result<ApiMessage> {
        if planet_name.trim().is_empty() || comment.trim().is_empty() {
            return Err(PlanetError::ValidationError {
                message: "Planet name and comment are required".to_string(),
            });
        }

        let request = CommentRequest {
            planet_name: planet_name.to_string(),
            comment: comment.to_string(),
        };
        let receipt = self.api.submit_comment(&request).await?;
        self.elements.notifier.alert(&receipt.message);
        Ok(receipt)
    }

    /// Creates a voter account and alerts the server's confirmation.
    pub async fn register(&self, username: &str, password: &str) -> Result<ApiMessage> {
        if username.is_empty() || password.is_empty() {
            return Err(PlanetError::ValidationError {
                message: "Username and password are required".to_string(),
            });
        }

        tracing::debug!("Registering user {}", username);
        let request = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let receipt = self.api.register(&request).await?;
        self.elements.notifier.alert(&receipt.message);
        Ok(receipt)
    }
}

impl<A: PlanetApi + 'static> PageController<A> {
    /// Binds the toggle/vote controls to this controller. Call once.
    pub fn attach_vote_controls(self: &Arc<Self>) {
        let events = VoteControlHandler::new(self);
        self.elements.vote_button.bind(Arc::new(events));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::HeadlessPage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockApi {
        planets: Option<Vec<Planet>>,
        votes: Mutex<Vec<String>>,
        comments: Mutex<Vec<CommentRequest>>,
        users: Mutex<Vec<String>>,
    }

    impl MockApi {
        fn with_planets(planets: Vec<Planet>) -> Self {
            Self {
                planets: Some(planets),
                votes: Mutex::new(Vec::new()),
                comments: Mutex::new(Vec::new()),
                users: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                planets: None,
                votes: Mutex::new(Vec::new()),
                comments: Mutex::new(Vec::new()),
                users: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlanetApi for MockApi {
        async fn fetch_planets(&self) -> Result<Vec<Planet>> {
            self.planets.clone().ok_or_else(|| PlanetError::Rejected {
                status: 503,
                message: "down".to_string(),
            })
        }

        async fn submit_vote(&self, planet_name: &str) -> Result<ApiMessage> {
            self.votes.lock().unwrap().push(planet_name.to_string());
            Ok(ApiMessage {
                message: format!("Voted for {}!", planet_name),
            })
        }

        async fn fetch_planet(&self, name: &str) -> Result<Planet> {
            self.planets
                .iter()
                .flatten()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .cloned()
                .ok_or_else(|| PlanetError::Rejected {
                    status: 404,
                    message: "Planet not found".to_string(),
                })
        }

        async fn submit_comment(&self, request: &CommentRequest) -> Result<ApiMessage> {
            self.comments.lock().unwrap().push(request.clone());
            Ok(ApiMessage {
                message: "Comment stored successfully".to_string(),
            })
        }

        async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage> {
            let mut users = self.users.lock().unwrap();
            if users.contains(&request.username) {
                return Err(PlanetError::Rejected {
                    status: 400,
                    message: "Username already exists".to_string(),
                });
            }
            users.push(request.username.clone());
            Ok(ApiMessage {
                message: "User registered successfully".to_string(),
            })
        }
    }

    fn solar_system() -> Vec<Planet> {
        vec![
            Planet::new("Mercury", "Closest to the sun"),
            Planet::new("Mars", "The red planet"),
            Planet::new("Neptune", "Windy ice giant"),
        ]
    }

    fn controller(api: MockApi, page: &HeadlessPage) -> PageController<MockApi> {
        PageController::new(api, page.elements(), AssetResolver::default())
    }

    #[tokio::test]
    async fn test_initialize_renders_tiles_and_options_in_order() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(solar_system()), &page);

        let planets = controller.initialize().await.unwrap();

        assert_eq!(planets.len(), 3);
        let tile_names: Vec<String> = page.tiles().into_iter().map(|t| t.planet_name).collect();
        let option_values: Vec<String> = page.options().into_iter().map(|o| o.value).collect();
        assert_eq!(tile_names, vec!["Mercury", "Mars", "Neptune"]);
        assert_eq!(option_values, tile_names);
    }

    #[tokio::test]
    async fn test_initialize_failure_leaves_page_empty() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::unreachable(), &page);

        assert!(controller.initialize().await.is_err());
        assert!(page.tiles().is_empty());
        assert!(page.options().is_empty());
    }

    #[tokio::test]
    async fn test_hover_uses_configured_placeholder() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(solar_system()), &page)
            .with_placeholder("Pick a planet");
        controller.initialize().await.unwrap();

        page.hover(1);
        assert_eq!(page.info_text(), "Mars: The red planet");
        page.unhover(1);
        assert_eq!(page.info_text(), "Pick a planet");
    }

    #[test]
    fn test_toggle_twice_restores_both_controls() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(vec![]), &page);
        let before = (page.select_display(), page.button_display());

        controller.toggle_vote_ui();
        assert_ne!(page.select_display(), before.0);
        assert_ne!(page.button_display(), before.1);

        controller.toggle_vote_ui();
        assert_eq!((page.select_display(), page.button_display()), before);
    }

    #[test]
    fn test_toggle_flips_each_control_from_its_own_state() {
        let page = HeadlessPage::new();
        page.elements().vote_button.set_display(Display::Inline);
        let controller = controller(MockApi::with_planets(vec![]), &page);

        controller.toggle_vote_ui();

        assert_eq!(page.select_display(), Display::Inline);
        assert_eq!(page.button_display(), Display::None);
    }

    #[tokio::test]
    async fn test_submit_vote_posts_selected_name_and_alerts() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(solar_system()), &page);
        controller.initialize().await.unwrap();
        page.select("Mars").unwrap();

        let receipt = controller.submit_vote().await.unwrap();

        assert_eq!(receipt.message, "Voted for Mars!");
        assert_eq!(page.alerts(), vec!["Voted for Mars!".to_string()]);
        assert_eq!(*controller.api.votes.lock().unwrap(), vec!["Mars".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_vote_without_options_is_rejected_locally() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(vec![]), &page);

        let err = controller.submit_vote().await.unwrap_err();

        assert!(matches!(err, PlanetError::EmptySelection));
        assert!(controller.api.votes.lock().unwrap().is_empty());
        assert!(page.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_describe_planet_fills_info_panel() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(solar_system()), &page);

        let planet = controller.describe_planet("neptune").await.unwrap();

        assert_eq!(planet.name, "Neptune");
        assert_eq!(page.info_text(), "Neptune: Windy ice giant");
    }

    #[tokio::test]
    async fn test_comment_requires_both_fields() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(solar_system()), &page);

        assert!(controller.comment("Mars", "  ").await.is_err());
        assert!(controller.comment("", "nice").await.is_err());
        assert!(controller.api.comments.lock().unwrap().is_empty());

        let receipt = controller.comment("Mars", "Dusty").await.unwrap();
        assert_eq!(receipt.message, "Comment stored successfully");
        assert_eq!(controller.api.comments.lock().unwrap()[0].comment, "Dusty");
    }

    #[tokio::test]
    async fn test_register_refuses_empty_fields_locally() {
        let page = HeadlessPage::new();
        let controller = controller(MockApi::with_planets(vec![]), &page);

        let err = controller.register("", "pw").await.unwrap_err();
        assert_eq!(
            err.user_friendly_message(),
            "Validation error: Username and password are required"
        );
        assert!(controller.register("ada", "").await.is_err());
        assert!(controller.api.users.lock().unwrap().is_empty());

        controller.register("ada", "pw").await.unwrap();
        let duplicate = controller.register("ada", "pw").await.unwrap_err();
        assert_eq!(duplicate.user_friendly_message(), "Username already exists");
        assert_eq!(page.alerts(), vec!["User registered successfully".to_string()]);
    }

    #[test]
    fn test_dropping_controller_frees_it_despite_bound_controls() {
        let page = HeadlessPage::new();
        let controller = Arc::new(controller(MockApi::with_planets(vec![]), &page));
        controller.attach_vote_controls();
        let weak = Arc::downgrade(&controller);

        drop(controller);

        assert!(weak.upgrade().is_none());
        assert!(page.click_toggle().is_ok());
        assert_eq!(page.select_display(), Display::None);
    }

    #[tokio::test]
    async fn test_vote_after_controller_dropped_is_an_error() {
        let page = HeadlessPage::new();
        let controller = Arc::new(controller(MockApi::with_planets(solar_system()), &page));
        controller.attach_vote_controls();
        controller.initialize().await.unwrap();
        controller.toggle_vote_ui();

        drop(controller);

        let err = page.click_vote().await.unwrap_err();
        assert!(matches!(err, PlanetError::ConfigError { .. }));
        assert!(page.alerts().is_empty());
    }
}
