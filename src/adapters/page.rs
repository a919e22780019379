use crate::core::{
    ApiMessage, Display, Gallery, GalleryTile, HoverEvents, InfoPanel, Notifier, PageElements,
    Toggleable, VoteButton, VoteEvents, VoteOption, VoteSelect,
};
use crate::utils::error::{PlanetError, Result};
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
struct HeadlessGallery {
    tiles: Mutex<Vec<(GalleryTile, Arc<dyn HoverEvents>)>>,
}

impl Gallery for HeadlessGallery {
    fn append_tile(&self, tile: GalleryTile, events: Arc<dyn HoverEvents>) {
        lock(&self.tiles).push((tile, events));
    }
}

struct HeadlessInfoPanel {
    text: Mutex<String>,
}

impl InfoPanel for HeadlessInfoPanel {
    fn set_text(&self, text: &str) {
        *lock(&self.text) = text.to_string();
    }
}

struct SelectState {
    options: Vec<VoteOption>,
    selected: Option<usize>,
    display: Display,
}

struct HeadlessSelect {
    state: Mutex<SelectState>,
}

impl Toggleable for HeadlessSelect {
    fn display(&self) -> Display {
        lock(&self.state).display
    }

    fn set_display(&self, display: Display) {
        lock(&self.state).display = display;
    }
}

impl VoteSelect for HeadlessSelect {
    fn append_option(&self, option: VoteOption) {
        let mut state = lock(&self.state);
        state.options.push(option);
        // A select with options always has one selected, the first by default.
        if state.selected.is_none() {
            state.selected = Some(0);
        }
    }

    fn selected_value(&self) -> Option<String> {
        let state = lock(&self.state);
        state
            .selected
            .and_then(|i| state.options.get(i))
            .map(|o| o.value.clone())
    }
}

struct ButtonState {
    display: Display,
    events: Option<Arc<dyn VoteEvents>>,
}

struct HeadlessButton {
    state: Mutex<ButtonState>,
}

impl Toggleable for HeadlessButton {
    fn display(&self) -> Display {
        lock(&self.state).display
    }

    fn set_display(&self, display: Display) {
        lock(&self.state).display = display;
    }
}

impl VoteButton for HeadlessButton {
    fn bind(&self, events: Arc<dyn VoteEvents>) {
        lock(&self.state).events = Some(events);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        tracing::info!("Alert: {}", message);
        lock(&self.alerts).push(message.to_string());
    }
}

/// In-memory host page. Stands in for the browser document so the
/// controller can be driven from the command line and from tests.
///
/// The dropdown and vote button start hidden, as on the served page.
#[derive(Clone)]
pub struct HeadlessPage {
    gallery: Arc<HeadlessGallery>,
    info: Arc<HeadlessInfoPanel>,
    select: Arc<HeadlessSelect>,
    button: Arc<HeadlessButton>,
    notifier: Arc<RecordingNotifier>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::with_info_text(crate::core::controller::DEFAULT_PLACEHOLDER)
    }

    pub fn with_info_text(text: &str) -> Self {
        Self {
            gallery: Arc::new(HeadlessGallery::default()),
            info: Arc::new(HeadlessInfoPanel {
                text: Mutex::new(text.to_string()),
            }),
            select: Arc::new(HeadlessSelect {
                state: Mutex::new(SelectState {
                    options: Vec::new(),
                    selected: None,
                    display: Display::None,
                }),
            }),
            button: Arc::new(HeadlessButton {
                state: Mutex::new(ButtonState {
                    display: Display::None,
                    events: None,
                }),
            }),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub fn elements(&self) -> PageElements {
        PageElements {
            gallery: self.gallery.clone(),
            info: self.info.clone(),
            planet_select: self.select.clone(),
            vote_button: self.button.clone(),
            notifier: self.notifier.clone(),
        }
    }

    pub fn tiles(&self) -> Vec<GalleryTile> {
        lock(&self.gallery.tiles)
            .iter()
            .map(|(tile, _)| tile.clone())
            .collect()
    }

    pub fn tile_index(&self, planet_name: &str) -> Option<usize> {
        lock(&self.gallery.tiles)
            .iter()
            .position(|(tile, _)| tile.planet_name == planet_name)
    }

    pub fn options(&self) -> Vec<VoteOption> {
        lock(&self.select.state).options.clone()
    }

    pub fn info_text(&self) -> String {
        lock(&self.info.text).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.notifier.alerts).clone()
    }

    pub fn select_display(&self) -> Display {
        self.select.display()
    }

    pub fn button_display(&self) -> Display {
        self.button.display()
    }

    fn tile_events(&self, index: usize) -> Option<Arc<dyn HoverEvents>> {
        lock(&self.gallery.tiles)
            .get(index)
            .map(|(_, events)| events.clone())
    }

    /// Pointer enters tile `index`. Returns false if there is no such tile.
    pub fn hover(&self, index: usize) -> bool {
        match self.tile_events(index) {
            Some(events) => {
                events.on_hover();
                true
            }
            None => false,
        }
    }

    pub fn unhover(&self, index: usize) -> bool {
        match self.tile_events(index) {
            Some(events) => {
                events.on_unhover();
                true
            }
            None => false,
        }
    }

    /// Picks the dropdown option whose value is `value`.
    pub fn select(&self, value: &str) -> Result<()> {
        let mut state = lock(&self.select.state);
        let index = state
            .options
            .iter()
            .position(|o| o.value == value)
            .ok_or_else(|| PlanetError::ValidationError {
                message: format!("'{}' is not one of the vote options", value),
            })?;
        state.selected = Some(index);
        Ok(())
    }

    fn bound_events(&self) -> Result<Arc<dyn VoteEvents>> {
        lock(&self.button.state)
            .events
            .clone()
            .ok_or_else(|| PlanetError::ConfigError {
                message: "vote controls are not attached".to_string(),
            })
    }

    pub fn click_toggle(&self) -> Result<()> {
        self.bound_events()?.on_toggle();
        Ok(())
    }

    /// Clicks the vote button. A hidden button cannot be clicked.
    pub async fn click_vote(&self) -> Result<ApiMessage> {
        if !self.button.display().is_visible() {
            return Err(PlanetError::ValidationError {
                message: "the vote button is hidden; toggle the vote controls first".to_string(),
            });
        }
        let events = self.bound_events()?;
        events.on_submit().await
    }
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}
