use serde::{Deserialize, Serialize};

/// One solar-system body as served by `GET /planets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub description: String,
}

impl Planet {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Text shown in the info panel while the tile is hovered.
    pub fn info_text(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

/// A rendered gallery tile: the image it shows and the planet it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTile {
    pub planet_name: String,
    pub image_src: String,
    pub alt: String,
}

/// One entry of the vote dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOption {
    pub value: String,
    pub label: String,
}

impl From<&Planet> for VoteOption {
    fn from(planet: &Planet) -> Self {
        Self {
            value: planet.name.clone(),
            label: planet.name.clone(),
        }
    }
}

/// CSS-style display of a toggleable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Inline,
    None,
}

impl Display {
    pub fn flipped(self) -> Self {
        match self {
            Display::None => Display::Inline,
            Display::Inline => Display::None,
        }
    }

    pub fn is_visible(self) -> bool {
        self != Display::None
    }
}

/// `{"message": ...}` body returned by the vote and comment endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// `{"error": ...}` body the server sends with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest {
    pub planet_name: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}
