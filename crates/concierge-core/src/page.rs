//! Content Router
//!
//! Which static page is showing. No history, no URLs.

use serde::{Deserialize, Serialize};

/// Site pages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Experience,
    Rooms,
    Dining,
    Contact,
}

impl Page {
    /// Pages in navigation-bar order (home is reached through the logo)
    pub const NAV: [Self; 4] = [Self::Experience, Self::Rooms, Self::Dining, Self::Contact];

    /// Parse a page name, falling back to `Home` for anything unrecognized
    pub fn parse_or_home(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "experience" => Self::Experience,
            "rooms" => Self::Rooms,
            "dining" => Self::Dining,
            "contact" => Self::Contact,
            _ => Self::Home,
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Experience => "experience",
            Self::Rooms => "rooms",
            Self::Dining => "dining",
            Self::Contact => "contact",
        }
    }

    /// Navigation label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Experience => "Experience",
            Self::Rooms => "Our Rooms",
            Self::Dining => "Dining",
            Self::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Current page holder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentRouter {
    current: Page,
}

impl ContentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn current(&self) -> Page {
        self.current
    }

    /// Switch pages. Returns `true` when the page actually changed, which is
    /// when the view should scroll back to the top.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.current == page {
            return false;
        }
        tracing::debug!(from = %self.current, to = %page, "Navigate");
        self.current = page;
        true
    }
}
