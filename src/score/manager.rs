//! Score domain: the running score and the displays that show it.

use bevy::prelude::*;

pub const DEFAULT_SCORE_LABEL: &str = "Score: ";

/// Anything that can show a line of text.
pub trait TextDisplay {
    fn set_text(&mut self, text: &str);
}

impl TextDisplay for Text {
    fn set_text(&mut self, text: &str) {
        self.0 = text.to_string();
    }
}

impl TextDisplay for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Running score total. Exactly one exists per app; see [`install_score_manager`].
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ScoreManager {
    total: i64,
    label: String,
}

impl Default for ScoreManager {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_LABEL)
    }
}

impl ScoreManager {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            total: 0,
            label: label.into(),
        }
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add `amount` (negative allowed) and immediately push the new text to `display`.
    pub fn add_score(&mut self, amount: i64, display: &mut impl TextDisplay) {
        self.add(amount);
        self.refresh(display);
    }

    pub(crate) fn add(&mut self, amount: i64) {
        self.total = self.total.saturating_add(amount);
    }

    pub fn display_text(&self) -> String {
        format!("{}{}", self.label, self.total)
    }

    pub fn refresh(&self, display: &mut impl TextDisplay) {
        display.set_text(&self.display_text());
    }
}

/// Install `manager` as the app's score manager unless one is already present.
/// The first one installed wins; later ones are dropped.
pub fn install_score_manager(world: &mut World, manager: ScoreManager) -> bool {
    if let Some(existing) = world.get_resource::<ScoreManager>() {
        warn!(
            "ScoreManager already installed (total {}), discarding duplicate",
            existing.total()
        );
        return false;
    }

    info!("ScoreManager installed with label {:?}", manager.label());
    world.insert_resource(manager);
    true
}
