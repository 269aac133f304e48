//! Suggestion presenter: display policy over the ranking views
//!
//! A thin, session-scoped policy layer deciding whether the suggestion
//! panel should be shown at all, and with what content. Its state is
//! never persisted; a new session starts a new presenter.
//!
//! The panel stays hidden until enough usage data exists for suggestions
//! to be useful: at least `min_populated_views` of the three ranking
//! categories must each hold at least `min_entries_per_view` entries. The
//! rule is re-evaluated on every render, so a data reset re-hides the
//! panel immediately.

use crate::config::PresenterConfig;
use crate::engine::PersonalizationEngine;
use crate::types::SuggestionItem;
use serde::{Deserialize, Serialize};

/// Visibility state of the suggestion panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Not shown: insufficient data, or closed for the session
    Hidden,

    /// Shown with suggestion content
    Visible,

    /// Shown collapsed; the user folded the panel but may re-expand it
    Collapsed,
}

/// What the UI should render for the panel on this pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelView {
    /// Current panel state after re-evaluation
    pub state: PanelState,

    /// Most-visited targets; empty unless `state` is `Visible`
    pub frequent: Vec<SuggestionItem>,

    /// Most-recently-visited targets; empty unless `state` is `Visible`
    pub recent: Vec<SuggestionItem>,

    /// Score-ranked suggestions excluding the current target; empty
    /// unless `state` is `Visible`
    pub personalized: Vec<SuggestionItem>,
}

impl PanelView {
    fn hidden() -> Self {
        Self {
            state: PanelState::Hidden,
            frequent: Vec::new(),
            recent: Vec::new(),
            personalized: Vec::new(),
        }
    }
}

/// Session-scoped presenter for the suggestion panel
pub struct SuggestionPresenter {
    state: PanelState,
    closed_for_session: bool,
    config: PresenterConfig,
}

impl SuggestionPresenter {
    /// Create a presenter for a fresh session; the panel starts hidden
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            state: PanelState::Hidden,
            closed_for_session: false,
            config,
        }
    }

    /// Current panel state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Re-evaluate visibility against the engine and emit what to render.
    /// Called once per render pass.
    pub fn evaluate(
        &mut self,
        engine: &PersonalizationEngine,
        current_target_id: &str,
    ) -> PanelView {
        if self.closed_for_session || !self.has_sufficient_data(engine, current_target_id) {
            self.state = PanelState::Hidden;
            return PanelView::hidden();
        }

        // Enough data: a hidden panel becomes visible; a collapsed one
        // stays collapsed until the user re-expands it
        if self.state == PanelState::Hidden {
            self.state = PanelState::Visible;
        }

        if self.state == PanelState::Collapsed {
            return PanelView {
                state: PanelState::Collapsed,
                frequent: Vec::new(),
                recent: Vec::new(),
                personalized: Vec::new(),
            };
        }

        let limit = self.config.max_items_per_view;
        PanelView {
            state: PanelState::Visible,
            frequent: engine.frequently_used_items(limit),
            recent: engine.recently_used_items(limit),
            personalized: engine.personalized_suggestions(current_target_id, limit),
        }
    }

    /// Fold the panel; content is withheld until re-expanded
    pub fn collapse(&mut self) {
        if self.state == PanelState::Visible {
            self.state = PanelState::Collapsed;
        }
    }

    /// Re-expand a collapsed panel
    pub fn expand(&mut self) {
        if self.state == PanelState::Collapsed {
            self.state = PanelState::Visible;
        }
    }

    /// Close the panel for the rest of the session; only a new session
    /// (a new presenter) brings it back
    pub fn close_for_session(&mut self) {
        self.closed_for_session = true;
        self.state = PanelState::Hidden;
    }

    /// The minimum-data visibility rule: at least `min_populated_views`
    /// of the three ranking categories must each hold at least
    /// `min_entries_per_view` entries
    fn has_sufficient_data(
        &self,
        engine: &PersonalizationEngine,
        current_target_id: &str,
    ) -> bool {
        let needed = self.config.min_entries_per_view;
        let views = [
            engine.frequently_used_items(needed).len(),
            engine.recently_used_items(needed).len(),
            engine.personalized_suggestions(current_target_id, needed).len(),
        ];
        let populated = views.iter().filter(|&&len| len >= needed).count();
        populated >= self.config.min_populated_views
    }
}
