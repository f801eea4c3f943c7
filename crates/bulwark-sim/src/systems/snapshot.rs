//! Snapshot builder: model plus display-only derived fields.

use bulwark_core::config::Tuning;
use bulwark_core::state::{BaseView, BonusSummary, GameStateSnapshot, Model};

/// Build the snapshot handed to the renderer.
pub fn build_snapshot(model: &Model, tuning: &Tuning) -> GameStateSnapshot {
    GameStateSnapshot {
        bases: model.bases.iter().map(BaseView::from).collect(),
        bonus: BonusSummary::from_model(model, tuning),
        model: model.clone(),
    }
}
