//! Split/merge notifications.
//!
//! The split-screen system triggers a [`SplitChangedEvent`] on every state
//! edge. [`observe_split_changed`] logs the edge and keeps the
//! [`SplitHistory`] counters; other observers (sound cues, UI) can subscribe
//! the same way.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::splitframe::SplitHistory;
use crate::splitscreen::{SplitSnapshot, SplitState};

/// Fired when the view splits or merges.
///
/// `snapshot` carries the freshly captured pivot radii on a split and is
/// `None` on a merge.
#[derive(Event, Debug, Clone, Copy)]
pub struct SplitChangedEvent {
    pub state: SplitState,
    pub snapshot: Option<SplitSnapshot>,
}

pub fn observe_split_changed(
    trigger: On<SplitChangedEvent>,
    mut history: Option<ResMut<SplitHistory>>,
) {
    let event = trigger.event();
    match event.state {
        SplitState::Split => {
            if let Some(snapshot) = event.snapshot {
                info!(
                    "View split: pivot radii {:.1} / {:.1}",
                    snapshot.player1_distance_from_center, snapshot.player2_distance_from_center
                );
            }
            if let Some(history) = history.as_deref_mut() {
                history.splits += 1;
            }
        }
        SplitState::Merged => {
            info!("View merged");
            if let Some(history) = history.as_deref_mut() {
                history.merges += 1;
            }
        }
    }
}
