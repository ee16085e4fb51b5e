//! Staggered row entrance animation.
//!
//! Rows are tracked by id. A row seen for the first time enters a few ticks
//! after the row above it, fades in, then stays shown until it leaves the
//! page.

use std::collections::HashMap;

use crate::constants::{TRAIL_FADE_TICKS, TRAIL_STAGGER_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Entering,
    Shown,
}

#[derive(Debug, Default)]
pub struct RowTrail {
    tick: u64,
    entered_at: HashMap<String, u64>,
}

impl RowTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rows currently on screen, in display order
    pub fn observe(&mut self, ids: &[String]) {
        self.entered_at.retain(|id, _| ids.contains(id));

        let mut stagger = 0;
        for id in ids {
            if !self.entered_at.contains_key(id) {
                self.entered_at.insert(id.clone(), self.tick + stagger);
                stagger += TRAIL_STAGGER_TICKS;
            }
        }
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn reveal(&self, id: &str) -> Reveal {
        let Some(&entered) = self.entered_at.get(id) else {
            return Reveal::Hidden;
        };
        if self.tick < entered {
            Reveal::Hidden
        } else if self.tick - entered < TRAIL_FADE_TICKS {
            Reveal::Entering
        } else {
            Reveal::Shown
        }
    }

    /// True once every observed row is fully shown
    pub fn is_settled(&self) -> bool {
        self.entered_at
            .values()
            .all(|&entered| self.tick >= entered + TRAIL_FADE_TICKS)
    }
}
