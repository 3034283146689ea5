//! Case-study modal visibility and displayed content.
//!
//! DESIGN
//! ======
//! A single modal instance exists per page. Opening while already open
//! replaces the content and stays open; every dismiss path converges on
//! [`ModalState::close`]. The state is plain data so it can live inside an
//! `RwSignal` provided via context and still be tested without a browser.

use crate::content::case_studies::{CaseStudy, CaseStudyRegistry};

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Whether the modal root is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// User affordances that dismiss the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The explicit close button.
    Button,
    /// A click on the overlay outside the modal content.
    Overlay,
    /// The Escape key while the modal is open.
    Escape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    visibility: ModalVisibility,
    active: Option<&'static CaseStudy>,
    /// Bumped on every successful open; the icon refresh keys off this.
    render_seq: u64,
}

impl ModalState {
    /// Show the case study for `id`, replacing any displayed content.
    ///
    /// Returns `false` and leaves the state untouched when `id` is unknown.
    pub fn open(&mut self, registry: &CaseStudyRegistry, id: &str) -> bool {
        let Some(study) = registry.lookup(id) else {
            return false;
        };
        self.active = Some(study);
        self.visibility = ModalVisibility::Open;
        self.render_seq += 1;
        true
    }

    /// Hide the modal. Returns whether the visibility changed.
    ///
    /// The last displayed content stays mounted behind the hidden root until
    /// the next successful [`open`](Self::open) replaces it.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.visibility = ModalVisibility::Closed;
        was_open
    }

    pub fn dismiss(&mut self, trigger: CloseTrigger) -> bool {
        match trigger {
            CloseTrigger::Button | CloseTrigger::Overlay | CloseTrigger::Escape => self.close(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    /// Background scrolling is suppressed exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn active(&self) -> Option<&'static CaseStudy> {
        self.active
    }

    pub fn render_seq(&self) -> u64 {
        self.render_seq
    }
}

/// Whether a `KeyboardEvent.key` value should dismiss the modal.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
