//! Plain UI state owned by the page frame: which modal is open, which
//! qualification tab is shown, whether the back-to-top button is visible.
//! No derivation beyond direct pass-through.

use crate::constants::BACK_TO_TOP_SCROLL_Y;

/// Payload of the image modal: the shown image and the set it cycles through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageModal {
    pub src: String,
    pub image_set: Vec<String>,
}

impl ImageModal {
    pub fn new(src: impl Into<String>, image_set: Vec<String>) -> Self {
        Self {
            src: src.into(),
            image_set,
        }
    }

    pub fn can_navigate(&self) -> bool {
        self.image_set.len() > 1
    }

    /// Move `direction` images through the set, wrapping at both ends. An
    /// image missing from its set restarts from the set's start.
    pub fn step(&mut self, direction: i32) {
        if !self.can_navigate() {
            return;
        }
        let n = self.image_set.len() as i64;
        let current = self
            .image_set
            .iter()
            .position(|s| *s == self.src)
            .map(|i| i as i64)
            .unwrap_or(-1);
        let next = (current + direction as i64).rem_euclid(n) as usize;
        self.src = self.image_set[next].clone();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualificationTab {
    #[default]
    Diplomas,
    Papers,
}

impl QualificationTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualificationTab::Diplomas => "diplomas",
            QualificationTab::Papers => "papers",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "diplomas" => Some(QualificationTab::Diplomas),
            "papers" => Some(QualificationTab::Papers),
            _ => None,
        }
    }
}

/// Keys the open image modal reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Next,
    Previous,
    Close,
}

#[inline]
pub fn modal_key(key: &str) -> Option<ModalKey> {
    match key {
        "ArrowRight" => Some(ModalKey::Next),
        "ArrowLeft" => Some(ModalKey::Previous),
        "Escape" => Some(ModalKey::Close),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub image_modal: Option<ImageModal>,
    pub contact_open: bool,
    pub qualification_tab: QualificationTab,
    pub back_to_top_visible: bool,
}

impl SiteState {
    pub fn open_image(&mut self, modal: ImageModal) {
        self.image_modal = Some(modal);
    }

    pub fn close_image(&mut self) {
        self.image_modal = None;
    }

    pub fn open_contact(&mut self) {
        self.contact_open = true;
    }

    pub fn close_contact(&mut self) {
        self.contact_open = false;
    }

    pub fn set_tab(&mut self, tab: QualificationTab) -> bool {
        let changed = self.qualification_tab != tab;
        self.qualification_tab = tab;
        changed
    }

    /// Returns `true` when visibility flipped.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let visible = scroll_y > BACK_TO_TOP_SCROLL_Y;
        let changed = visible != self.back_to_top_visible;
        self.back_to_top_visible = visible;
        changed
    }

    /// Apply a key to the image modal; returns `true` when state changed.
    pub fn on_modal_key(&mut self, key: ModalKey) -> bool {
        let direction = match key {
            ModalKey::Close => return self.image_modal.take().is_some(),
            ModalKey::Next => 1,
            ModalKey::Previous => -1,
        };
        match self.image_modal.as_mut() {
            Some(modal) if modal.can_navigate() => {
                modal.step(direction);
                true
            }
            _ => false,
        }
    }
}
