//! Page sections in scroll order and the active-section policy for the nav.

use crate::constants::ACTIVE_SECTION_MARGIN;
use crate::scroll::ElementRect;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Method,
    Testimonials,
    Qualification,
    Contact,
}

impl SectionId {
    /// DOM order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Method,
        SectionId::Testimonials,
        SectionId::Qualification,
        SectionId::Contact,
    ];

    /// Sections with a nav link.
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Method,
        SectionId::Testimonials,
        SectionId::Qualification,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Method => "method",
            SectionId::Testimonials => "testimonials",
            SectionId::Qualification => "qualification",
            SectionId::Contact => "contact",
        }
    }

    pub fn dom_index(&self) -> usize {
        *self as usize
    }

    pub fn nav_index(&self) -> Option<usize> {
        Self::NAV.iter().position(|s| s == self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Whether `rect` overlaps the viewport with 20% trimmed from top and bottom.
pub fn in_active_band(rect: ElementRect, viewport_height: f32) -> bool {
    let band_top = viewport_height * ACTIVE_SECTION_MARGIN;
    let band_bottom = viewport_height * (1.0 - ACTIVE_SECTION_MARGIN);
    rect.height > 0.0 && rect.top < band_bottom && rect.bottom() > band_top
}

/// Among simultaneously visible sections the DOM-order-last one wins; with
/// none visible the previous choice stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self {
            current: SectionId::Home,
        }
    }
}

impl ActiveSection {
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Returns the new section when the choice changed.
    pub fn update<I>(&mut self, visible: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = SectionId>,
    {
        let last = visible.into_iter().max_by_key(|s| s.dom_index())?;
        if last == self.current {
            return None;
        }
        self.current = last;
        Some(last)
    }
}
