//! Scroll-position to progress/phase mapping.
//!
//! Every tracked section yields two scalars each sampled frame:
//! - `progress`: triangular proximity, 1.0 when the section's visual center
//!   sits on the (offset) viewport center, falling linearly to 0.
//! - `phase`: monotonic sweep of the viewport center across the section's
//!   (inflated) range, clamped to `[0, 1]`.
//!
//! Geometry is read through [`LayoutProbe`] so the math runs on the host in
//! tests and against the live DOM in the browser.

use crate::constants::*;
use fnv::FnvHashMap;

/// Viewport-relative vertical box of an element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub top: f32,
    pub height: f32,
}

impl ElementRect {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn from_edges(top: f32, bottom: f32) -> Self {
        Self {
            top,
            height: bottom - top,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.top + self.height * 0.5
    }
}

/// Resolves a selector to the element's current box; `None` when the
/// element is not in the document.
pub trait LayoutProbe {
    fn rect(&self, selector: &str) -> Option<ElementRect>;
}

impl<F> LayoutProbe for F
where
    F: Fn(&str) -> Option<ElementRect>,
{
    fn rect(&self, selector: &str) -> Option<ElementRect> {
        self(selector)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressTuning {
    /// Anchor-mode falloff distance as a fraction of viewport height.
    pub threshold_vh: f32,
    /// Extra falloff distance beyond the half-span in range mode.
    pub range_padding_px: f32,
    /// Shifts the effective viewport center downwards (pixels).
    pub center_offset_px: f32,
    /// Widens a range at both ends by this fraction of viewport height.
    pub inflate_vh: f32,
}

impl Default for ProgressTuning {
    fn default() -> Self {
        Self {
            threshold_vh: PROGRESS_THRESHOLD_VH,
            range_padding_px: PROGRESS_RANGE_PADDING_PX,
            center_offset_px: PROGRESS_CENTER_OFFSET_PX,
            inflate_vh: PROGRESS_INFLATE_VH,
        }
    }
}

impl ProgressTuning {
    /// Phase runs 0 -> 1 from "section top at viewport bottom" to
    /// "section bottom at viewport top".
    pub fn pass_through() -> Self {
        Self {
            threshold_vh: PROGRESS_THRESHOLD_VH,
            range_padding_px: 0.0,
            center_offset_px: 0.0,
            inflate_vh: PASS_THROUGH_INFLATE_VH,
        }
    }

    pub fn with_center_offset(mut self, px: f32) -> Self {
        self.center_offset_px = px;
        self
    }

    pub fn with_inflate(mut self, vh: f32) -> Self {
        self.inflate_vh = vh;
        self
    }

    /// Tuning the nav underline uses for `section_id`.
    pub fn for_section(section_id: &str) -> Self {
        let base = Self::default();
        match section_id {
            "about" => base.with_inflate(0.5).with_center_offset(10.0),
            "contact" => base.with_inflate(0.2).with_center_offset(-24.0),
            _ => base,
        }
    }
}

/// Where a section's geometry comes from. Range sources win over the anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackSpec {
    pub range_container: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub anchor: Option<String>,
}

impl TrackSpec {
    /// Markers nested inside `#id`, as the section markup exposes them.
    pub fn for_section(id: &str) -> Self {
        Self {
            range_container: Some(format!("#{id} [data-progress-range]")),
            start: Some(format!("#{id} [data-progress-start]")),
            end: Some(format!("#{id} [data-progress-end]")),
            anchor: Some(format!("#{id} [data-progress-anchor]")),
        }
    }

    /// The element itself is the range.
    pub fn element(selector: &str) -> Self {
        Self {
            range_container: Some(selector.to_string()),
            ..Self::default()
        }
    }

    /// Resolve to geometry: container, then both markers, then the anchor,
    /// then `#id`.
    pub fn measure<P: LayoutProbe + ?Sized>(&self, id: &str, probe: &P) -> SectionGeometry {
        let pick = |sel: &Option<String>| sel.as_deref().and_then(|s| probe.rect(s));
        if let Some(r) = pick(&self.range_container) {
            return SectionGeometry::Range {
                start: r.top,
                end: r.bottom(),
            };
        }
        if let (Some(s), Some(e)) = (pick(&self.start), pick(&self.end)) {
            return SectionGeometry::Range {
                start: s.center(),
                end: e.center(),
            };
        }
        let anchor = pick(&self.anchor).or_else(|| probe.rect(&format!("#{id}")));
        match anchor {
            Some(r) => SectionGeometry::Anchor { center: r.center() },
            None => SectionGeometry::Missing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionGeometry {
    Range { start: f32, end: f32 },
    Anchor { center: f32 },
    Missing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionProgress {
    pub progress: f32,
    pub phase: f32,
}

impl SectionProgress {
    pub const ZERO: SectionProgress = SectionProgress {
        progress: 0.0,
        phase: 0.0,
    };
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Range mode. `start`/`end` are swapped when inverted, then widened by
/// `inflate_px` each side; the span is floored at 1px.
pub fn range_progress(
    start: f32,
    end: f32,
    viewport_center: f32,
    padding_px: f32,
    inflate_px: f32,
) -> SectionProgress {
    let (mut start, mut end) = if end < start { (end, start) } else { (start, end) };
    let inflate = inflate_px.max(0.0);
    start -= inflate;
    end += inflate;
    let span = (end - start).max(1.0);
    let phase = unit((viewport_center - start) / span);
    let half = span * 0.5 + padding_px;
    let center = (start + end) * 0.5;
    let d = (viewport_center - center).abs();
    let progress = if half > 0.0 { unit(1.0 - d / half) } else { 0.0 };
    SectionProgress { progress, phase }
}

/// Anchor mode: linear falloff over `threshold_px`, phase remapped across
/// twice that distance.
pub fn anchor_progress(anchor_center: f32, viewport_center: f32, threshold_px: f32) -> SectionProgress {
    let threshold = threshold_px.max(1.0);
    let d = anchor_center - viewport_center;
    SectionProgress {
        progress: unit(1.0 - d.abs() / threshold),
        phase: unit((viewport_center - (anchor_center - threshold)) / (2.0 * threshold)),
    }
}

pub fn compute_progress(
    geometry: SectionGeometry,
    viewport_height: f32,
    tuning: &ProgressTuning,
) -> SectionProgress {
    let vh = if viewport_height > 0.0 { viewport_height } else { 1.0 };
    let viewport_center = vh * 0.5 + tuning.center_offset_px;
    match geometry {
        SectionGeometry::Range { start, end } => range_progress(
            start,
            end,
            viewport_center,
            tuning.range_padding_px,
            vh * tuning.inflate_vh,
        ),
        SectionGeometry::Anchor { center } => {
            anchor_progress(center, viewport_center, vh * tuning.threshold_vh)
        }
        SectionGeometry::Missing => SectionProgress::ZERO,
    }
}

/// Latest values per tracked id. Replaced wholesale only when some value
/// differs from the stored one.
#[derive(Clone, Debug, Default)]
pub struct ProgressMap {
    entries: FnvHashMap<String, SectionProgress>,
    revision: u64,
}

impl ProgressMap {
    pub fn get(&self, id: &str) -> SectionProgress {
        self.entries.get(id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped whenever [`apply`](Self::apply) stores new values.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply(&mut self, next: FnvHashMap<String, SectionProgress>) -> bool {
        let changed = next.len() != self.entries.len()
            || next.iter().any(|(id, v)| self.entries.get(id) != Some(v));
        if changed {
            self.entries = next;
            self.revision += 1;
        }
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SectionProgress)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// At most one pending recomputation: many triggers between two paints
/// collapse into a single scheduled frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
    triggers: u64,
    runs: u64,
}

impl FrameCoalescer {
    /// Returns `true` when the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        self.triggers += 1;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the scheduled frame, before recomputing.
    pub fn begin(&mut self) {
        self.pending = false;
        self.runs += 1;
    }

    /// Drops the pending request after its frame was cancelled.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn triggers(&self) -> u64 {
        self.triggers
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackedSection {
    pub id: String,
    pub spec: TrackSpec,
    pub tuning: ProgressTuning,
}

/// The set of tracked sections with their latest values.
#[derive(Debug, Default)]
pub struct SectionTracker {
    sections: Vec<TrackedSection>,
    map: ProgressMap,
    coalescer: FrameCoalescer,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track (or retune) `id`. A new id starts at zero until the next recompute.
    pub fn track(&mut self, id: &str, spec: TrackSpec, tuning: ProgressTuning) {
        let entry = TrackedSection {
            id: id.to_string(),
            spec,
            tuning,
        };
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(existing) => *existing = entry,
            None => self.sections.push(entry),
        }
    }

    pub fn untrack(&mut self, id: &str) {
        self.sections.retain(|s| s.id != id);
    }

    pub fn sections(&self) -> &[TrackedSection] {
        &self.sections
    }

    /// Sample every tracked section. Returns `true` when any value changed.
    pub fn recompute<P: LayoutProbe + ?Sized>(&mut self, viewport_height: f32, probe: &P) -> bool {
        let next = self
            .sections
            .iter()
            .map(|s| {
                let geometry = s.spec.measure(&s.id, probe);
                (s.id.clone(), compute_progress(geometry, viewport_height, &s.tuning))
            })
            .collect();
        self.map.apply(next)
    }

    pub fn progress(&self, id: &str) -> SectionProgress {
        self.map.get(id)
    }

    pub fn map(&self) -> &ProgressMap {
        &self.map
    }

    pub fn coalescer(&mut self) -> &mut FrameCoalescer {
        &mut self.coalescer
    }
}
