use glam::Vec2;
use lookout_core::Rect;

use crate::scale::{Domain, TimeScale};

/// Pointer input in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
    /// The gesture was interrupted (focus lost, pointer captured elsewhere).
    Cancel,
}

/// A committed brush gesture, in x-domain units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrushEvent {
    /// The selection window was created, moved or resized.
    Change(Domain),
    /// The brush was clicked; carries the full domain.
    Click(Domain),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragMode {
    Create { anchor: f32 },
    Move { grab_offset: f32, width: f32 },
    ResizeStart { fixed: f32 },
    ResizeEnd { fixed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BrushState {
    Idle,
    Dragging {
        mode: DragMode,
        origin_x: f32,
        current_x: f32,
        span: (f32, f32),
    },
}

/// Selection state machine for a brush.
///
/// Pixel positions are clamped to the brush area and converted to domain
/// units through a time scale over the full domain. Selections are always
/// ordered and inside the full domain.
///
/// The controller starts with an empty area; call [`set_layout`](Self::set_layout)
/// before feeding it pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushController {
    area: Rect,
    full: Domain,
    scale: TimeScale,
    handle_size: f32,
    click_tolerance: f32,
    committed: Option<Domain>,
    state: BrushState,
}

impl Default for BrushController {
    fn default() -> Self {
        Self::new(Rect::default(), Domain::point(0.0))
    }
}

impl BrushController {
    pub fn new(area: Rect, full: Domain) -> Self {
        let full = full.ordered();
        Self {
            area,
            full,
            scale: TimeScale::new(full, [0.0, area.width]),
            handle_size: 8.0,
            click_tolerance: 2.0,
            committed: None,
            state: BrushState::Idle,
        }
    }

    pub fn with_handle_size(mut self, handle_size: f32) -> Self {
        self.handle_size = handle_size.max(0.0);
        self
    }

    pub fn with_click_tolerance(mut self, click_tolerance: f32) -> Self {
        self.click_tolerance = click_tolerance.max(0.0);
        self
    }

    /// Update the pixel area and the full domain.
    ///
    /// A committed selection is clamped to the new domain and dropped if it
    /// no longer overlaps it.
    pub fn set_layout(&mut self, area: Rect, full: Domain) {
        let full = full.ordered();
        self.area = area;
        self.full = full;
        self.scale = TimeScale::new(full, [0.0, area.width]);
        self.committed = self.committed.and_then(|d| d.intersect(&full));
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn handle_size(&self) -> f32 {
        self.handle_size
    }

    pub fn full_domain(&self) -> Domain {
        self.full
    }

    /// The committed sub-selection, if any.
    pub fn committed(&self) -> Option<Domain> {
        self.committed
    }

    /// The committed sub-selection, or the full domain when there is none.
    pub fn selection(&self) -> Domain {
        self.committed.unwrap_or(self.full)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, BrushState::Dragging { .. })
    }

    /// The selection being dragged, before it is committed.
    pub fn provisional(&self) -> Option<Domain> {
        match self.state {
            BrushState::Dragging { span, .. } => Some(self.span_to_domain(span)),
            BrushState::Idle => None,
        }
    }

    /// Pixel span of the selection to draw: the provisional one while
    /// dragging, otherwise the committed one.
    pub fn display_span(&self) -> Option<(f32, f32)> {
        match self.state {
            BrushState::Dragging { span, .. } => Some(span),
            BrushState::Idle => self.committed.map(|d| self.domain_to_span(d)),
        }
    }

    /// Advance the state machine. Returns an event when a gesture commits.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<BrushEvent> {
        match event {
            PointerEvent::Down(pos) => {
                if self.area.contains(pos) {
                    self.begin_drag(self.clamp_x(pos.x));
                }
                None
            }
            PointerEvent::Move(pos) => {
                self.update_drag(self.clamp_x(pos.x));
                None
            }
            PointerEvent::Up(pos) => {
                if !self.is_dragging() {
                    return None;
                }
                self.update_drag(self.clamp_x(pos.x));
                self.finish_drag()
            }
            PointerEvent::Cancel => {
                self.state = BrushState::Idle;
                None
            }
        }
    }

    /// Commit the current state.
    ///
    /// Ends an active drag where the pointer currently is. When idle,
    /// re-emits the current selection, so committing repeatedly yields the
    /// same bounds.
    pub fn commit(&mut self) -> BrushEvent {
        match self.finish_drag() {
            Some(event) => event,
            None => match self.committed {
                Some(selection) => BrushEvent::Change(selection),
                None => BrushEvent::Click(self.full),
            },
        }
    }

    /// Drop the sub-selection without emitting anything.
    pub fn clear(&mut self) {
        self.committed = None;
        self.state = BrushState::Idle;
    }

    /// Set the sub-selection programmatically.
    pub fn select(&mut self, domain: Domain) {
        self.set_committed(Some(domain));
    }

    /// Replace the committed sub-selection, leaving any active drag alone.
    pub fn set_committed(&mut self, selection: Option<Domain>) {
        self.committed = selection.and_then(|d| d.ordered().intersect(&self.full));
    }

    fn begin_drag(&mut self, x: f32) {
        let half = self.handle_size * 0.5;
        let (mode, span) = match self.committed.map(|d| self.domain_to_span(d)) {
            Some((start, end)) if (x - start).abs() <= half => {
                (DragMode::ResizeStart { fixed: end }, (start, end))
            }
            Some((start, end)) if (x - end).abs() <= half => {
                (DragMode::ResizeEnd { fixed: start }, (start, end))
            }
            Some((start, end)) if x > start && x < end => (
                DragMode::Move {
                    grab_offset: x - start,
                    width: end - start,
                },
                (start, end),
            ),
            _ => (DragMode::Create { anchor: x }, (x, x)),
        };

        self.state = BrushState::Dragging {
            mode,
            origin_x: x,
            current_x: x,
            span,
        };
    }

    fn update_drag(&mut self, x: f32) {
        let BrushState::Dragging {
            mode,
            origin_x,
            ..
        } = self.state
        else {
            return;
        };

        let span = match mode {
            DragMode::Create { anchor } => (anchor.min(x), anchor.max(x)),
            DragMode::Move { grab_offset, width } => {
                let max_start = (self.area.right() - width).max(self.area.x);
                let start = (x - grab_offset).clamp(self.area.x, max_start);
                (start, start + width)
            }
            DragMode::ResizeStart { fixed } | DragMode::ResizeEnd { fixed } => {
                (fixed.min(x), fixed.max(x))
            }
        };

        self.state = BrushState::Dragging {
            mode,
            origin_x,
            current_x: x,
            span,
        };
    }

    fn finish_drag(&mut self) -> Option<BrushEvent> {
        let BrushState::Dragging {
            origin_x,
            current_x,
            span,
            ..
        } = self.state
        else {
            return None;
        };
        self.state = BrushState::Idle;

        if (current_x - origin_x).abs() <= self.click_tolerance {
            self.committed = None;
            tracing::debug!(start = self.full.start, end = self.full.end, "brush click");
            return Some(BrushEvent::Click(self.full));
        }

        let selection = self.span_to_domain(span);
        self.committed = Some(selection);
        tracing::debug!(start = selection.start, end = selection.end, "brush change");
        Some(BrushEvent::Change(selection))
    }

    fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.area.x, self.area.right())
    }

    fn span_to_domain(&self, (start, end): (f32, f32)) -> Domain {
        let a = self.full.clamp(self.scale.invert(start - self.area.x));
        let b = self.full.clamp(self.scale.invert(end - self.area.x));
        Domain::new(a, b).ordered()
    }

    fn domain_to_span(&self, domain: Domain) -> (f32, f32) {
        let a = self.area.x + self.scale.map(domain.start);
        let b = self.area.x + self.scale.map(domain.end);
        (a.min(b), a.max(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> BrushController {
        BrushController::new(Rect::new(50.0, 10.0, 100.0, 50.0), Domain::new(0.0, 1000.0))
    }

    fn drag(c: &mut BrushController, from: f32, to: f32) -> Option<BrushEvent> {
        c.handle_event(PointerEvent::Down(Vec2::new(from, 30.0)));
        c.handle_event(PointerEvent::Move(Vec2::new(to, 30.0)));
        c.handle_event(PointerEvent::Up(Vec2::new(to, 30.0)))
    }

    #[test]
    fn test_create_selection() {
        let mut c = controller();
        assert_eq!(
            drag(&mut c, 70.0, 120.0),
            Some(BrushEvent::Change(Domain::new(200.0, 700.0)))
        );
        assert_eq!(c.committed(), Some(Domain::new(200.0, 700.0)));
    }

    #[test]
    fn test_reverse_drag_is_ordered() {
        let mut c = controller();
        assert_eq!(
            drag(&mut c, 120.0, 70.0),
            Some(BrushEvent::Change(Domain::new(200.0, 700.0)))
        );
    }

    #[test]
    fn test_drag_is_clamped_to_area() {
        let mut c = controller();
        assert_eq!(
            drag(&mut c, 100.0, 400.0),
            Some(BrushEvent::Change(Domain::new(500.0, 1000.0)))
        );
    }

    #[test]
    fn test_click_clears_selection() {
        let mut c = controller();
        drag(&mut c, 70.0, 120.0);
        assert_eq!(
            drag(&mut c, 60.0, 61.0),
            Some(BrushEvent::Click(Domain::new(0.0, 1000.0)))
        );
        assert_eq!(c.committed(), None);
        assert_eq!(c.selection(), Domain::new(0.0, 1000.0));
    }

    #[test]
    fn test_move_selection() {
        let mut c = controller();
        drag(&mut c, 70.0, 120.0);
        assert_eq!(
            drag(&mut c, 90.0, 100.0),
            Some(BrushEvent::Change(Domain::new(300.0, 800.0)))
        );
        // Moving past the right edge keeps the width.
        assert_eq!(
            drag(&mut c, 100.0, 200.0),
            Some(BrushEvent::Change(Domain::new(500.0, 1000.0)))
        );
    }

    #[test]
    fn test_resize_edges() {
        let mut c = controller();
        drag(&mut c, 70.0, 120.0);
        assert_eq!(
            drag(&mut c, 72.0, 60.0),
            Some(BrushEvent::Change(Domain::new(100.0, 700.0)))
        );
        assert_eq!(
            drag(&mut c, 121.0, 140.0),
            Some(BrushEvent::Change(Domain::new(100.0, 900.0)))
        );
    }

    #[test]
    fn test_down_outside_area_is_ignored() {
        let mut c = controller();
        assert_eq!(drag(&mut c, 10.0, 100.0), None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_cancel_keeps_committed() {
        let mut c = controller();
        drag(&mut c, 70.0, 120.0);
        c.handle_event(PointerEvent::Down(Vec2::new(130.0, 30.0)));
        c.handle_event(PointerEvent::Move(Vec2::new(140.0, 30.0)));
        assert!(c.provisional().is_some());
        c.handle_event(PointerEvent::Cancel);
        assert_eq!(c.committed(), Some(Domain::new(200.0, 700.0)));
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut c = controller();
        c.handle_event(PointerEvent::Down(Vec2::new(70.0, 30.0)));
        c.handle_event(PointerEvent::Move(Vec2::new(120.0, 30.0)));
        let first = c.commit();
        let second = c.commit();
        assert_eq!(first, BrushEvent::Change(Domain::new(200.0, 700.0)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_change_clamps_selection() {
        let mut c = controller();
        drag(&mut c, 70.0, 120.0);
        c.set_layout(Rect::new(50.0, 10.0, 100.0, 50.0), Domain::new(500.0, 1000.0));
        assert_eq!(c.committed(), Some(Domain::new(500.0, 700.0)));
        c.set_layout(Rect::new(50.0, 10.0, 100.0, 50.0), Domain::new(800.0, 1000.0));
        assert_eq!(c.committed(), None);
    }

    #[test]
    fn test_set_committed_keeps_active_drag() {
        let mut c = controller();
        c.handle_event(PointerEvent::Down(Vec2::new(70.0, 30.0)));
        c.set_committed(None);
        assert!(c.is_dragging());

        c.set_committed(Some(Domain::new(900.0, 1200.0)));
        assert_eq!(c.committed(), Some(Domain::new(900.0, 1000.0)));
        assert_eq!(
            c.handle_event(PointerEvent::Up(Vec2::new(120.0, 30.0))),
            Some(BrushEvent::Change(Domain::new(200.0, 700.0)))
        );
    }
}
