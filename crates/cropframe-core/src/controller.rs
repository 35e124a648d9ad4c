//! Per-element transform controller.
//!
//! [`FrameController`] owns one element's frame, content layer, gesture
//! session and selection flag. Hosts feed it pointer events in arrival
//! order; every call is synchronous and leaves the geometry consistent:
//!
//! - the frame area never drops below `min_area` through a resize (an
//!   offending delta is rejected whole, never clamped to the boundary);
//! - the content always covers the frame.
//!
//! Multiple controllers are fully independent.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::FrameConfig;
use crate::content::Content;
use crate::error::ConfigError;
use crate::frame::Frame;
use crate::geometry::{Point, Size, Vector};
use crate::gesture::{Effect, GestureEvent, GestureKind, GestureMode, GestureState};
use crate::handle::ResizeHandle;

/// Everything a renderer needs, as one serializable value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformSnapshot {
    pub position: Point,
    pub size: Size,
    /// Radians.
    pub rotation: f64,
    pub content_offset: Point,
    pub content_size: Size,
    pub selected: bool,
    pub is_resized: bool,
    pub mode: GestureMode,
}

/// Interactive move/resize/rotate/pan controller for one element.
#[derive(Debug, Clone)]
pub struct FrameController {
    frame: Frame,
    content: Content,
    gesture: GestureState,
    selected: bool,
    min_area: f64,
    resize_percentage: f64,
}

impl FrameController {
    /// Build a controller from validated configuration.
    ///
    /// The initial content is brought into coverage immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any construction precondition fails; see
    /// [`FrameConfig::validate`].
    pub fn new(config: FrameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let frame = Frame::new(config.position, config.size, config.rotation);
        let initial = config.content_or_default();
        let mut content = Content::new(initial.offset, initial.size);
        content.enforce_coverage(frame.size);

        debug!(
            position = ?frame.position,
            size = ?frame.size,
            rotation = frame.rotation,
            min_area = config.min_area,
            resize_percentage = config.resize_percentage,
            "frame controller created"
        );

        Ok(Self {
            frame,
            content,
            gesture: GestureState::Idle,
            selected: false,
            min_area: config.min_area,
            resize_percentage: config.resize_percentage,
        })
    }

    // ------------------------------------------------------------------
    // Event intake
    // ------------------------------------------------------------------

    /// Pointer pressed on the region identified by `kind`.
    pub fn on_gesture_start(&mut self, kind: GestureKind, pointer: Point) {
        self.handle(GestureEvent::Start { kind, pointer });
    }

    /// Pointer moved.
    pub fn on_pointer_update(&mut self, pointer: Point) {
        self.handle(GestureEvent::Update { pointer });
    }

    /// Pointer released, hit-tested against the frame as rendered.
    pub fn on_gesture_end(&mut self, pointer: Point) {
        let inside = self.frame.contains(pointer);
        self.on_gesture_end_with_target(pointer, inside);
    }

    /// Pointer released, with the host's own hit-test result.
    pub fn on_gesture_end_with_target(&mut self, pointer: Point, inside: bool) {
        self.handle(GestureEvent::End { pointer, inside });
    }

    /// Run one event through the state machine and apply its effect.
    pub fn handle(&mut self, event: GestureEvent) {
        let from = self.gesture.mode();
        let (next, effect) = self.gesture.transition(event, &self.frame);
        self.gesture = next;

        let to = self.gesture.mode();
        if from != to {
            trace!(%from, %to, "gesture mode changed");
        }

        self.apply(effect);
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Select => self.selected = true,
            Effect::Deselect => self.selected = false,
            Effect::Translate(delta) => self.frame.translate(delta),
            Effect::Resize { handle, delta } => self.resize(handle, delta),
            Effect::Rotate(rotation) => self.frame.rotation = rotation,
            Effect::Pan(delta) => self.content.pan(delta, self.frame.size),
        }
    }

    /// Apply one resize delta atomically.
    ///
    /// The result is committed only if both sides stay positive and the
    /// area stays at or above `min_area`; otherwise the frame is untouched.
    fn resize(&mut self, handle: ResizeHandle, delta: Vector) {
        let (position, size) = handle.apply(self.frame.position, self.frame.size, delta);

        if size.is_positive() && size.area() >= self.min_area {
            self.frame.position = position;
            self.frame.size = size;
        } else {
            debug!(
                %handle,
                width = size.width,
                height = size.height,
                area = size.area(),
                min_area = self.min_area,
                "resize rejected"
            );
        }

        self.content.enforce_coverage(self.frame.size);
    }

    // ------------------------------------------------------------------
    // Zoom
    // ------------------------------------------------------------------

    /// Enlarge the content by `resize_percentage`.
    pub fn zoom_in(&mut self) {
        self.content.zoom_in(self.resize_percentage, self.frame.size);
    }

    /// Shrink the content by `resize_percentage`, never below the frame.
    pub fn zoom_out(&mut self) {
        self.content.zoom_out(self.resize_percentage, self.frame.size);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.frame.position
    }

    pub fn size(&self) -> Size {
        self.frame.size
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.frame.rotation
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.frame.rotation_degrees()
    }

    pub fn area(&self) -> f64 {
        self.frame.area()
    }

    pub fn content_offset(&self) -> Point {
        self.content.offset
    }

    pub fn content_size(&self) -> Size {
        self.content.size
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// The content and frame dimensions diverge.
    pub fn is_resized(&self) -> bool {
        self.frame.size != self.content.size
    }

    pub fn mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn min_area(&self) -> f64 {
        self.min_area
    }

    pub fn resize_percentage(&self) -> f64 {
        self.resize_percentage
    }

    pub fn snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            position: self.frame.position,
            size: self.frame.size,
            rotation: self.frame.rotation,
            content_offset: self.content.offset,
            content_size: self.content.size,
            selected: self.selected,
            is_resized: self.is_resized(),
            mode: self.mode(),
        }
    }
}

impl Default for FrameController {
    fn default() -> Self {
        Self {
            frame: Frame::new(Point::new(300.0, 300.0), Size::new(375.0, 150.0), 0.0),
            content: Content::new(Point::ORIGIN, Size::new(375.0, 150.0)),
            gesture: GestureState::Idle,
            selected: false,
            min_area: crate::config::DEFAULT_MIN_AREA,
            resize_percentage: crate::config::DEFAULT_RESIZE_PERCENTAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn controller() -> FrameController {
        FrameController::new(FrameConfig::default()).unwrap()
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_default_matches_default_config() {
        let built = controller();
        let default = FrameController::default();
        assert_eq!(built.snapshot(), default.snapshot());
        assert_eq!(built.min_area(), default.min_area());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = FrameConfig::new(Point::ORIGIN, Size::new(-1.0, 100.0));
        assert!(FrameController::new(config).is_err());

        let config = FrameConfig::default().with_min_area(-5.0);
        assert_eq!(
            FrameController::new(config).unwrap_err(),
            ConfigError::NonPositiveMinArea(-5.0)
        );
    }

    #[test]
    fn test_new_enforces_initial_coverage() {
        let config = FrameConfig::default().with_content(p(50.0, 50.0), Size::new(100.0, 100.0));
        let ctl = FrameController::new(config).unwrap();
        assert_eq!(ctl.content_offset(), Point::ORIGIN);
        assert_eq!(ctl.content_size(), Size::new(375.0, 150.0));
        assert!(!ctl.is_resized());
    }

    #[test]
    fn test_move_gesture() {
        let mut ctl = controller();
        ctl.on_gesture_start(GestureKind::Move, p(400.0, 350.0));
        assert!(ctl.selected());
        assert_eq!(ctl.mode(), GestureMode::Moving);

        ctl.on_pointer_update(p(410.0, 340.0));
        ctl.on_pointer_update(p(420.0, 360.0));
        assert_eq!(ctl.position(), p(320.0, 310.0));
        assert_eq!(ctl.size(), Size::new(375.0, 150.0));

        ctl.on_gesture_end(p(420.0, 360.0));
        assert_eq!(ctl.mode(), GestureMode::Idle);
        assert!(ctl.selected());
    }

    #[test]
    fn test_top_left_resize_accepted() {
        let mut ctl = controller();
        ctl.on_gesture_start(GestureKind::Resize(ResizeHandle::TopLeft), p(300.0, 300.0));
        ctl.on_pointer_update(p(310.0, 305.0));
        assert_eq!(ctl.position(), p(310.0, 305.0));
        assert_eq!(ctl.size(), Size::new(365.0, 145.0));
        assert_eq!(ctl.area(), 52925.0);
    }

    #[test]
    fn test_resize_rejected_atomically() {
        let mut ctl = controller();
        let before = ctl.snapshot();

        ctl.on_gesture_start(GestureKind::Resize(ResizeHandle::TopLeft), p(300.0, 300.0));
        // 375x150 -> 175x50 = 8750 < 20000
        ctl.on_pointer_update(p(500.0, 400.0));

        assert_eq!(ctl.position(), before.position);
        assert_eq!(ctl.size(), before.size);
    }

    #[test]
    fn test_rejected_resize_still_advances_pointer() {
        let mut ctl = controller();
        ctl.on_gesture_start(GestureKind::Resize(ResizeHandle::BottomRight), p(675.0, 450.0));
        ctl.on_pointer_update(p(400.0, 300.0));
        assert_eq!(ctl.size(), Size::new(375.0, 150.0));

        // Delta is measured from the rejected pointer, not from the press.
        ctl.on_pointer_update(p(410.0, 300.0));
        assert_eq!(ctl.size(), Size::new(385.0, 150.0));
    }

    #[test]
    fn test_resize_rejects_inverted_frame() {
        let config = FrameConfig::default().with_min_area(1.0);
        let mut ctl = FrameController::new(config).unwrap();
        ctl.on_gesture_start(GestureKind::Resize(ResizeHandle::TopLeft), p(300.0, 300.0));
        // Past the opposite corner on both axes: -25 x -50 has positive area.
        ctl.on_pointer_update(p(700.0, 500.0));
        assert_eq!(ctl.size(), Size::new(375.0, 150.0));
        assert_eq!(ctl.position(), p(300.0, 300.0));
    }

    #[test]
    fn test_resize_reapplies_coverage() {
        let mut ctl = controller();
        ctl.on_gesture_start(GestureKind::Resize(ResizeHandle::Right), p(675.0, 375.0));
        ctl.on_pointer_update(p(775.0, 375.0));

        assert_eq!(ctl.size(), Size::new(475.0, 150.0));
        assert_eq!(ctl.content_size(), Size::new(475.0, 150.0));
        assert!(ctl.content().covers(ctl.size()));
        assert!(!ctl.is_resized());
    }

    #[test]
    fn test_pan_after_zoom() {
        let mut ctl = controller();
        ctl.zoom_in();
        assert!(ctl.is_resized());

        ctl.on_gesture_start(GestureKind::PanContent, p(400.0, 350.0));
        assert_eq!(ctl.mode(), GestureMode::PanningContent);
        ctl.on_pointer_update(p(380.0, 340.0));
        assert_eq!(ctl.content_offset(), p(-20.0, -10.0));

        // Far beyond the slack: snapped so the far edges meet.
        ctl.on_pointer_update(p(0.0, 0.0));
        let offset = ctl.content_offset();
        assert!((offset.x - (375.0 - 450.0)).abs() < 1e-9);
        assert!((offset.y - (150.0 - 180.0)).abs() < 1e-9);
    }

    #[test]
    fn test_pan_press_preempts_move() {
        let mut ctl = controller();
        ctl.zoom_in();
        ctl.on_gesture_start(GestureKind::Move, p(400.0, 350.0));
        ctl.on_gesture_start(GestureKind::PanContent, p(400.0, 350.0));
        ctl.on_pointer_update(p(390.0, 345.0));

        assert_eq!(ctl.position(), p(300.0, 300.0));
        assert_eq!(ctl.content_offset(), p(-10.0, -5.0));
    }

    #[test]
    fn test_zoom_out_never_below_frame() {
        let mut ctl = controller();
        for _ in 0..5 {
            ctl.zoom_out();
        }
        assert_eq!(ctl.content_size(), ctl.size());
    }

    #[test]
    fn test_rotate_anchoring() {
        let config = FrameConfig::default().with_rotation(PI / 4.0);
        let mut ctl = FrameController::new(config).unwrap();
        let center = ctl.frame().center();
        let at = |deg: f64| {
            let rad = deg.to_radians();
            p(center.x + 100.0 * rad.cos(), center.y + 100.0 * rad.sin())
        };

        ctl.on_gesture_start(GestureKind::Rotate, at(0.0));
        for deg in [5.0, 12.0, 20.0, 27.5, 30.0] {
            ctl.on_pointer_update(at(deg));
        }
        assert!((ctl.rotation_degrees() - 75.0).abs() < 1e-9);

        // Rotation never moves the stored rectangle.
        assert_eq!(ctl.position(), p(300.0, 300.0));
        assert_eq!(ctl.frame().center(), center);
    }

    #[test]
    fn test_outside_release_deselects() {
        let mut ctl = controller();
        ctl.on_gesture_start(GestureKind::Move, p(400.0, 350.0));
        ctl.on_gesture_end(p(400.0, 350.0));
        assert!(ctl.selected());

        ctl.on_gesture_end(p(10.0, 10.0));
        assert!(!ctl.selected());
    }

    #[test]
    fn test_outside_release_during_rotate_keeps_selection() {
        let mut ctl = controller();
        ctl.on_gesture_start(GestureKind::Move, p(400.0, 350.0));
        ctl.on_gesture_end(p(400.0, 350.0));

        ctl.on_gesture_start(GestureKind::Rotate, p(487.5, 280.0));
        ctl.on_gesture_end(p(5.0, 5.0));
        assert!(ctl.selected());
        assert_eq!(ctl.mode(), GestureMode::Idle);

        ctl.on_gesture_start(GestureKind::Resize(ResizeHandle::Bottom), p(487.5, 450.0));
        ctl.on_gesture_end_with_target(p(5.0, 5.0), false);
        assert!(ctl.selected());
    }

    #[test]
    fn test_release_while_idle_is_idempotent() {
        let mut ctl = controller();
        let before = ctl.snapshot();
        ctl.on_gesture_end_with_target(p(400.0, 350.0), true);
        ctl.on_gesture_end_with_target(p(400.0, 350.0), true);
        assert_eq!(ctl.snapshot(), before);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut ctl = controller();
        ctl.on_gesture_start(GestureKind::PanContent, p(400.0, 350.0));
        let snap = ctl.snapshot();
        assert_eq!(snap.mode, GestureMode::PanningContent);
        assert!(snap.selected);
        assert!(!snap.is_resized);
        assert_eq!(snap.size, Size::new(375.0, 150.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Integer-valued pointer coordinates keep sums exact in f64.
    fn pointer_strategy() -> impl Strategy<Value = Point> {
        (-2000i32..2000, -2000i32..2000).prop_map(|(x, y)| Point::new(x as f64, y as f64))
    }

    fn handle_strategy() -> impl Strategy<Value = ResizeHandle> {
        prop::sample::select(ResizeHandle::ALL.to_vec())
    }

    fn kind_strategy() -> impl Strategy<Value = GestureKind> {
        prop_oneof![
            Just(GestureKind::Move),
            handle_strategy().prop_map(GestureKind::Resize),
            Just(GestureKind::Rotate),
            Just(GestureKind::PanContent),
        ]
    }

    fn event_strategy() -> impl Strategy<Value = GestureEvent> {
        prop_oneof![
            (kind_strategy(), pointer_strategy())
                .prop_map(|(kind, pointer)| GestureEvent::Start { kind, pointer }),
            pointer_strategy().prop_map(|pointer| GestureEvent::Update { pointer }),
            (pointer_strategy(), any::<bool>())
                .prop_map(|(pointer, inside)| GestureEvent::End { pointer, inside }),
        ]
    }

    proptest! {
        /// Property: moving sums the deltas and leaves size and rotation alone.
        #[test]
        fn prop_move_sums_deltas(
            start in pointer_strategy(),
            path in prop::collection::vec(pointer_strategy(), 1..30),
        ) {
            let mut ctl = FrameController::default();
            let initial = ctl.position();
            ctl.on_gesture_start(GestureKind::Move, start);

            let mut total = Vector::ZERO;
            let mut last = start;
            for pointer in path {
                total = total + (pointer - last);
                last = pointer;
                ctl.on_pointer_update(pointer);
            }

            prop_assert_eq!(ctl.position(), initial + total);
            prop_assert_eq!(ctl.size(), Size::new(375.0, 150.0));
            prop_assert_eq!(ctl.rotation(), 0.0);
        }

        /// Property: a resize either keeps area >= min_area or changes nothing.
        #[test]
        fn prop_resize_atomic(
            handle in handle_strategy(),
            start in pointer_strategy(),
            end in pointer_strategy(),
        ) {
            let mut ctl = FrameController::default();
            let before = ctl.snapshot();
            ctl.on_gesture_start(GestureKind::Resize(handle), start);
            ctl.on_pointer_update(end);

            prop_assert!(ctl.area() >= ctl.min_area());
            prop_assert!(ctl.size().is_positive());

            let (position, size) = handle.apply(before.position, before.size, end - start);
            if size.area() < ctl.min_area() || !size.is_positive() {
                prop_assert_eq!(ctl.position(), before.position);
                prop_assert_eq!(ctl.size(), before.size);
            } else {
                prop_assert_eq!(ctl.position(), position);
                prop_assert_eq!(ctl.size(), size);
            }
        }

        /// Property: resize then inverse delta on the same handle restores the frame.
        #[test]
        fn prop_resize_round_trip(
            handle in handle_strategy(),
            (dx, dy) in (-60i32..60, -40i32..40),
        ) {
            let mut ctl = FrameController::default();
            let before = ctl.snapshot();
            let start = Point::new(500.0, 400.0);
            let moved = Point::new(start.x + dx as f64, start.y + dy as f64);

            ctl.on_gesture_start(GestureKind::Resize(handle), start);
            ctl.on_pointer_update(moved);
            ctl.on_pointer_update(start);

            // 315x110 = 34650 >= 20000, so no intermediate state was rejected.
            prop_assert_eq!(ctl.position(), before.position);
            prop_assert_eq!(ctl.size(), before.size);
        }

        /// Property: rotation depends only on the start and final pointer angles.
        #[test]
        fn prop_rotation_path_independent(
            start_deg in -180.0f64..180.0,
            end_deg in -180.0f64..180.0,
            detour in prop::collection::vec(-180.0f64..180.0, 0..20),
        ) {
            let mut ctl = FrameController::default();
            let center = ctl.frame().center();
            let at = |deg: f64| {
                let rad = deg.to_radians();
                Point::new(center.x + 80.0 * rad.cos(), center.y + 80.0 * rad.sin())
            };

            ctl.on_gesture_start(GestureKind::Rotate, at(start_deg));
            for deg in detour {
                ctl.on_pointer_update(at(deg));
            }
            ctl.on_pointer_update(at(end_deg));

            let expected = at(end_deg).angle_from(center) - at(start_deg).angle_from(center);
            prop_assert!((ctl.rotation() - expected).abs() < 1e-9);
        }

        /// Property: arbitrary event streams keep one mode, end in Idle on release,
        /// and never break the frame or coverage invariants.
        #[test]
        fn prop_event_stream_invariants(
            events in prop::collection::vec(event_strategy(), 1..60),
            zooms in prop::collection::vec(any::<bool>(), 0..10),
        ) {
            let mut ctl = FrameController::default();
            for zoom_in in zooms {
                if zoom_in { ctl.zoom_in() } else { ctl.zoom_out() }
            }

            for event in events {
                ctl.handle(event);
                if matches!(event, GestureEvent::End { .. }) {
                    prop_assert_eq!(ctl.mode(), GestureMode::Idle);
                }
                prop_assert!(ctl.area() >= ctl.min_area());
                prop_assert!(ctl.size().is_positive());
                prop_assert!(ctl.content().covers(ctl.size()));
            }
        }
    }
}
