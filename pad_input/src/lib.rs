//! Touch-driven virtual joystick controller.
//!
//! Tracks a touch point inside a circular control area, clamps the thumb to
//! the travel bound, and pushes `(direction, distance)` updates to a weakly
//! held observer. No rendering, no windowing; the host owns both.

use std::rc::Weak;

use glam::Vec2;
use log::trace;

/// Receiver for joystick updates. Held weakly by the control so the
/// observer link never extends the observer's lifetime.
pub trait JoystickObserver {
    /// `direction` is a unit vector (or zero when the thumb sits at the
    /// center); `distance` is the post-clamp thumb offset from the center.
    fn joystick_moved(&self, direction: Vec2, distance: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
}

pub struct Joystick {
    center: Vec2,
    outer_radius: f32,
    inner_radius: f32,
    thumb: Vec2,
    phase: Phase,
    observer: Option<Weak<dyn JoystickObserver>>,
}

impl Joystick {
    /// Builds an idle control centered at `center`. The thumb radius is a
    /// quarter of the control radius; thumb travel is bounded by their
    /// difference.
    pub fn new(center: Vec2, outer_radius: f32) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius: outer_radius / 4.0,
            thumb: center,
            phase: Phase::Idle,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Weak<dyn JoystickObserver>) {
        self.observer = Some(observer);
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn thumb(&self) -> Vec2 {
        self.thumb
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Maximum thumb offset from the center.
    pub fn travel_bound(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }

    /// Touch landed on the control. The original control starts tracking on
    /// the first move event regardless of where the touch began, so this is
    /// the same update as [`touch_moved`](Self::touch_moved).
    pub fn touch_began(&mut self, point: Vec2) {
        self.touch_moved(point);
    }

    /// Moves the thumb toward `point` (control-local coordinates), clamping
    /// to the travel bound while preserving direction, then notifies the
    /// observer.
    pub fn touch_moved(&mut self, point: Vec2) {
        self.phase = Phase::Dragging;
        let bound = self.travel_bound();
        let offset = point - self.center;
        if offset.length() <= bound {
            self.thumb = point;
        } else {
            let angle = offset.y.atan2(offset.x);
            self.thumb = self.center + bound * Vec2::new(angle.cos(), angle.sin());
        }
        self.notify();
    }

    /// Touch ended or was cancelled: the thumb snaps back to the center and
    /// the observer receives a zero vector. Safe to call while already idle.
    pub fn touch_ended(&mut self) {
        self.phase = Phase::Idle;
        self.thumb = self.center;
        self.notify();
    }

    fn notify(&self) {
        let direction = (self.thumb - self.center).normalize_or_zero();
        let distance = self.thumb.distance(self.center);
        trace!(
            "joystick update: direction=({:.3}, {:.3}) distance={:.3}",
            direction.x, direction.y, distance
        );
        let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        observer.joystick_moved(direction, distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TOLERANCE: f32 = 1e-5;

    #[derive(Default)]
    struct RecordingObserver {
        calls: RefCell<Vec<(Vec2, f32)>>,
    }

    impl JoystickObserver for RecordingObserver {
        fn joystick_moved(&self, direction: Vec2, distance: f32) {
            self.calls.borrow_mut().push((direction, distance));
        }
    }

    fn observed_joystick() -> (Joystick, Rc<RecordingObserver>) {
        let mut joystick = Joystick::new(Vec2::new(50.0, 50.0), 50.0);
        let observer = Rc::new(RecordingObserver::default());
        joystick.set_observer(Rc::downgrade(&observer) as Weak<dyn JoystickObserver>);
        (joystick, observer)
    }

    #[test]
    fn thumb_follows_touch_inside_travel_bound() {
        let (mut joystick, observer) = observed_joystick();

        joystick.touch_moved(Vec2::new(70.0, 50.0));

        assert_eq!(joystick.thumb(), Vec2::new(70.0, 50.0));
        assert_eq!(joystick.phase(), Phase::Dragging);
        let calls = observer.calls.borrow();
        let (direction, distance) = calls[0];
        assert!((direction - Vec2::new(1.0, 0.0)).length() < TOLERANCE);
        assert!((distance - 20.0).abs() < TOLERANCE);
    }

    #[test]
    fn thumb_clamps_to_travel_bound_preserving_direction() {
        let (mut joystick, observer) = observed_joystick();

        joystick.touch_moved(Vec2::new(150.0, 50.0));

        assert!((joystick.thumb() - Vec2::new(87.5, 50.0)).length() < TOLERANCE);
        let calls = observer.calls.borrow();
        let (direction, distance) = calls[0];
        assert!((direction - Vec2::new(1.0, 0.0)).length() < TOLERANCE);
        assert!((distance - 37.5).abs() < TOLERANCE);
    }

    #[test]
    fn clamp_preserves_direction_off_axis() {
        let (mut joystick, _observer) = observed_joystick();

        let touch = Vec2::new(110.0, 130.0);
        joystick.touch_moved(touch);

        let to_thumb = (joystick.thumb() - joystick.center()).normalize_or_zero();
        let to_touch = (touch - joystick.center()).normalize_or_zero();
        assert!((to_thumb - to_touch).length() < TOLERANCE);
        assert!(
            (joystick.thumb().distance(joystick.center()) - joystick.travel_bound()).abs()
                < TOLERANCE
        );
    }

    #[test]
    fn touch_end_resets_thumb_and_reports_zero() {
        let (mut joystick, observer) = observed_joystick();

        joystick.touch_moved(Vec2::new(150.0, 50.0));
        joystick.touch_ended();

        assert_eq!(joystick.thumb(), Vec2::new(50.0, 50.0));
        assert_eq!(joystick.phase(), Phase::Idle);
        let calls = observer.calls.borrow();
        let (direction, distance) = *calls.last().expect("touch end should notify");
        assert_eq!(direction, Vec2::ZERO);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn touch_end_is_idempotent_and_still_notifies() {
        let (mut joystick, observer) = observed_joystick();

        joystick.touch_ended();
        joystick.touch_ended();

        assert_eq!(joystick.thumb(), joystick.center());
        let calls = observer.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(dir, dist)| *dir == Vec2::ZERO && *dist == 0.0));
    }

    #[test]
    fn reported_direction_is_unit_length_away_from_center() {
        let (mut joystick, observer) = observed_joystick();

        for point in [
            Vec2::new(62.0, 41.0),
            Vec2::new(10.0, 90.0),
            Vec2::new(50.0, -200.0),
        ] {
            joystick.touch_moved(point);
        }

        let calls = observer.calls.borrow();
        assert_eq!(calls.len(), 3);
        for (direction, _) in calls.iter() {
            assert!(
                (direction.length() - 1.0).abs() < TOLERANCE,
                "direction {direction:?} should be a unit vector"
            );
        }
    }

    #[test]
    fn touch_at_exact_center_reports_zero_direction() {
        let (mut joystick, observer) = observed_joystick();

        joystick.touch_moved(joystick.center());

        let calls = observer.calls.borrow();
        let (direction, distance) = calls[0];
        assert_eq!(direction, Vec2::ZERO);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn inner_radius_is_quarter_of_outer() {
        let joystick = Joystick::new(Vec2::new(50.0, 50.0), 50.0);
        assert_eq!(joystick.inner_radius(), 12.5);
        assert_eq!(joystick.travel_bound(), 37.5);
    }

    #[test]
    fn touch_began_starts_dragging() {
        let (mut joystick, _observer) = observed_joystick();
        joystick.touch_began(Vec2::new(55.0, 55.0));
        assert_eq!(joystick.phase(), Phase::Dragging);
        assert_eq!(joystick.thumb(), Vec2::new(55.0, 55.0));
    }

    #[test]
    fn dropped_observer_makes_notification_a_no_op() {
        let mut joystick = Joystick::new(Vec2::new(50.0, 50.0), 50.0);
        let observer = Rc::new(RecordingObserver::default());
        joystick.set_observer(Rc::downgrade(&observer) as Weak<dyn JoystickObserver>);
        drop(observer);

        // Must not panic or resurrect the observer.
        joystick.touch_moved(Vec2::new(70.0, 50.0));
        joystick.touch_ended();
    }
}
