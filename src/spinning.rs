///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::{Duration, Instant};

use druid::{widget::Controller, Data, Event, Lens, Point, Widget};

use crate::easing::CubicBezierEasing;
use crate::segments::{display_degrees, SegmentTable};
use crate::{ColorLabel, SpinPhase};

/// Divisor applied to the drag's vertical velocity (px/s) to get the rotation
/// increment in degrees.
pub const VELOCITY_DAMPING: f64 = 7.0;

/// How long the wheel takes to ease onto a new target.
pub const SPIN_DURATION: Duration = Duration::from_millis(1000);

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinDataAccess
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub trait SpinDataAccess {
    fn get_rotation(&self) -> f64;
    fn set_rotation(&mut self, rotation: f64);
    fn get_spin_target(&self) -> f64;
    fn apply_gesture_velocity(&mut self, velocity_y: f64);
    fn settle(&mut self);
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// WheelState
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// The wheel's rotation state and the last committed classification.
///
/// `rotation` is the displayed value, moved every animation frame; `target`
/// is where the current animation is headed. `current_color` and
/// `current_angle` only change when an animation settles, matching the info
/// box below the wheel.
#[derive(Debug, Clone, PartialEq, Data, Lens)]
pub struct WheelState {
    pub rotation: f64,
    pub target: f64,
    pub phase: SpinPhase,
    pub current_color: ColorLabel,
    pub current_angle: u16,
}

impl WheelState {
    pub fn new(segments: &SegmentTable) -> Self {
        Self {
            rotation: 0.0,
            target: 0.0,
            phase: SpinPhase::Settled,
            current_color: segments.classify(0.0),
            current_angle: 0,
        }
    }

    /// Retargets the wheel from a drag sample's vertical velocity (px/s).
    ///
    /// The increment is `|velocity| / VELOCITY_DAMPING` degrees on top of the
    /// current displayed rotation. Successive samples simply replace the
    /// target (last write wins); the in-flight animation is restarted by the
    /// controller, not cancelled here.
    pub fn apply_gesture_velocity(&mut self, velocity_y: f64) {
        if !velocity_y.is_finite() {
            log::warn!("Non-finite gesture velocity: {:?}", velocity_y);
            return;
        }
        self.target = self.rotation + velocity_y.abs() / VELOCITY_DAMPING;
        self.phase = SpinPhase::Animating;
    }

    /// Commits the settled rotation and reclassifies. A no-op when the wheel
    /// is already settled.
    pub fn on_animation_settle(&mut self, segments: &SegmentTable) {
        if self.phase == SpinPhase::Settled {
            return;
        }
        self.rotation = self.target;
        self.phase = SpinPhase::Settled;
        self.current_angle = display_degrees(self.rotation);
        self.current_color = segments.classify(self.rotation);
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// WheelData
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// App data for a color wheel: the spin state plus the segment table it
/// classifies against.
#[derive(Debug, Clone, Lens)]
pub struct WheelData {
    pub state: WheelState,
    pub segments: SegmentTable,
}

impl WheelData {
    pub fn new() -> Self {
        Self::with_table(SegmentTable::default())
    }

    pub fn with_table(segments: SegmentTable) -> Self {
        Self {
            state: WheelState::new(&segments),
            segments,
        }
    }
}

impl Default for WheelData {
    fn default() -> Self {
        Self::new()
    }
}

impl Data for WheelData {
    fn same(&self, other: &Self) -> bool {
        // The table is fixed after construction, so state carries the change.
        self.state.same(&other.state) && self.segments == other.segments
    }
}

impl SpinDataAccess for WheelData {
    fn get_rotation(&self) -> f64 {
        self.state.rotation
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.state.rotation = rotation;
    }

    fn get_spin_target(&self) -> f64 {
        self.state.target
    }

    fn apply_gesture_velocity(&mut self, velocity_y: f64) {
        self.state.apply_gesture_velocity(velocity_y);
    }

    fn settle(&mut self) {
        self.state.on_animation_settle(&self.segments);
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinAnimation
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// A fixed-duration eased interpolation from `start` to `target`, advanced by
/// anim-frame intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    start: f64,
    target: f64,
    elapsed: Duration,
    duration: Duration,
    easing: CubicBezierEasing,
}

impl SpinAnimation {
    pub fn new(start: f64, target: f64) -> Self {
        Self {
            start,
            target,
            elapsed: Duration::ZERO,
            duration: SPIN_DURATION,
            easing: CubicBezierEasing::spin_settle(),
        }
    }

    /// Advances by one frame interval and returns the rotation to display.
    pub fn tick(&mut self, interval_nanos: u64) -> f64 {
        self.elapsed = self.elapsed.saturating_add(Duration::from_nanos(interval_nanos));
        if self.is_complete() {
            return self.target;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.start + (self.target - self.start) * self.easing.eval(progress)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinController
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Turns a left-button vertical drag into an animated spin.
///
/// Each mouse-move sample while dragging yields a vertical velocity
/// (Δy / Δt against the previous sample); the data is retargeted and the
/// animation restarted from the currently displayed rotation. The settle
/// event fires once the animation runs its full duration.
pub struct SpinController {
    last_sample: Option<(Point, Instant)>,
    animation: Option<SpinAnimation>,
}

impl SpinController {
    pub fn new() -> Self {
        Self {
            last_sample: None,
            animation: None,
        }
    }
}

impl Default for SpinController {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Data + SpinDataAccess, W: Widget<T>> Controller<T, W> for SpinController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut druid::EventCtx,
        event: &Event,
        data: &mut T,
        env: &druid::Env,
    ) {
        child.event(ctx, event, data, env);

        if ctx.is_handled() {
            return;
        }

        match event {
            Event::MouseDown(mouse_event) => {
                if mouse_event.button.is_left() {
                    self.last_sample = Some((mouse_event.window_pos, Instant::now()));
                    ctx.set_active(true);
                }
            }
            Event::MouseMove(mouse_event) => {
                if let Some((previous_position, previous_instant)) = self.last_sample {
                    let dt = previous_instant.elapsed().as_secs_f64();
                    if dt > 0.0 {
                        let velocity_y = (mouse_event.window_pos.y - previous_position.y) / dt;
                        data.apply_gesture_velocity(velocity_y);
                        self.animation =
                            Some(SpinAnimation::new(data.get_rotation(), data.get_spin_target()));
                        ctx.request_anim_frame();
                    }
                    self.last_sample = Some((mouse_event.window_pos, Instant::now()));
                    ctx.set_handled();
                }
            }
            Event::MouseUp(mouse_event) => {
                if mouse_event.button.is_left() {
                    self.last_sample = None;
                    ctx.set_active(false);
                }
            }
            Event::AnimFrame(interval) => {
                if let Some(animation) = self.animation.as_mut() {
                    data.set_rotation(animation.tick(*interval));
                    if animation.is_complete() {
                        self.animation = None;
                        data.settle();
                    } else {
                        ctx.request_anim_frame();
                    }
                    ctx.request_paint();
                }
            }
            _ => {}
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Tests
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    fn settled_wheel() -> WheelData {
        WheelData::new()
    }

    #[test]
    fn gesture_velocity_retargets_by_damped_magnitude() {
        let mut data = settled_wheel();
        data.apply_gesture_velocity(700.0);
        assert_eq!(data.state.target, 100.0);
        assert_eq!(data.state.phase, SpinPhase::Animating);
        // The displayed rotation only moves once frames tick.
        assert_eq!(data.state.rotation, 0.0);
    }

    #[test]
    fn downward_and_upward_drags_both_spin_forward() {
        let mut up = settled_wheel();
        let mut down = settled_wheel();
        up.apply_gesture_velocity(-350.0);
        down.apply_gesture_velocity(350.0);
        assert_eq!(up.state.target, down.state.target);
        assert_eq!(up.state.target, 50.0);
    }

    #[test]
    fn later_gesture_samples_win() {
        let mut data = settled_wheel();
        data.apply_gesture_velocity(7000.0);
        data.apply_gesture_velocity(70.0);
        // Rotation has not moved between samples, so the second target
        // replaces the first outright.
        assert_eq!(data.state.target, 10.0);
    }

    #[test]
    fn non_finite_velocity_is_dropped() {
        let mut data = settled_wheel();
        data.apply_gesture_velocity(f64::NAN);
        assert_eq!(data.state.phase, SpinPhase::Settled);
        assert_eq!(data.state.target, 0.0);
    }

    #[test]
    fn settle_commits_rotation_and_classification() {
        let mut data = settled_wheel();
        // 725 degrees of accumulated spin: reads as 5, which is Red.
        data.apply_gesture_velocity(725.0 * VELOCITY_DAMPING);
        data.settle();
        assert_eq!(data.state.phase, SpinPhase::Settled);
        assert_eq!(data.state.rotation, 725.0);
        assert_eq!(data.state.current_angle, 5);
        assert_eq!(data.state.current_color, ColorLabel::Red);
    }

    #[test]
    fn settle_at_exactly_two_seventy_reads_blue() {
        // [180, 270) is half-open, so 270.0 belongs to Blue.
        let mut data = settled_wheel();
        data.apply_gesture_velocity(270.0 * VELOCITY_DAMPING);
        data.settle();
        assert_eq!(data.state.current_color, ColorLabel::Blue);
        assert_eq!(data.state.current_angle, 270);
    }

    #[test]
    fn settling_twice_is_a_no_op() {
        let mut data = settled_wheel();
        data.apply_gesture_velocity(315.0 * VELOCITY_DAMPING);
        data.settle();
        let committed = data.state.clone();
        data.settle();
        assert_eq!(data.state, committed);
    }

    #[test]
    fn animation_reaches_its_target_at_full_duration() {
        let mut animation = SpinAnimation::new(0.0, 100.0);
        let half = SPIN_DURATION.as_nanos() as u64 / 2;
        let midway = animation.tick(half);
        assert!(!animation.is_complete());
        // Ease-out curve: most of the travel happens early.
        assert!(midway > 50.0 && midway < 100.0);

        let settled = animation.tick(half);
        assert!(animation.is_complete());
        assert_eq!(settled, 100.0);
        // Extra frames past completion hold the target.
        assert_eq!(animation.tick(half), 100.0);
    }

    #[test]
    fn animation_interpolates_monotonically_upward() {
        let mut animation = SpinAnimation::new(10.0, 370.0);
        let step = SPIN_DURATION.as_nanos() as u64 / 20;
        let mut previous = 10.0;
        for _ in 0..20 {
            let value = animation.tick(step);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 370.0);
    }
}
