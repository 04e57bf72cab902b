//! Per-frame motion integration
//!
//! Converts held-key state and elapsed time into velocity and position
//! updates on the anchor: exponential damping on the horizontal axes,
//! scaled gravity on the vertical axis, acceleration while a movement key
//! is held, and a ground clamp that re-arms the jump.

use std::time::Instant;

use walklock_core::{Anchor, FrameClock};
use walklock_input::InputTracker;
use walklock_math::Vec3;

/// Upper bound on a single integration step in seconds
///
/// Prevents huge physics steps on the first frame after lock or after the
/// window regains focus. Also keeps the damping factor `1 - damping * dt`
/// positive, so damping can only shrink a velocity component, never flip
/// its sign.
const MAX_FRAME_DELTA: f32 = 1.0 / 30.0;

/// Tuning constants for the motion integrator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Horizontal velocity decay rate (per second, frame-rate dependent)
    pub damping: f32,
    /// Downward acceleration (scaled units, not real-world m/s^2)
    pub gravity: f32,
    /// Acceleration while a movement key is held
    pub accel: f32,
    /// Vertical velocity added by a jump
    pub jump_impulse: f32,
    /// Ground plane height; the anchor never goes below this
    pub eye_height: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            gravity: 9.8 * 80.0,
            accel: 400.0,
            jump_impulse: 200.0,
            eye_height: 16.0,
        }
    }
}

/// Frame-loop state of the integrator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Not locked; no frames are being integrated
    Idle,
    /// Locked; the frame loop is live
    Locked,
}

/// What a scheduled frame did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Integrated a step and requested the next frame
    Stepped,
    /// Capability was unlocked; skipped the step but requested the next
    /// frame anyway
    SkippedUnlocked,
    /// The session ended; no step, no further frames
    Halted,
}

/// Requests the next frame callback from the host
///
/// The integrator owns this registration: it requests the first frame
/// when a session begins and one more at the end of every frame that is
/// not halted. The host calls back into the controller at its next
/// display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// The per-frame motion integrator
///
/// Owns the velocity exclusively; everything else it touches (input
/// tracker, anchor) is borrowed for the duration of a step.
pub struct MotionIntegrator<S: FrameScheduler> {
    velocity: Vec3,
    direction: Vec3,
    clock: FrameClock,
    state: LoopState,
    config: MotionConfig,
    scheduler: S,
}

impl<S: FrameScheduler> MotionIntegrator<S> {
    /// Create an idle integrator
    pub fn new(config: MotionConfig, scheduler: S) -> Self {
        Self {
            velocity: Vec3::ZERO,
            direction: Vec3::ZERO,
            clock: FrameClock::new(Instant::now()),
            state: LoopState::Idle,
            config,
            scheduler,
        }
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Current velocity (x lateral, y vertical, z forward/back)
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Direction computed by the most recent step; unit length or zero
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The active tuning constants
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Enter the Locked state: reset per-session state and start the loop
    pub fn begin_session(&mut self, now: Instant) {
        self.velocity = Vec3::ZERO;
        self.direction = Vec3::ZERO;
        self.clock.reset(now);
        self.state = LoopState::Locked;
        log::debug!("motion integrator: session started");
        self.scheduler.request_frame();
    }

    /// Enter the Idle state; the in-flight frame stops rescheduling
    pub fn end_session(&mut self) {
        if self.state == LoopState::Locked {
            log::debug!("motion integrator: session ended");
        }
        self.state = LoopState::Idle;
    }

    /// Apply the jump impulse if available, then disarm it
    ///
    /// Called synchronously from the jump key-down handler. The impulse
    /// lands on the velocity immediately; redundant jumps while airborne
    /// are prevented by the flag alone, not by a position check.
    pub fn jump(&mut self, input: &mut InputTracker) {
        if input.jump_available() {
            self.velocity.y += self.config.jump_impulse;
        }
        input.set_jump_available(false);
    }

    /// Run one scheduled frame
    ///
    /// Checked in order: a halted session stops the loop; an unlocked
    /// capability skips integration but keeps the loop alive; otherwise
    /// one step is integrated. Every non-halted frame requests the next
    /// one.
    pub fn frame(
        &mut self,
        locked: bool,
        input: &mut InputTracker,
        anchor: &mut Anchor,
        now: Instant,
    ) -> FrameOutcome {
        if self.state == LoopState::Idle {
            return FrameOutcome::Halted;
        }

        let outcome = if locked {
            self.step(input, anchor, now);
            FrameOutcome::Stepped
        } else {
            FrameOutcome::SkippedUnlocked
        };

        self.scheduler.request_frame();
        outcome
    }

    /// Integrate a single step at time `now`
    ///
    /// The damping law is deliberately frame-rate dependent
    /// (`v -= v * damping * dt` rather than a normalized exponential);
    /// consumers tuned against it depend on the exact decay curve.
    pub fn step(&mut self, input: &mut InputTracker, anchor: &mut Anchor, now: Instant) {
        let delta = self.clock.tick(now).min(MAX_FRAME_DELTA);

        self.velocity.x -= self.velocity.x * self.config.damping * delta;
        self.velocity.z -= self.velocity.z * self.config.damping * delta;
        self.velocity.y -= self.config.gravity * delta;

        self.direction.z = input.axis_forward();
        self.direction.x = input.axis_strafe();
        self.direction.y = 0.0;
        self.direction = self.direction.normalized();

        // Accelerate only while a key on that axis is held; a released
        // axis decays through damping alone
        if input.forward() || input.backward() {
            self.velocity.z -= self.direction.z * self.config.accel * delta;
        }
        if input.left() || input.right() {
            self.velocity.x -= self.direction.x * self.config.accel * delta;
        }

        anchor.translate_local(self.velocity * delta);

        if anchor.position.y < self.config.eye_height {
            self.velocity.y = 0.0;
            anchor.position.y = self.config.eye_height;
            input.set_jump_available(true);
        }
    }
}
