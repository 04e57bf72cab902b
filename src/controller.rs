//! The walk controller facade
//!
//! Composes the pointer-lock capability, the input tracker, and the
//! motion integrator behind the surface host bindings use: lock/unlock,
//! position access, key and frame entry points, and the moved/unlocked
//! signals.

use std::time::{Duration, Instant};

use walklock_core::{ControllerEvent, EventBus, HandlerKey, Position, Throttle};
use walklock_input::{action_for_code, InputTracker, KeyAction};
use walklock_physics::{FrameOutcome, FrameScheduler, LoopState, MotionConfig, MotionIntegrator};

use crate::capability::PointerLock;

/// External render hook, invoked once per integrated frame
pub type RenderFn = Box<dyn FnMut()>;

/// First-person walk controller
///
/// Constructed once per camera. Each successful `lock()` starts a frame
/// session that integrates motion until unlock; `dispose()` permanently
/// terminates the controller.
pub struct WalkController<L: PointerLock, S: FrameScheduler> {
    capability: L,
    tracker: InputTracker,
    integrator: MotionIntegrator<S>,
    bus: EventBus,
    throttle: Throttle,
    render: RenderFn,
    disposed: bool,
}

impl<L: PointerLock, S: FrameScheduler> WalkController<L, S> {
    /// Create a controller around a capability and frame scheduler
    ///
    /// The anchor starts at eye height, resting on the ground plane.
    /// `move_interval` bounds the rate of the moved signal.
    pub fn new(
        mut capability: L,
        scheduler: S,
        render: RenderFn,
        config: MotionConfig,
        move_interval: Duration,
    ) -> Self {
        capability.anchor_mut().position.y = config.eye_height;
        Self {
            capability,
            tracker: InputTracker::new(),
            integrator: MotionIntegrator::new(config, scheduler),
            bus: EventBus::new(),
            throttle: Throttle::new(move_interval),
            render,
            disposed: false,
        }
    }

    /// Request pointer lock and, on success, start a frame session
    ///
    /// A denied request is logged and leaves the controller idle; there
    /// is no automatic retry.
    pub fn lock(&mut self) {
        if self.disposed || self.capability.is_locked() {
            return;
        }
        match self.capability.lock() {
            Ok(()) => self.enter_locked(Instant::now()),
            Err(err) => log::warn!("{}", err),
        }
    }

    /// Release pointer lock and end the frame session
    pub fn unlock(&mut self) {
        if self.disposed || !self.capability.is_locked() {
            return;
        }
        self.capability.unlock();
        self.enter_idle();
    }

    /// React to an externally triggered unlock (focus loss, host escape)
    ///
    /// Emits the unlocked signal exactly once per transition, the same as
    /// a host-initiated `unlock()`.
    pub fn notify_lock_lost(&mut self) {
        if self.disposed {
            return;
        }
        self.capability.unlock();
        self.enter_idle();
    }

    /// Whether the pointer is currently captured
    pub fn is_locked(&self) -> bool {
        self.capability.is_locked()
    }

    /// Snapshot of the current planar position and heading
    pub fn position(&self) -> Position {
        self.capability.anchor().snapshot()
    }

    /// Read access to the anchor node
    ///
    /// Hosts that mirror the viewpoint into a scene graph read the full
    /// 3D position and orientation from here.
    pub fn anchor(&self) -> &walklock_core::Anchor {
        self.capability.anchor()
    }

    /// Override position and heading directly, bypassing physics
    ///
    /// Used by hosts to re-sync the viewpoint from external state.
    pub fn set_position(&mut self, x: f32, z: f32, yaw: f32) {
        if self.disposed {
            return;
        }
        let anchor = self.capability.anchor_mut();
        anchor.position.x = x;
        anchor.position.z = z;
        anchor.set_yaw(yaw);
    }

    /// Register a handler for a controller signal
    pub fn subscribe<F>(&mut self, event: ControllerEvent, handler: F) -> HandlerKey
    where
        F: FnMut(&Position) + 'static,
    {
        self.bus.subscribe(event, handler)
    }

    /// Remove a previously registered handler
    pub fn unsubscribe(&mut self, key: HandlerKey) -> bool {
        self.bus.unsubscribe(key)
    }

    /// Key-down entry point, in legacy key codes
    ///
    /// Movement codes update held state; the jump code applies its
    /// impulse synchronously. Unknown codes are ignored. Handlers stay
    /// live while unlocked; the state they touch is reset on the next
    /// lock.
    pub fn handle_key_down(&mut self, code: u32) {
        if self.disposed {
            return;
        }
        match action_for_code(code) {
            Some(KeyAction::Jump) => self.integrator.jump(&mut self.tracker),
            Some(action) => self.tracker.set_held(action, true),
            None => {}
        }
    }

    /// Key-up entry point, in legacy key codes
    pub fn handle_key_up(&mut self, code: u32) {
        if self.disposed {
            return;
        }
        match action_for_code(code) {
            Some(KeyAction::Jump) | None => {}
            Some(action) => self.tracker.set_held(action, false),
        }
    }

    /// Forward relative mouse movement to the capability's mouse-look
    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.disposed {
            return;
        }
        self.capability.mouse_look(dx, dy);
    }

    /// Run one scheduled frame at time `now`
    ///
    /// Returns whether the loop is still alive (another frame was
    /// requested). The disposal check comes before anything else: a frame
    /// already scheduled when `dispose()` ran fires once, observes the
    /// flag, and does nothing.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let locked = self.capability.is_locked();
        let outcome = self.integrator.frame(
            locked,
            &mut self.tracker,
            self.capability.anchor_mut(),
            now,
        );
        match outcome {
            FrameOutcome::Stepped => {
                if self.throttle.ready(now) {
                    let pos = self.position();
                    self.bus.emit(ControllerEvent::Moved, &pos);
                }
                (self.render)();
                true
            }
            FrameOutcome::SkippedUnlocked => true,
            FrameOutcome::Halted => false,
        }
    }

    /// Permanently shut the controller down
    ///
    /// Idempotent: ends any active session without emitting, drops all
    /// subscriptions, and releases the capability. No anchor mutation or
    /// signal emission happens afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.integrator.end_session();
        self.bus.clear();
        self.capability.dispose();
        log::debug!("walk controller disposed");
    }

    fn enter_locked(&mut self, now: Instant) {
        self.tracker.reset();
        self.integrator.begin_session(now);
        log::debug!("walk controller locked");
    }

    fn enter_idle(&mut self) {
        if self.integrator.state() == LoopState::Locked {
            self.integrator.end_session();
            let pos = self.position();
            self.bus.emit(ControllerEvent::Unlocked, &pos);
        }
    }
}
