//! Timer-driven viewport panning: held and flung scroll modes.

use crate::layout::Viewport;
use crate::task::TickScheduler;

/// Pixels the viewport moves per scroll tick.
pub const SCROLL_STEP: i32 = 5;

/// Ticks a flung scroll runs before stopping on its own.
pub const FLING_TICKS: u32 = 50;

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Per-tick viewport delta for this direction.
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (SCROLL_STEP, 0),
            Direction::Left => (-SCROLL_STEP, 0),
            Direction::Down => (0, SCROLL_STEP),
            Direction::Up => (0, -SCROLL_STEP),
        }
    }
}

/// How the current scroll task was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Idle,
    /// Affordance press or arrow key held down; runs until stopped.
    Held,
    /// Wheel fling; runs a fixed tick budget, then stops on its own.
    Flung,
}

/// Scroll state machine driving `Viewport::move_by` from a recurring task.
pub struct ScrollEngine {
    direction: Option<Direction>,
    mode: ScrollMode,
    fling_ticks_left: u32,
    speed_ms: u32,
}

impl ScrollEngine {
    pub fn new(speed_ms: u32) -> Self {
        Self {
            direction: None,
            mode: ScrollMode::Idle,
            fling_ticks_left: 0,
            speed_ms,
        }
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.mode != ScrollMode::Idle
    }

    /// Start a held scroll: one immediate step, then a repeating task.
    /// A first step that clamps at the origin leaves the engine idle.
    pub fn start_held(
        &mut self,
        direction: Direction,
        viewport: &mut Viewport,
        scheduler: &mut dyn TickScheduler,
    ) -> bool {
        self.start(direction, ScrollMode::Held, 0, viewport, scheduler)
    }

    /// Start a flung scroll: like a held scroll, but with a fixed tick
    /// budget after which it stops on its own.
    pub fn start_flung(
        &mut self,
        direction: Direction,
        viewport: &mut Viewport,
        scheduler: &mut dyn TickScheduler,
    ) -> bool {
        self.start(
            direction,
            ScrollMode::Flung,
            FLING_TICKS,
            viewport,
            scheduler,
        )
    }

    fn start(
        &mut self,
        direction: Direction,
        mode: ScrollMode,
        budget: u32,
        viewport: &mut Viewport,
        scheduler: &mut dyn TickScheduler,
    ) -> bool {
        let (dx, dy) = direction.delta();
        if !viewport.move_by(dx, dy) {
            self.stop(scheduler);
            return false;
        }
        self.direction = Some(direction);
        self.mode = mode;
        self.fling_ticks_left = budget;
        scheduler.start(self.speed_ms);
        true
    }

    /// One timer tick: advance the viewport, spend the fling budget, and
    /// auto-stop at the origin clamp or when the budget runs out.
    ///
    /// Returns whether a redraw is needed. A clamped step still reports
    /// `true`: the clamp snaps the origin, and the frame after the stop
    /// paints the settled position.
    pub fn tick(&mut self, viewport: &mut Viewport, scheduler: &mut dyn TickScheduler) -> bool {
        let Some(direction) = self.direction else {
            return false;
        };
        let (dx, dy) = direction.delta();
        if !viewport.move_by(dx, dy) {
            self.stop(scheduler);
            return true;
        }
        if self.mode == ScrollMode::Flung {
            self.fling_ticks_left = self.fling_ticks_left.saturating_sub(1);
            if self.fling_ticks_left == 0 {
                self.stop(scheduler);
            }
        }
        true
    }

    /// Cancel any running task and reset to idle. Idempotent.
    pub fn stop(&mut self, scheduler: &mut dyn TickScheduler) {
        scheduler.stop();
        self.direction = None;
        self.mode = ScrollMode::Idle;
        self.fling_ticks_left = 0;
    }
}
