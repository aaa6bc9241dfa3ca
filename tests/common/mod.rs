//! Shared helpers for gridcanvas integration tests.
//!
//! Provides a recording drawing surface, a manual scheduler and prebuilt
//! cores over the reference geometry (100x100 viewport, 50x50 cells).

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use gridcanvas::collaborator::NoopCollaborator;
use gridcanvas::render::{DrawSurface, PaintState};
use gridcanvas::task::TickScheduler;
use gridcanvas::types::GridConfig;
use gridcanvas::widget::GridCore;

/// A draw call recorded by `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Blit {
        sx: i32,
        sy: i32,
        width: i32,
        height: i32,
    },
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    StrokeRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    FillText {
        text: String,
        x: i32,
        y: i32,
    },
    SetPaint(PaintState),
}

/// Test double that records every surface call.
///
/// Text measurement is deterministic: every character is `char_width`
/// pixels wide.
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<DrawOp>>>,
    char_width: f64,
}

impl RecordingSurface {
    pub fn new(ops: Rc<RefCell<Vec<DrawOp>>>) -> Self {
        Self {
            ops,
            char_width: 10.0,
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn blit_background(&mut self, sx: i32, sy: i32, width: i32, height: i32) {
        self.ops.borrow_mut().push(DrawOp::Blit {
            sx,
            sy,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.borrow_mut().push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.borrow_mut().push(DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
        });
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32) {
        self.ops.borrow_mut().push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_paint(&mut self, paint: &PaintState) {
        self.ops.borrow_mut().push(DrawOp::SetPaint(paint.clone()));
    }
}

/// Observable scheduler state shared with the test.
#[derive(Debug, Default)]
pub struct SchedulerProbe {
    pub active: bool,
    pub interval_ms: Option<u32>,
    pub starts: u32,
    pub stops: u32,
}

/// Scheduler fake: records starts and stops, never fires on its own.
/// Tests drive ticks by calling `GridCore::scroll_tick` directly.
pub struct ManualScheduler {
    probe: Rc<RefCell<SchedulerProbe>>,
}

impl ManualScheduler {
    pub fn new(probe: Rc<RefCell<SchedulerProbe>>) -> Self {
        Self { probe }
    }
}

impl TickScheduler for ManualScheduler {
    fn start(&mut self, interval_ms: u32) {
        let mut probe = self.probe.borrow_mut();
        probe.active = true;
        probe.interval_ms = Some(interval_ms);
        probe.starts += 1;
    }

    fn stop(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.active = false;
        probe.stops += 1;
    }

    fn is_active(&self) -> bool {
        self.probe.borrow().active
    }
}

/// The reference geometry used throughout the tests.
pub fn test_config() -> GridConfig {
    GridConfig {
        id: "g1".to_string(),
        visual_class: String::new(),
        width: 100,
        height: 100,
        cell_width: 50,
        cell_height: 50,
        scroll_speed: 100,
    }
}

/// A core under test plus handles into its fakes.
pub struct TestGrid {
    pub core: GridCore,
    pub ops: Rc<RefCell<Vec<DrawOp>>>,
    pub probe: Rc<RefCell<SchedulerProbe>>,
}

impl TestGrid {
    /// Recorded draw ops so far, clearing the log.
    pub fn drain_ops(&self) -> Vec<DrawOp> {
        self.ops.borrow_mut().drain(..).collect()
    }
}

pub fn grid() -> TestGrid {
    grid_with(test_config())
}

pub fn grid_with(config: GridConfig) -> TestGrid {
    let config = config.normalized().expect("test config must be valid");
    let ops = Rc::new(RefCell::new(Vec::new()));
    let probe = Rc::new(RefCell::new(SchedulerProbe::default()));
    let core = GridCore::new(
        &config,
        Box::new(ManualScheduler::new(Rc::clone(&probe))),
        Box::new(RecordingSurface::new(Rc::clone(&ops))),
        Box::new(NoopCollaborator),
    );
    TestGrid { core, ops, probe }
}
