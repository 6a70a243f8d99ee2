//! # Simulation session
//!
//! The session object that replaces ambient globals: it owns the grid
//! pair, the scheduler, the view state, and the pattern library, and it
//! is what the host hands input events to. Everything the control
//! surface can do maps onto one public operation here, and every
//! operation that changes visible state while the scheduler is stopped
//! forces one render so the canvas never shows stale content.

use std::time::Instant;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::patterns::PatternLibrary;
use crate::render::{DrawingSurface, Renderer};
use crate::simulation::buffer::DoubleBuffer;
use crate::simulation::scheduler::{RunState, Scheduler, MAX_RATE, MIN_RATE, RATE_STEP};
use crate::view::ViewState;

/// Control requests the input surface can deliver, one per UI control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlAction {
    Start,
    Pause,
    Reset,
    CellSizeUp,
    CellSizeDown,
    RateUp,
    RateDown,
}

/// One running Game of Life: grids, timer, zoom level, and patterns.
pub struct LifeSession {
    buffer: DoubleBuffer,
    scheduler: Scheduler,
    view: ViewState,
    patterns: PatternLibrary,
    renderer: Renderer,
}

impl LifeSession {
    /// Session over a canvas of the given pixel dimensions, fully zoomed
    /// out, stopped, all cells dead, classic patterns preloaded.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        let view = ViewState::new(canvas_width, canvas_height);
        let buffer = DoubleBuffer::new(view.grid_width(), view.grid_height());
        log::info!(
            "session created: {}x{} cells at {}px",
            view.grid_width(),
            view.grid_height(),
            view.cell_size()
        );
        Self {
            buffer,
            scheduler: Scheduler::new(),
            view,
            patterns: PatternLibrary::with_classics(),
            renderer: Renderer::new(),
        }
    }

    /// Dispatch one control request from the input surface.
    pub fn apply(&mut self, action: ControlAction, now: Instant, surface: &mut dyn DrawingSurface) {
        match action {
            ControlAction::Start => self.start(now),
            ControlAction::Pause => self.pause(),
            ControlAction::Reset => self.reset(surface),
            ControlAction::CellSizeUp => self.cell_size_up(now, surface),
            ControlAction::CellSizeDown => self.cell_size_down(now, surface),
            ControlAction::RateUp => self.rate_up(now, surface),
            ControlAction::RateDown => self.rate_down(now, surface),
        }
    }

    /// Arm the step timer at the current target rate.
    pub fn start(&mut self, now: Instant) {
        self.scheduler.start(self.scheduler.target_rate(), now);
    }

    /// Disarm the step timer. Idempotent.
    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    /// Pause the timer, clear both grids at the current dimensions, and
    /// render the emptied canvas.
    pub fn reset(&mut self, surface: &mut dyn DrawingSurface) {
        self.pause();
        self.buffer
            .reset(self.view.grid_width(), self.view.grid_height());
        self.render(surface);
    }

    /// Double the cell size, which reallocates both grids at the smaller
    /// derived dimensions. Running state is preserved; while stopped the
    /// emptied grid is rendered immediately.
    pub fn cell_size_up(&mut self, now: Instant, surface: &mut dyn DrawingSurface) {
        if self.view.zoom_in() {
            self.apply_cell_size_change(now, surface);
        }
    }

    /// Halve the cell size; see [`LifeSession::cell_size_up`].
    pub fn cell_size_down(&mut self, now: Instant, surface: &mut dyn DrawingSurface) {
        if self.view.zoom_out() {
            self.apply_cell_size_change(now, surface);
        }
    }

    fn apply_cell_size_change(&mut self, now: Instant, surface: &mut dyn DrawingSurface) {
        self.buffer
            .reset(self.view.grid_width(), self.view.grid_height());
        log::debug!(
            "grid reallocated: {}x{} cells at {}px",
            self.view.grid_width(),
            self.view.grid_height(),
            self.view.cell_size()
        );
        match self.scheduler.state() {
            // Re-arm so no already-due tick fires against the old
            // dimensions; the interval itself is unchanged.
            RunState::Running { rate } => self.scheduler.start(rate, now),
            RunState::Stopped => self.render(surface),
        }
    }

    /// Raise the target rate one step.
    pub fn rate_up(&mut self, now: Instant, surface: &mut dyn DrawingSurface) {
        self.change_rate(self.scheduler.target_rate().saturating_add(RATE_STEP), now, surface);
    }

    /// Lower the target rate one step.
    pub fn rate_down(&mut self, now: Instant, surface: &mut dyn DrawingSurface) {
        self.change_rate(self.scheduler.target_rate().saturating_sub(RATE_STEP), now, surface);
    }

    /// Change the target rate, clamped to the supported range. Grid
    /// contents are untouched; while stopped the frame is redrawn once so
    /// the rate label matches the new target.
    pub fn change_rate(&mut self, rate: u32, now: Instant, surface: &mut dyn DrawingSurface) {
        let was_running = self.scheduler.change_rate(rate, now);
        if !was_running {
            self.render(surface);
        }
    }

    /// Set the target rate exactly, rejecting out-of-range values instead
    /// of clamping. The step controls clamp; hosts wiring a free-form rate
    /// input use this so a bad value never reaches the step loop.
    pub fn set_rate(
        &mut self,
        rate: u32,
        now: Instant,
        surface: &mut dyn DrawingSurface,
    ) -> Result<()> {
        if !(MIN_RATE..=MAX_RATE).contains(&rate) {
            return Err(Error::InvalidRate(rate));
        }
        self.change_rate(rate, now, surface);
        Ok(())
    }

    /// Set the cell size exactly, rejecting values outside `[1, 128]` or
    /// off the doubling ladder. A changed size reallocates the grids just
    /// like the zoom controls do.
    pub fn set_cell_size(
        &mut self,
        size: u32,
        now: Instant,
        surface: &mut dyn DrawingSurface,
    ) -> Result<()> {
        if self.view.set_cell_size(size)? {
            self.apply_cell_size_change(now, surface);
        }
        Ok(())
    }

    /// Stamp a named pattern with its origin at `(row, col)` and render
    /// the result immediately.
    ///
    /// The stamp lands in both buffers so it survives the next swap;
    /// offsets falling outside the grid are dropped.
    pub fn stamp(
        &mut self,
        row: i32,
        col: i32,
        pattern_name: &str,
        surface: &mut dyn DrawingSurface,
    ) -> Result<()> {
        let pattern = self
            .patterns
            .get(pattern_name)
            .ok_or_else(|| Error::UnknownPattern(pattern_name.to_string()))?;
        self.buffer.stamp(row, col, pattern);
        self.render(surface);
        Ok(())
    }

    /// Stamp at a pointer position, translating canvas pixels to the cell
    /// under the click.
    pub fn stamp_at_pixel(
        &mut self,
        x: u32,
        y: u32,
        pattern_name: &str,
        surface: &mut dyn DrawingSurface,
    ) -> Result<()> {
        let col = (x / self.view.cell_size()) as i32;
        let row = (y / self.view.cell_size()) as i32;
        self.stamp(row, col, pattern_name, surface)
    }

    /// Pump the scheduler: run one step-and-render per due tick.
    ///
    /// The host event loop calls this with the current instant; a full
    /// step and render always completes before the next event is handled.
    pub fn update(&mut self, now: Instant, surface: &mut dyn DrawingSurface) {
        for _ in 0..self.scheduler.due_ticks(now) {
            self.buffer.step();
            self.render(surface);
        }
    }

    /// Draw the current visible grid and status labels.
    pub fn render(&self, surface: &mut dyn DrawingSurface) {
        self.renderer.render(
            &self.view,
            self.buffer.visible(),
            self.scheduler.target_rate(),
            surface,
        );
    }

    /// The grid currently on screen.
    pub fn visible_grid(&self) -> &Grid {
        self.buffer.visible()
    }

    /// Pattern library, mutable so the host can load bitmap patterns at
    /// initialization.
    pub fn patterns_mut(&mut self) -> &mut PatternLibrary {
        &mut self.patterns
    }

    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn target_rate(&self) -> u32 {
        self.scheduler.target_rate()
    }

    pub fn cell_size(&self) -> u32 {
        self.view.cell_size()
    }

    pub fn generation(&self) -> u64 {
        self.buffer.generation()
    }
}
