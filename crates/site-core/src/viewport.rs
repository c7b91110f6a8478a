//! Viewport dimensions shared between the resize handler and the render pass.
//!
//! The cell has exactly one writer (the resize listener). Any number of
//! readers may observe it; a reader sees at most one frame of stale size.

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Fraction of each dimension added on every side as wraparound margin.
pub const OVERSCAN: f32 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Visible area plus `OVERSCAN` on each side, as (min, max) corners.
    pub fn extended_bounds(&self) -> (Vec2, Vec2) {
        let min = Vec2::new(-self.width * OVERSCAN, -self.height * OVERSCAN);
        let max = Vec2::new(
            self.width * (1.0 + OVERSCAN),
            self.height * (1.0 + OVERSCAN),
        );
        (min, max)
    }
}

/// Owned cell holding the current viewport.
///
/// `split` consumes the cell, so exactly one writer can ever exist.
pub struct ViewportCell {
    value: Rc<Cell<Viewport>>,
}

impl ViewportCell {
    pub fn new(initial: Viewport) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> Viewport {
        self.value.get()
    }

    pub fn split(self) -> (ViewportReader, ViewportWriter) {
        let reader = ViewportReader {
            value: self.value.clone(),
        };
        let writer = ViewportWriter {
            value: self.value,
            attached: Rc::new(Cell::new(true)),
        };
        (reader, writer)
    }
}

#[derive(Clone)]
pub struct ViewportReader {
    value: Rc<Cell<Viewport>>,
}

impl ViewportReader {
    #[inline]
    pub fn get(&self) -> Viewport {
        self.value.get()
    }
}

/// The resize side of the cell. Cloning shares the attachment flag, so
/// detaching any clone silences all of them.
#[derive(Clone)]
pub struct ViewportWriter {
    value: Rc<Cell<Viewport>>,
    attached: Rc<Cell<bool>>,
}

impl ViewportWriter {
    /// Stores the new size. Returns `false` (and writes nothing) after detach.
    pub fn set(&self, viewport: Viewport) -> bool {
        if !self.attached.get() {
            return false;
        }
        self.value.set(viewport);
        true
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}
