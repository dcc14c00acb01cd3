//! Recording surface for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::FieldError;
use crate::particles::{Rgb, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle { x: f64, y: f64, radius: f64, color: Rgb },
}

/// Records draw calls. Clones share the same log, so a test can keep one
/// clone while another is moved into the animation task.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<DrawCall>>>,
    torn_down: Arc<AtomicBool>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later draw call fails with `SurfaceUnavailable`.
    pub fn tear_down(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == DrawCall::Clear)
            .count()
    }

    fn record(&self, call: DrawCall) -> Result<(), FieldError> {
        if self.torn_down.load(Ordering::SeqCst) {
            return Err(FieldError::SurfaceUnavailable);
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<(), FieldError> {
        self.record(DrawCall::Clear)
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) -> Result<(), FieldError> {
        self.record(DrawCall::Circle { x, y, radius, color })
    }
}
