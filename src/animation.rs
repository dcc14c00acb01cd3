//! Frame loop driving a particle field.
//!
//! [`start`] moves the field and its surface into a tokio task that runs
//! `tick` then `render` once per frame until the returned
//! [`AnimationHandle`] is cancelled or dropped, or the surface goes away.
//! Cancellation is only observed while waiting for the next frame, so an
//! iteration that has begun always completes.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::error::FieldError;
use crate::particles::{Field, Surface, render};

/// Resolves once per displayed frame.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> impl Future<Output = ()> + Send;
}

/// Frame scheduler backed by a tokio interval. Late frames are skipped
/// rather than replayed in a burst.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    /// One frame of a 60 Hz display.
    pub const DISPLAY_RATE: Duration = Duration::from_micros(16_667);

    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

/// Scheduler at [`IntervalScheduler::DISPLAY_RATE`]. Like
/// [`IntervalScheduler::new`], panics outside a tokio runtime.
impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(Self::DISPLAY_RATE)
    }
}

impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> impl Future<Output = ()> + Send {
        async move {
            self.interval.tick().await;
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Cancelled,
    SurfaceLost,
}

/// Returned by [`AnimationHandle::join`] once the loop has stopped.
#[derive(Debug)]
pub struct AnimationReport {
    /// Completed tick+render iterations.
    pub frames: u64,
    pub exit: LoopExit,
    pub field: Field,
}

/// Controls a running loop. Dropping the handle cancels the loop.
#[derive(Debug)]
pub struct AnimationHandle {
    token: CancellationToken,
    resize_tx: watch::Sender<(u32, u32)>,
    task: JoinHandle<AnimationReport>,
    _teardown: DropGuard,
}

impl AnimationHandle {
    /// Stops scheduling further iterations.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Notifies the loop that the surface changed size. Applied before the
    /// next tick; if several arrive between frames only the newest counts.
    pub fn resize(&self, width: u32, height: u32) -> Result<(), FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::invalid(format!(
                "surface dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        self.resize_tx.send_replace((width, height));
        Ok(())
    }

    /// Waits for the loop to stop. Call [`cancel`](Self::cancel) first
    /// unless the surface is expected to go away on its own.
    pub async fn join(self) -> Result<AnimationReport, JoinError> {
        let Self {
            task, _teardown, ..
        } = self;
        task.await
    }
}

/// Spawns the frame loop for `field` on the current tokio runtime.
pub fn start<S, F, R>(field: Field, surface: S, scheduler: F, rng: R) -> AnimationHandle
where
    S: Surface + Send + 'static,
    F: FrameScheduler + Send + 'static,
    R: Rng + Send + 'static,
{
    let token = CancellationToken::new();
    let (resize_tx, resize_rx) = watch::channel(field.size());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "starting particle animation: {} particles on {}x{}",
        field.len(),
        field.width(),
        field.height()
    );

    let task = tokio::spawn(run_loop(
        field,
        surface,
        scheduler,
        rng,
        token.clone(),
        resize_rx,
    ));

    AnimationHandle {
        _teardown: token.clone().drop_guard(),
        token,
        resize_tx,
        task,
    }
}

async fn run_loop<S, F, R>(
    mut field: Field,
    mut surface: S,
    mut scheduler: F,
    mut rng: R,
    token: CancellationToken,
    mut resize_rx: watch::Receiver<(u32, u32)>,
) -> AnimationReport
where
    S: Surface,
    F: FrameScheduler,
    R: Rng,
{
    let mut frames = 0u64;

    let exit = loop {
        if token.is_cancelled() {
            break LoopExit::Cancelled;
        }

        // A closed channel means the handle is gone; the token covers that.
        if resize_rx.has_changed().unwrap_or(false) {
            let (width, height) = *resize_rx.borrow_and_update();
            if let Err(e) = field.resize(width, height) {
                #[cfg(feature = "tracing")]
                tracing::warn!("ignoring resize to {}x{}: {}", width, height, e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
            }
        }

        field.tick(&mut rng);
        if let Err(e) = render(&field, &mut surface) {
            #[cfg(feature = "tracing")]
            tracing::warn!("stopping particle animation after {} frames: {}", frames, e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
            break LoopExit::SurfaceLost;
        }
        frames += 1;

        tokio::select! {
            biased;
            _ = token.cancelled() => break LoopExit::Cancelled,
            _ = scheduler.next_frame() => {}
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!("particle animation stopped ({:?}) after {} frames", exit, frames);

    AnimationReport {
        frames,
        exit,
        field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::FieldConfig;
    use crate::particles::test_utils::{DrawCall, RecordingSurface};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(count: usize) -> Field {
        let mut rng = StdRng::seed_from_u64(42);
        Field::create(320, 240, count, &FieldConfig::default(), &mut rng).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_runs_until_cancelled() {
        let surface = RecordingSurface::new();
        let handle = start(field(10), surface.clone(), IntervalScheduler::default(), rng());

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
        let report = handle.join().await.expect("loop task panicked");

        assert_eq!(report.exit, LoopExit::Cancelled);
        assert!(report.frames >= 2, "only {} frames", report.frames);
        assert_eq!(surface.clear_count() as u64, report.frames);
        assert_eq!(surface.calls().len() as u64, report.frames * 11);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_first_frame() {
        let surface = RecordingSurface::new();
        let handle = start(field(3), surface.clone(), IntervalScheduler::default(), rng());

        handle.cancel();
        assert!(handle.is_cancelled());
        let report = handle.join().await.expect("loop task panicked");

        assert_eq!(report.exit, LoopExit::Cancelled);
        assert_eq!(report.frames, 0);
        assert!(surface.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_stops_when_surface_lost() {
        let surface = RecordingSurface::new();
        let handle = start(field(5), surface.clone(), IntervalScheduler::default(), rng());

        tokio::time::sleep(Duration::from_millis(50)).await;
        surface.tear_down();
        let report = handle.join().await.expect("loop task panicked");

        assert_eq!(report.exit, LoopExit::SurfaceLost);
        assert!(report.frames >= 1);
        assert_eq!(surface.clear_count() as u64, report.frames);
    }

    #[tokio::test(start_paused = true)]
    async fn test_torn_down_surface_never_draws() {
        let surface = RecordingSurface::new();
        surface.tear_down();
        let handle = start(field(5), surface.clone(), IntervalScheduler::default(), rng());

        let report = handle.join().await.expect("loop task panicked");

        assert_eq!(report.exit, LoopExit::SurfaceLost);
        assert_eq!(report.frames, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_reaches_field() {
        let surface = RecordingSurface::new();
        let handle = start(field(4), surface, IntervalScheduler::default(), rng());

        handle.resize(1024, 768).unwrap();
        handle.resize(800, 600).unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        handle.cancel();
        let report = handle.join().await.expect("loop task panicked");

        assert_eq!(report.field.size(), (800, 600));
        assert_eq!(report.field.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_frame_draws_ticked_positions() {
        let field = field(5);
        let before = field.particles().to_vec();
        let surface = RecordingSurface::new();
        let handle = start(field, surface.clone(), IntervalScheduler::default(), rng());

        // Only the first frame fits before the next interval tick.
        tokio::time::sleep(Duration::from_millis(1)).await;
        handle.cancel();
        let report = handle.join().await.expect("loop task panicked");
        assert_eq!(report.frames, 1);

        let calls = surface.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], DrawCall::Clear);
        for (call, pre) in calls[1..].iter().zip(&before) {
            let DrawCall::Circle { x, y, radius, .. } = *call else {
                panic!("expected a circle, got {:?}", call);
            };
            assert_eq!(radius, pre.radius());
            if pre.y() + pre.fall_speed() <= 240.0 {
                assert_eq!(y, pre.y() + pre.fall_speed());
                assert_eq!(x, pre.x());
            } else {
                assert_eq!(y, 0.0);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_applies_before_next_tick() {
        let field = field(10);
        let before = field.particles().to_vec();
        let new_height = 10.0;
        assert!(before.iter().any(|p| p.y() + p.fall_speed() > new_height));

        let surface = RecordingSurface::new();
        let handle = start(field, surface.clone(), IntervalScheduler::default(), rng());
        handle.resize(320, 10).unwrap();

        tokio::time::sleep(Duration::from_millis(1)).await;
        handle.cancel();
        let report = handle.join().await.expect("loop task panicked");
        assert_eq!(report.frames, 1);
        assert_eq!(report.field.size(), (320, 10));

        let calls = surface.calls();
        assert_eq!(calls.len(), 11);
        for (call, pre) in calls[1..].iter().zip(&before) {
            let DrawCall::Circle { y, .. } = *call else {
                panic!("expected a circle, got {:?}", call);
            };
            if pre.y() + pre.fall_speed() > new_height {
                assert_eq!(y, 0.0, "particle at {} should have wrapped", pre.y());
            } else {
                assert_eq!(y, pre.y() + pre.fall_speed());
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_rejects_zero() {
        let handle = start(field(1), RecordingSurface::new(), IntervalScheduler::default(), rng());
        assert!(matches!(
            handle.resize(0, 10),
            Err(FieldError::InvalidConfiguration(_))
        ));
        handle.cancel();
        let report = handle.join().await.expect("loop task panicked");
        assert_eq!(report.field.size(), (320, 240));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_field_keeps_running() {
        let surface = RecordingSurface::new();
        let handle = start(field(0), surface.clone(), IntervalScheduler::default(), rng());

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
        let report = handle.join().await.expect("loop task panicked");

        assert!(report.frames >= 2);
        assert_eq!(surface.calls().len() as u64, report.frames);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_loop() {
        let surface = RecordingSurface::new();
        let handle = start(field(2), surface.clone(), IntervalScheduler::default(), rng());

        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(handle);
        let drawn = surface.calls().len();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(surface.calls().len(), drawn);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_scheduler_period() {
        let scheduler = IntervalScheduler::default();
        assert_eq!(scheduler.period(), IntervalScheduler::DISPLAY_RATE);
    }

    #[test]
    #[should_panic]
    fn test_default_scheduler_requires_runtime() {
        let _ = IntervalScheduler::default();
    }
}
