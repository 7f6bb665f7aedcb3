use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Application-level events
#[derive(Debug, Clone)]
pub enum Event {
    /// User key press
    Key(KeyEvent),
    /// Animation / render tick
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Handles event collection from multiple sources.
///
/// Uses crossterm's async `EventStream` (via `futures::StreamExt`) instead
/// of blocking `event::poll()` / `event::read()`, so no tokio worker
/// thread is ever blocked.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Create a new event handler. Spawns background tasks for async input
    /// and tick generation.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let _tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));

        // Async input task — uses crossterm's EventStream (non-blocking)
        let input_tx = tx.clone();
        let input_stop = stop.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                if input_stop.load(Ordering::Relaxed) {
                    return;
                }
                let maybe_event = reader.next().await;
                if input_stop.load(Ordering::Relaxed) {
                    return;
                }
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => {
                        if key.kind == KeyEventKind::Press
                            && input_tx.send(Event::Key(key)).is_err()
                        {
                            return;
                        }
                    }
                    Some(Ok(CrosstermEvent::Resize(w, h))) => {
                        if input_tx.send(Event::Resize(w, h)).is_err() {
                            return;
                        }
                    }
                    Some(Err(_)) | None => {
                        // Stream ended or errored — exit gracefully
                        return;
                    }
                    _ => {}
                }
            }
        });

        // Tick task — the render cadence. The frame clock turns elapsed
        // time into cycle fractions independently of this rate.
        let tick_tx = tx.clone();
        let tick_stop = stop.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_rate_ms.max(1)));
            loop {
                interval.tick().await;
                if tick_stop.load(Ordering::Relaxed) {
                    return;
                }
                if tick_tx.send(Event::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx, _tx: tx, stop }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Signal all background tasks to stop
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

// ── Frame clock ───────────────────────────────────────────────────────

/// The host-side animation clock: turns wall time since the last
/// `restart` into the cycling fraction the indicator consumes. A restart
/// puts the cycle back at fraction zero, so every run begins from the
/// top of the cycle.
#[derive(Debug)]
pub struct FrameClock {
    epoch: Instant,
    period: Duration,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            epoch: Instant::now(),
            period,
        }
    }

    /// Restart the cycle at fraction zero.
    pub fn restart(&mut self) {
        self.epoch = Instant::now();
    }

    /// Current position within the cycle, in `[0, 1)`.
    pub fn fraction(&self) -> f64 {
        cycle_fraction(self.epoch.elapsed().as_secs_f64(), self.period.as_secs_f64())
    }
}

/// Wrap elapsed seconds into a cycle fraction. A degenerate period pins
/// the cycle at zero instead of dividing by it.
fn cycle_fraction(elapsed_secs: f64, period_secs: f64) -> f64 {
    if period_secs <= 0.0 {
        return 0.0;
    }
    (elapsed_secs / period_secs).fract()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_wrap_around_the_period() {
        assert_eq!(cycle_fraction(0.0, 1.5), 0.0);
        assert_eq!(cycle_fraction(0.75, 1.5), 0.5);
        assert_eq!(cycle_fraction(1.5, 1.5), 0.0);
        assert_eq!(cycle_fraction(2.25, 1.5), 0.5);
    }

    #[test]
    fn fractions_stay_in_range() {
        for i in 0..1000 {
            let f = cycle_fraction(i as f64 * 0.0137, 1.5);
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn degenerate_periods_pin_the_cycle_at_zero() {
        assert_eq!(cycle_fraction(3.0, 0.0), 0.0);
        assert_eq!(cycle_fraction(3.0, -1.0), 0.0);
    }

    #[test]
    fn restart_rewinds_to_zero() {
        let mut clock = FrameClock::new(Duration::from_millis(1500));
        clock.restart();
        // Immediately after a restart the cycle sits at (or just past) zero.
        assert!(clock.fraction() < 0.01);
    }
}
