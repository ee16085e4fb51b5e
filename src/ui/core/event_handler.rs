use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Turns terminal input into [`EventType`]s, yielding a tick whenever a frame
/// passes without input
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                // Windows terminals report releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        let remaining = self.tick_rate.saturating_sub(self.last_tick.elapsed());
        tokio::time::sleep(remaining.min(Duration::from_millis(16))).await;

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            Ok(EventType::Tick)
        } else {
            Ok(EventType::Other)
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
