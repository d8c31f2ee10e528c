//! Pointer tracking: double-click detection by time and distance

use std::time::{Duration, Instant};

/// Two presses closer than this in time can form a double-click
pub const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(300);

/// ...and closer than this in pixels on each axis
pub const DOUBLE_CLICK_DISTANCE: f32 = 4.0;

/// Click tracking state for double-click detection
#[derive(Debug)]
pub struct ClickTracker {
    last_click_time: Instant,
    last_click_position: Option<(f32, f32)>,
    click_count: u32,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self {
            last_click_time: Instant::now() - Duration::from_secs(10),
            last_click_position: None,
            click_count: 0,
        }
    }
}

impl ClickTracker {
    /// Record a press at `(x, y)`; returns the click count (1 or 2)
    pub fn track_click(&mut self, x: f32, y: f32) -> u32 {
        self.track_click_at(Instant::now(), x, y)
    }

    pub fn track_click_at(&mut self, now: Instant, x: f32, y: f32) -> u32 {
        let is_rapid_click = now.saturating_duration_since(self.last_click_time) < DOUBLE_CLICK_TIME;
        let is_same_position = self.last_click_position.is_some_and(|(lx, ly)| {
            (lx - x).abs() <= DOUBLE_CLICK_DISTANCE && (ly - y).abs() <= DOUBLE_CLICK_DISTANCE
        });

        // A third rapid press starts over rather than counting as a triple-click
        if is_rapid_click && is_same_position && self.click_count == 1 {
            self.click_count = 2;
        } else {
            self.click_count = 1;
        }

        self.last_click_time = now;
        self.last_click_position = Some((x, y));
        self.click_count
    }

    pub fn reset(&mut self) {
        self.click_count = 0;
        self.last_click_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_needs_time_and_distance() {
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();
        assert_eq!(tracker.track_click_at(t0, 10.0, 10.0), 1);
        assert_eq!(tracker.track_click_at(t0 + Duration::from_millis(100), 12.0, 11.0), 2);
        assert_eq!(tracker.track_click_at(t0 + Duration::from_millis(150), 12.0, 11.0), 1);

        let t1 = t0 + Duration::from_secs(1);
        assert_eq!(tracker.track_click_at(t1, 10.0, 10.0), 1);
        assert_eq!(tracker.track_click_at(t1 + Duration::from_millis(100), 30.0, 10.0), 1);
        assert_eq!(tracker.track_click_at(t1 + Duration::from_millis(600), 30.0, 10.0), 1);
    }

    #[test]
    fn test_reset_forgets_last_click() {
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();
        tracker.track_click_at(t0, 10.0, 10.0);
        tracker.reset();
        assert_eq!(tracker.track_click_at(t0 + Duration::from_millis(50), 10.0, 10.0), 1);
    }
}
