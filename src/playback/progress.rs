//! Maps continuous playback position onto the progress bar and time label,
//! and pointer gestures on the bar back onto a playback position.

use crate::error::{PlayerError, PlayerResult};

/// `m:ss`, minutes unbounded (no hour rollover).
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Horizontal extent of the progress track in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f64,
    pub width: f64,
}

impl TrackBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn fraction_at(&self, client_x: f64) -> f64 {
        if !(self.width > 0.0) || !client_x.is_finite() {
            return 0.0;
        }
        ((client_x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

fn usable_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressTracker {
    position: f64,
    duration: Option<f64>,
    scrub_fraction: Option<f64>,
    hover_fraction: Option<f64>,
}

/// Everything the progress area and time label need to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub fill_ratio: f64,
    pub hover_ratio: Option<f64>,
    pub elapsed: String,
    pub total: String,
}

impl ProgressView {
    pub fn fill_percent(&self) -> f64 {
        self.fill_ratio * 100.0
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.elapsed, self.total)
    }
}

impl ProgressTracker {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Option<f64>) {
        if let Some(duration) = usable_duration(duration) {
            self.duration = Some(duration);
        }
    }

    /// Records a position reported by the media element. Skipped until the
    /// duration is known.
    pub fn observe(&mut self, position: f64, duration: Option<f64>) -> PlayerResult<()> {
        let duration = usable_duration(duration)
            .or(self.duration)
            .ok_or(PlayerError::MissingDuration)?;
        self.duration = Some(duration);
        self.position = if position.is_finite() {
            position.clamp(0.0, duration)
        } else {
            0.0
        };
        Ok(())
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position.max(0.0);
    }

    /// Moves the scrub head; the first call starts the gesture.
    pub fn scrub_at(&mut self, fraction: f64) {
        self.scrub_fraction = Some(fraction.clamp(0.0, 1.0));
    }

    /// Ends the gesture and returns the fraction it settled on.
    pub fn finish_scrub(&mut self) -> Option<f64> {
        self.scrub_fraction.take()
    }

    pub fn hover(&mut self, fraction: f64) {
        self.hover_fraction = Some(fraction.clamp(0.0, 1.0));
    }

    pub fn clear_hover(&mut self) {
        self.hover_fraction = None;
    }

    pub fn view(&self) -> ProgressView {
        let duration = usable_duration(self.duration);
        let fill_ratio = match (self.scrub_fraction, duration) {
            (Some(fraction), _) => fraction,
            (None, Some(duration)) => (self.position / duration).clamp(0.0, 1.0),
            (None, None) => 0.0,
        };
        let elapsed = match (self.scrub_fraction, duration) {
            (Some(fraction), Some(duration)) => fraction * duration,
            _ => self.position,
        };
        ProgressView {
            fill_ratio,
            hover_ratio: self.hover_fraction,
            elapsed: format_time(elapsed),
            total: format_time(duration.unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_examples() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3661.0), "61:01");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(-4.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn fraction_is_clamped_to_track() {
        let bounds = TrackBounds::new(100.0, 200.0);
        assert_eq!(bounds.fraction_at(50.0), 0.0);
        assert_eq!(bounds.fraction_at(200.0), 0.5);
        assert_eq!(bounds.fraction_at(900.0), 1.0);
        assert_eq!(TrackBounds::new(0.0, 0.0).fraction_at(10.0), 0.0);
    }

    #[test]
    fn observe_needs_a_duration() {
        let mut tracker = ProgressTracker::default();
        assert_eq!(tracker.observe(3.0, None), Err(PlayerError::MissingDuration));
        assert_eq!(tracker.observe(3.0, Some(0.0)), Err(PlayerError::MissingDuration));
        assert_eq!(tracker.observe(3.0, Some(f64::NAN)), Err(PlayerError::MissingDuration));
        tracker.observe(30.0, Some(120.0)).unwrap();
        let view = tracker.view();
        assert_eq!(view.fill_ratio, 0.25);
        assert_eq!(view.label(), "0:30 / 2:00");
    }

    #[test]
    fn scrub_overrides_playback_position_in_view() {
        let mut tracker = ProgressTracker::default();
        tracker.observe(10.0, Some(100.0)).unwrap();
        tracker.scrub_at(0.75);
        let view = tracker.view();
        assert_eq!(view.fill_ratio, 0.75);
        assert_eq!(view.elapsed, "1:15");
        assert_eq!(tracker.finish_scrub(), Some(0.75));
        assert_eq!(tracker.view().fill_ratio, 0.1);
    }

    #[test]
    fn hover_is_independent_of_position() {
        let mut tracker = ProgressTracker::default();
        tracker.observe(10.0, Some(100.0)).unwrap();
        tracker.hover(1.4);
        assert_eq!(tracker.view().hover_ratio, Some(1.0));
        assert_eq!(tracker.position(), 10.0);
        tracker.clear_hover();
        assert_eq!(tracker.view().hover_ratio, None);
    }
}
