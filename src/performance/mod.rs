//! # Frame Statistics
//!
//! CPU-side frame timing and per-frame draw counts for the viewer's
//! statistics display.
//!
//! ## Usage
//!
//! ```rust
//! use diorama::performance::PerformanceMonitor;
//!
//! let mut monitor = PerformanceMonitor::new();
//!
//! // In your main loop
//! monitor.begin_frame();
//! // ... render frame ...
//! monitor.end_frame();
//! monitor.update_render_stats(12, 3_600);
//!
//! println!("{}", monitor.summary());
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;

/// Frame metrics averaged over the sample window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMetrics {
    /// Current frames per second
    pub fps: f32,
    /// Average frame time in milliseconds
    pub frame_time_ms: f32,
    /// Minimum frame time in the current window
    pub min_frame_time_ms: f32,
    /// Maximum frame time in the current window
    pub max_frame_time_ms: f32,
    /// Draw commands submitted in the last frame
    pub draw_calls: u32,
    /// Vertices submitted in the last frame
    pub vertex_count: u32,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time_ms: 0.0,
            min_frame_time_ms: 0.0,
            max_frame_time_ms: 0.0,
            draw_calls: 0,
            vertex_count: 0,
        }
    }
}

/// Rolling frame timer
#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    /// Ring buffer of recent frame times for averaging
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    frame_start: Option<Instant>,
    current_metrics: PerformanceMetrics,
    enabled: bool,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::with_config(120)
    }

    /// Monitor averaging over the last `max_samples` frames.
    pub fn with_config(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            frame_start: None,
            current_metrics: PerformanceMetrics::default(),
            enabled: true,
        }
    }

    /// Mark the beginning of a frame
    pub fn begin_frame(&mut self) {
        if self.enabled {
            self.frame_start = Some(Instant::now());
        }
    }

    /// Mark the end of a frame and update metrics
    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record_frame(start.elapsed());
        }
    }

    /// Adds a measured frame time and refreshes the averages.
    pub fn record_frame(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
        self.update_metrics();
    }

    fn update_metrics(&mut self) {
        if self.frame_times.is_empty() {
            return;
        }

        let total_time: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total_time / self.frame_times.len() as u32;
        let avg_frame_time_ms = avg_frame_time.as_secs_f32() * 1000.0;

        self.current_metrics.frame_time_ms = avg_frame_time_ms;
        self.current_metrics.fps = if avg_frame_time_ms > 0.0 {
            1000.0 / avg_frame_time_ms
        } else {
            0.0
        };

        if let (Some(min_time), Some(max_time)) =
            (self.frame_times.iter().min(), self.frame_times.iter().max())
        {
            self.current_metrics.min_frame_time_ms = min_time.as_secs_f32() * 1000.0;
            self.current_metrics.max_frame_time_ms = max_time.as_secs_f32() * 1000.0;
        }
    }

    /// Update render statistics
    pub fn update_render_stats(&mut self, draw_calls: u32, vertex_count: u32) {
        self.current_metrics.draw_calls = draw_calls;
        self.current_metrics.vertex_count = vertex_count;
    }

    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.current_metrics
    }

    /// Frame times in milliseconds, oldest first
    pub fn frame_time_history(&self) -> Vec<f32> {
        self.frame_times
            .iter()
            .map(|duration| duration.as_secs_f32() * 1000.0)
            .collect()
    }

    /// Reset all metrics and history
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.current_metrics = PerformanceMetrics::default();
        self.frame_start = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turns timing on or off; turning it off drops the history.
    pub fn set_enabled(&mut self, enabled: bool) {
        debug!("frame statistics {}", if enabled { "on" } else { "off" });
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    /// One-line overlay text.
    pub fn summary(&self) -> String {
        let metrics = &self.current_metrics;
        format!(
            "{:.1} fps | {:.2} ms | {} draws | {} vertices",
            metrics.fps, metrics.frame_time_ms, metrics.draw_calls, metrics.vertex_count
        )
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_and_fps() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_frame(Duration::from_millis(10));
        monitor.record_frame(Duration::from_millis(30));

        let metrics = monitor.metrics();
        assert!((metrics.frame_time_ms - 20.0).abs() < 1e-3);
        assert!((metrics.fps - 50.0).abs() < 1e-2);
        assert!((metrics.min_frame_time_ms - 10.0).abs() < 1e-3);
        assert!((metrics.max_frame_time_ms - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_window_drops_oldest_sample() {
        let mut monitor = PerformanceMonitor::with_config(2);
        monitor.record_frame(Duration::from_millis(100));
        monitor.record_frame(Duration::from_millis(10));
        monitor.record_frame(Duration::from_millis(10));

        assert_eq!(monitor.frame_time_history().len(), 2);
        assert!((monitor.metrics().max_frame_time_ms - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_disabled_monitor_records_nothing() {
        let mut monitor = PerformanceMonitor::new();
        monitor.set_enabled(false);
        monitor.begin_frame();
        monitor.end_frame();
        assert!(monitor.frame_time_history().is_empty());
    }

    #[test]
    fn test_summary_reports_render_stats() {
        let mut monitor = PerformanceMonitor::new();
        monitor.update_render_stats(3, 108);
        let summary = monitor.summary();
        assert!(summary.contains("3 draws"));
        assert!(summary.contains("108 vertices"));
    }
}
