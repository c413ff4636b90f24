use crate::animation::ease::Ease;
use crate::geometry::measure::IconGeometry;
use crate::reveal::config::AnimationConfig;
use crate::reveal::fill::FillWindow;

/// Start offset and stroke duration of one path, in session-relative seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PathTiming {
    /// Measured path length.
    pub length: f64,
    /// Seconds from session start until the stroke begins.
    pub start: f64,
    /// Stroke duration in seconds; 0 for degenerate paths.
    pub duration: f64,
}

impl PathTiming {
    /// Session time at which the stroke is fully drawn.
    pub fn stroke_end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Per-path timeline of one icon: stagger, stroke durations and the fill window.
///
/// The schedule is computed once per handle and shared by every session it starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealSchedule {
    timings: Vec<PathTiming>,
    easing: Ease,
    fill: Option<FillWindow>,
}

impl RevealSchedule {
    /// Assign `start_i = i * stagger_delay` and `duration_i = draw_speed * normalize(length_i)`,
    /// capped at `max_duration`.
    ///
    /// `config` is expected to be validated.
    pub fn new(geometry: &IconGeometry, config: &AnimationConfig) -> Self {
        let timings = geometry
            .lengths()
            .iter()
            .enumerate()
            .map(|(i, &length)| {
                let raw = config.draw_speed * config.normalization.apply(length);
                let duration = match config.max_duration {
                    Some(max) => raw.min(max),
                    None => raw,
                };
                PathTiming {
                    length,
                    start: i as f64 * config.stagger_delay,
                    duration,
                }
            })
            .collect();
        Self {
            timings,
            easing: config.easing,
            fill: config.fill_after_stroke.then(FillWindow::standard),
        }
    }

    /// Zero-length timeline: every path is drawn (and filled) the instant a session starts.
    ///
    /// Used for static icons whose geometry could not be measured.
    pub fn instant(path_count: usize, fill_after_stroke: bool) -> Self {
        Self {
            timings: vec![
                PathTiming {
                    length: 0.0,
                    start: 0.0,
                    duration: 0.0,
                };
                path_count
            ],
            easing: Ease::Linear,
            fill: fill_after_stroke.then(FillWindow::immediate),
        }
    }

    /// Per-path timings in icon order.
    pub fn timings(&self) -> &[PathTiming] {
        &self.timings
    }

    /// Stroke easing curve.
    pub fn easing(&self) -> Ease {
        self.easing
    }

    /// Fill window, when fill-after-stroke is enabled.
    pub fn fill(&self) -> Option<FillWindow> {
        self.fill
    }

    /// Session time at which path `i` reaches `Complete`.
    pub fn completion_time(&self, i: usize) -> f64 {
        let end = self.timings[i].stroke_end();
        match self.fill {
            Some(w) => end + w.total(),
            None => end,
        }
    }

    /// Session time at which every path is `Complete` (0 for an empty icon).
    pub fn total_duration(&self) -> f64 {
        (0..self.timings.len())
            .map(|i| self.completion_time(i))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/schedule.rs"]
mod tests;
