//! Appearance and dismissal animations
//!
//! Animations run on an explicit clock: the host calls
//! [`Animator::advance`] with the time that passed since the previous frame.
//! Appearance is two chained stages (grow past full size while the view fades
//! in, then settle back to full size); dismissal is a single fade out. Time
//! left over when a stage ends carries into the next one.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing curve of a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Slow start and end
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `0.0..=1.0` to eased progress
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * 2.0f64.mul_add(-t, 3.0),
        }
    }
}

/// Interpolates one value over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    /// Create a tween that has not started
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advance by `dt`, returning the part of `dt` past the end of the tween
    pub fn advance(&mut self, dt: Duration) -> Duration {
        let remaining = self.duration.saturating_sub(self.elapsed);
        if dt >= remaining {
            self.elapsed = self.duration;
            dt - remaining
        } else {
            self.elapsed += dt;
            Duration::ZERO
        }
    }

    /// Linear progress in `0.0..=1.0`
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> f64 {
        (self.to - self.from).mul_add(self.easing.apply(self.progress()), self.from)
    }

    /// Whether the full duration has elapsed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Durations and scales of the alert animations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    /// First appearance stage: grow to the overshoot scale and fade in
    pub grow_ms: u64,
    /// Second appearance stage: settle back to full size
    pub settle_ms: u64,
    /// Dismissal fade out
    pub fade_out_ms: u64,
    /// Panel scale when appearance starts
    pub initial_scale: f64,
    /// Panel scale at the end of the grow stage
    pub overshoot_scale: f64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            grow_ms: 250,
            settle_ms: 200,
            fade_out_ms: 200,
            initial_scale: 0.5,
            overshoot_scale: 1.05,
        }
    }
}

impl AnimationTiming {
    /// Timing with every stage completing instantly
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            grow_ms: 0,
            settle_ms: 0,
            fade_out_ms: 0,
            initial_scale: 1.0,
            overshoot_scale: 1.0,
        }
    }
}

/// Presentation values the renderer applies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Scale of the panel about its center (1.0 is identity)
    pub panel_scale: f64,
    /// Opacity of the whole view, overlay and panel alike
    pub view_alpha: f64,
}

/// A stage that finished during [`Animator::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The settle stage completed; the alert is fully shown
    AppearFinished,
    /// The fade out completed
    DismissFinished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Grow { scale: Tween, alpha: Tween },
    Settle { scale: Tween },
    FadeOut { alpha: Tween },
}

/// Drives the alert's stage sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    timing: AnimationTiming,
    stage: Option<Stage>,
    visual: VisualState,
}

impl Animator {
    /// An idle animator showing the pre-presentation state
    #[must_use]
    pub const fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            stage: None,
            visual: VisualState {
                panel_scale: timing.initial_scale,
                view_alpha: 0.0,
            },
        }
    }

    /// Current presentation values
    #[must_use]
    pub const fn visual(&self) -> VisualState {
        self.visual
    }

    /// Whether a stage is running
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.stage.is_some()
    }

    /// Reset to the initial scale and transparency, then start growing
    pub fn start_appearing(&mut self) {
        self.visual = VisualState {
            panel_scale: self.timing.initial_scale,
            view_alpha: 0.0,
        };
        self.stage = Some(Stage::Grow {
            scale: Tween::new(
                self.timing.initial_scale,
                self.timing.overshoot_scale,
                Duration::from_millis(self.timing.grow_ms),
                Easing::EaseInOut,
            ),
            alpha: Tween::new(
                0.0,
                1.0,
                Duration::from_millis(self.timing.grow_ms),
                Easing::EaseInOut,
            ),
        });
    }

    /// Fade the view out from its current opacity
    pub fn start_dismissing(&mut self) {
        self.stage = Some(Stage::FadeOut {
            alpha: Tween::new(
                self.visual.view_alpha,
                0.0,
                Duration::from_millis(self.timing.fade_out_ms),
                Easing::EaseInOut,
            ),
        });
    }

    /// Advance the running stage by `dt`.
    ///
    /// Returns the completion that happened during this advance, if any.
    pub fn advance(&mut self, dt: Duration) -> Option<AnimationEvent> {
        let mut remaining = dt;

        while let Some(stage) = self.stage.as_mut() {
            let (leftover, finished) = match stage {
                Stage::Grow { scale, alpha } => {
                    let leftover = scale.advance(remaining);
                    alpha.advance(remaining);
                    self.visual.panel_scale = scale.value();
                    self.visual.view_alpha = alpha.value();
                    (leftover, scale.is_finished())
                }
                Stage::Settle { scale } => {
                    let leftover = scale.advance(remaining);
                    self.visual.panel_scale = scale.value();
                    (leftover, scale.is_finished())
                }
                Stage::FadeOut { alpha } => {
                    let leftover = alpha.advance(remaining);
                    self.visual.view_alpha = alpha.value();
                    (leftover, alpha.is_finished())
                }
            };

            if !finished {
                return None;
            }
            remaining = leftover;

            match self.stage.take() {
                Some(Stage::Grow { .. }) => {
                    self.stage = Some(Stage::Settle {
                        scale: Tween::new(
                            self.visual.panel_scale,
                            1.0,
                            Duration::from_millis(self.timing.settle_ms),
                            Easing::EaseInOut,
                        ),
                    });
                }
                Some(Stage::Settle { .. }) => {
                    self.visual.panel_scale = 1.0;
                    return Some(AnimationEvent::AppearFinished);
                }
                Some(Stage::FadeOut { .. }) => {
                    self.visual.view_alpha = 0.0;
                    return Some(AnimationEvent::DismissFinished);
                }
                None => return None,
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
        }
        assert!(approx(Easing::EaseInOut.apply(0.5), 0.5));
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    }

    #[test]
    fn test_tween_reports_leftover() {
        let mut tween = Tween::new(0.0, 10.0, Duration::from_millis(100), Easing::Linear);
        assert_eq!(tween.advance(Duration::from_millis(40)), Duration::ZERO);
        assert!(approx(tween.value(), 4.0));
        assert_eq!(tween.advance(Duration::from_millis(80)), Duration::from_millis(20));
        assert!(tween.is_finished());
        assert!(approx(tween.value(), 10.0));
    }

    #[test]
    fn test_zero_duration_tween_is_finished() {
        let mut tween = Tween::new(0.0, 1.0, Duration::ZERO, Easing::EaseInOut);
        assert!(approx(tween.value(), 1.0));
        assert_eq!(tween.advance(Duration::from_millis(5)), Duration::from_millis(5));
    }

    #[test]
    fn test_new_animator_is_transparent_and_half_size() {
        let animator = Animator::new(AnimationTiming::default());
        assert!(approx(animator.visual().view_alpha, 0.0));
        assert!(approx(animator.visual().panel_scale, 0.5));
        assert!(!animator.is_running());
    }

    #[test]
    fn test_grow_reaches_overshoot_then_settles() {
        let mut animator = Animator::new(AnimationTiming::default());
        animator.start_appearing();

        assert_eq!(animator.advance(Duration::from_millis(250)), None);
        assert!(approx(animator.visual().panel_scale, 1.05));
        assert!(approx(animator.visual().view_alpha, 1.0));

        assert_eq!(animator.advance(Duration::from_millis(100)), None);
        let midway = animator.visual().panel_scale;
        assert!(midway < 1.05 && midway > 1.0);

        assert_eq!(
            animator.advance(Duration::from_millis(100)),
            Some(AnimationEvent::AppearFinished)
        );
        assert!(approx(animator.visual().panel_scale, 1.0));
        assert!(!animator.is_running());
    }

    #[test]
    fn test_leftover_time_carries_into_settle() {
        let mut animator = Animator::new(AnimationTiming::default());
        animator.start_appearing();

        // One big step covers both stages.
        assert_eq!(
            animator.advance(Duration::from_millis(1_000)),
            Some(AnimationEvent::AppearFinished)
        );
    }

    #[test]
    fn test_fade_out_completes() {
        let mut animator = Animator::new(AnimationTiming::default());
        animator.start_appearing();
        animator.advance(Duration::from_secs(1));

        animator.start_dismissing();
        assert_eq!(animator.advance(Duration::from_millis(100)), None);
        assert!(animator.visual().view_alpha < 1.0);
        assert_eq!(
            animator.advance(Duration::from_millis(100)),
            Some(AnimationEvent::DismissFinished)
        );
        assert!(approx(animator.visual().view_alpha, 0.0));
    }

    #[test]
    fn test_instant_timing_finishes_without_elapsed_time() {
        let mut animator = Animator::new(AnimationTiming::instant());
        animator.start_appearing();
        assert_eq!(
            animator.advance(Duration::ZERO),
            Some(AnimationEvent::AppearFinished)
        );
    }

    #[test]
    fn test_timing_serde_fills_missing_fields() -> Result<(), serde_json::Error> {
        let timing: AnimationTiming = serde_json::from_str(r#"{"grow_ms": 100}"#)?;
        assert_eq!(timing.grow_ms, 100);
        assert_eq!(timing.settle_ms, 200);
        Ok(())
    }
}
