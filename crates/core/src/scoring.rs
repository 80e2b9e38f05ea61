//! Scoring policy.
//!
//! Pure functions over explicit inputs, parameterized by per-mode
//! [`ScoringRules`]. [`SessionState`] is a plain value that applies them
//! answer by answer for callers that do not keep their own counters.

use serde::{Deserialize, Serialize};

use crate::games::GameMode;

/// Weights of the end-of-level bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusWeights {
    pub accuracy: f64,
    pub streak: f64,
    pub multiplier: f64,
}

/// Point constants of one game mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRules {
    pub base_points: u32,
    pub streak_bonus: u32,
    /// Deducted on a wrong answer, never below zero.
    pub penalty: u32,
    pub bonus: BonusWeights,
}

impl ScoringRules {
    pub const fn new(
        base_points: u32,
        streak_bonus: u32,
        penalty: u32,
        accuracy_weight: f64,
        streak_weight: f64,
        multiplier: f64,
    ) -> Self {
        Self {
            base_points,
            streak_bonus,
            penalty,
            bonus: BonusWeights {
                accuracy: accuracy_weight,
                streak: streak_weight,
                multiplier,
            },
        }
    }

    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Quiz => Self::new(150, 20, 0, 100.0, 25.0, 1.25),
            GameMode::ChapterMatch => Self::new(140, 25, 0, 120.0, 30.0, 1.15),
            GameMode::TranslationMatch => Self::new(120, 15, 20, 150.0, 20.0, 1.1),
            GameMode::FillBlank => Self::new(130, 18, 0, 140.0, 20.0, 1.2),
            GameMode::Memory => Self::new(200, 30, 0, 180.0, 40.0, 1.1),
        }
    }
}

/// Points for a correct answer given the streak *before* this answer.
pub fn points_for_correct(base_points: u32, streak: u32, streak_bonus: u32) -> u32 {
    base_points.saturating_add(streak.saturating_mul(streak_bonus))
}

/// Points deducted for a wrong answer: `penalty`, capped so the score never
/// drops below zero.
pub fn points_for_incorrect(current_score: u32, penalty: u32) -> u32 {
    penalty.min(current_score)
}

pub fn streak_on_correct(streak: u32) -> u32 {
    streak.saturating_add(1)
}

pub fn streak_on_incorrect(_streak: u32) -> u32 {
    0
}

/// `correct / answered`, or 0 when nothing was answered.
pub fn accuracy(correct: u32, answered: u32) -> f64 {
    if answered == 0 {
        0.0
    } else {
        f64::from(correct) / f64::from(answered)
    }
}

/// `round((accuracy * w_accuracy + streak * w_streak) * multiplier)`.
pub fn level_bonus(accuracy: f64, streak: u32, weights: &BonusWeights) -> u32 {
    let raw = (accuracy * weights.accuracy + f64::from(streak) * weights.streak)
        * weights.multiplier;
    raw.round().max(0.0) as u32
}

/// End-of-level summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub score: u32,
    /// Questions, matches or pairs in the level.
    pub total: u32,
    pub accuracy: f64,
    pub streak: u32,
    pub bonus: u32,
}

/// Running counters of one level attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub rules: ScoringRules,
    pub total: u32,
    pub score: u32,
    pub streak: u32,
    pub answered: u32,
    pub correct: u32,
}

impl SessionState {
    pub fn new(rules: ScoringRules, total: u32) -> Self {
        Self {
            rules,
            total,
            score: 0,
            streak: 0,
            answered: 0,
            correct: 0,
        }
    }

    pub fn for_mode(mode: GameMode, total: u32) -> Self {
        Self::new(ScoringRules::for_mode(mode), total)
    }

    /// Apply one answer and return the score change (negative for penalties).
    pub fn record_answer(&mut self, is_correct: bool) -> i64 {
        self.answered += 1;
        if is_correct {
            let points =
                points_for_correct(self.rules.base_points, self.streak, self.rules.streak_bonus);
            self.score = self.score.saturating_add(points);
            self.streak = streak_on_correct(self.streak);
            self.correct += 1;
            i64::from(points)
        } else {
            let deducted = points_for_incorrect(self.score, self.rules.penalty);
            self.score -= deducted;
            self.streak = streak_on_incorrect(self.streak);
            -i64::from(deducted)
        }
    }

    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct, self.answered)
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }

    pub fn summary(&self) -> CompletionSummary {
        let accuracy = self.accuracy();
        CompletionSummary {
            score: self.score,
            total: self.total,
            accuracy,
            streak: self.streak,
            bonus: level_bonus(accuracy, self.streak, &self.rules.bonus),
        }
    }
}
