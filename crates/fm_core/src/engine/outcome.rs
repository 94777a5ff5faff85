//! Shot resolution.
//!
//! One pair of draws decides everything: the shot beats the full defense
//! draw for a goal, beats `save_ratio` of it for a save, and otherwise misses.

use super::rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Goal,
    Saved,
    Missed,
}

/// Quality values behind a resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotDraw {
    pub shot_quality: f64,
    pub defense_quality: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct OutcomeResolver {
    save_ratio: f64,
}

impl OutcomeResolver {
    pub fn new(save_ratio: f64) -> Self {
        Self { save_ratio }
    }

    /// Draws `q1`, `q2` and scales them by the attacking and defending strengths.
    pub fn draw<R: RandomSource>(&self, attack_strength: f64, defense_strength: f64, rng: &mut R) -> ShotDraw {
        let q1 = rng.unit();
        let q2 = rng.unit();
        ShotDraw { shot_quality: q1 * attack_strength, defense_quality: q2 * defense_strength }
    }

    pub fn classify(&self, draw: ShotDraw) -> Resolution {
        if draw.shot_quality > draw.defense_quality {
            Resolution::Goal
        } else if draw.shot_quality > draw.defense_quality * self.save_ratio {
            Resolution::Saved
        } else {
            Resolution::Missed
        }
    }

    pub fn resolve<R: RandomSource>(
        &self,
        attack_strength: f64,
        defense_strength: f64,
        rng: &mut R,
    ) -> (ShotDraw, Resolution) {
        let draw = self.draw(attack_strength, defense_strength, rng);
        (draw, self.classify(draw))
    }
}
