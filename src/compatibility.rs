use serde::{Deserialize, Serialize};

use crate::zodiac::{ChineseZodiac, WesternZodiac};
use crate::CosmicProfile;

// ---------------------------
// ## Score Buckets
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBucket {
    Soulmate,
    Excellent,
    Promising,
    Challenging,
}

impl ScoreBucket {
    pub fn from_score(score: u8) -> ScoreBucket {
        match score {
            90..=u8::MAX => ScoreBucket::Soulmate,
            75..=89 => ScoreBucket::Excellent,
            55..=74 => ScoreBucket::Promising,
            _ => ScoreBucket::Challenging,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityLabel {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn compatibility_label(score: u8) -> CompatibilityLabel {
    match ScoreBucket::from_score(score) {
        ScoreBucket::Soulmate => CompatibilityLabel {
            label: "Soulmate-level",
            color: "#f43f5e",
        },
        ScoreBucket::Excellent => CompatibilityLabel {
            label: "Excellent",
            color: "#a855f7",
        },
        ScoreBucket::Promising => CompatibilityLabel {
            label: "Worth exploring",
            color: "#3b82f6",
        },
        ScoreBucket::Challenging => CompatibilityLabel {
            label: "Challenging",
            color: "#94a3b8",
        },
    }
}

// ---------------------------
// ## Weights
// ---------------------------

/// The blend of the three sub-scores. Kept in one place as the single
/// tunable of the scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub life_path: f64,
    pub western: f64,
    pub chinese: f64,
}

impl ScoreWeights {
    /// Returns the weights scaled to sum to 1. Negative entries are clamped
    /// to zero first; an all-zero set falls back to even thirds.
    pub fn normalized(&self) -> Self {
        let life_path = self.life_path.max(0.0);
        let western = self.western.max(0.0);
        let chinese = self.chinese.max(0.0);
        let sum = life_path + western + chinese;

        if sum <= f64::EPSILON {
            return ScoreWeights {
                life_path: 1.0 / 3.0,
                western: 1.0 / 3.0,
                chinese: 1.0 / 3.0,
            };
        }

        ScoreWeights {
            life_path: life_path / sum,
            western: western / sum,
            chinese: chinese / sum,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            life_path: 0.35,
            western: 0.35,
            chinese: 0.30,
        }
    }
}

// ---------------------------
// ## Affinity Tables
// ---------------------------

// Unordered life-path pairs (low, high, score). Pairs not listed fall back
// to the distance formula below.
const LIFE_PATH_AFFINITY: &[(u8, u8, u8)] = &[
    (1, 1, 90),
    (2, 2, 92),
    (3, 3, 90),
    (4, 4, 91),
    (5, 5, 90),
    (6, 6, 94),
    (7, 7, 90),
    (8, 8, 91),
    (9, 9, 93),
    (11, 11, 95),
    (22, 22, 92),
    (33, 33, 96),
    (1, 2, 72),
    (1, 3, 80),
    (1, 4, 62),
    (1, 5, 85),
    (1, 6, 70),
    (1, 7, 82),
    (1, 8, 65),
    (1, 9, 78),
    (2, 3, 74),
    (2, 4, 88),
    (2, 5, 60),
    (2, 6, 85),
    (2, 7, 75),
    (2, 8, 86),
    (2, 9, 80),
    (3, 4, 66),
    (3, 5, 84),
    (3, 6, 82),
    (3, 7, 64),
    (3, 8, 60),
    (3, 9, 86),
    (4, 5, 58),
    (4, 6, 76),
    (4, 7, 80),
    (4, 8, 88),
    (4, 9, 68),
    (5, 6, 60),
    (5, 7, 78),
    (5, 8, 66),
    (5, 9, 74),
    (6, 7, 68),
    (6, 8, 84),
    (6, 9, 90),
    (7, 8, 62),
    (7, 9, 72),
    (8, 9, 70),
    (1, 11, 75),
    (2, 11, 88),
    (9, 11, 84),
    (4, 22, 90),
    (6, 33, 92),
    (11, 22, 85),
    (11, 33, 86),
    (22, 33, 88),
];

fn life_path_score(a: u8, b: u8) -> u8 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if let Some(&(_, _, score)) = LIFE_PATH_AFFINITY
        .iter()
        .find(|&&(l, h, _)| l == lo && h == hi)
    {
        return score;
    }
    // distance fallback keeps the function total over all valid pairs
    let diff = (hi - lo) as i32;
    (100 - diff * 6).clamp(35, 95) as u8
}

fn western_score(a: &WesternZodiac, b: &WesternZodiac) -> u8 {
    if a.sign == b.sign {
        return 90;
    }
    if a.sign.compatible_signs().contains(&b.sign) || b.sign.compatible_signs().contains(&a.sign) {
        return 85;
    }
    if a.element == b.element {
        80
    } else if a.element.complements(b.element) {
        72
    } else {
        52
    }
}

fn chinese_score(a: &ChineseZodiac, b: &ChineseZodiac) -> u8 {
    let base = if a.animal == b.animal {
        85
    } else if a.animal.compatible_animals().contains(&b.animal)
        || b.animal.compatible_animals().contains(&a.animal)
    {
        90
    } else if a.animal.incompatible_animals().contains(&b.animal)
        || b.animal.incompatible_animals().contains(&a.animal)
    {
        35
    } else {
        60
    };
    // sharing an element nudges any pairing upward
    if a.element == b.element {
        (base + 4).min(95)
    } else {
        base
    }
}

// ---------------------------
// ## Result Types
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub overall: u8,
    pub life_path: u8,
    pub western: u8,
    pub chinese: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchScore {
    pub name: String,
    pub result: CompatibilityResult,
    pub label: CompatibilityLabel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    pub soulmate: u32,
    pub excellent: u32,
    pub promising: u32,
    pub challenging: u32,
}

impl ScoreDistribution {
    pub fn total(&self) -> u32 {
        self.soulmate + self.excellent + self.promising + self.challenging
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchInsights {
    pub average_score: u8,
    pub best_matches: Vec<MatchScore>,
    pub distribution: ScoreDistribution,
    pub rank: String,
}

// ---------------------------
// ## Compatibility Model
// ---------------------------

const BEST_MATCH_LIMIT: usize = 5;

/// Pairwise scoring over resolved profiles. Holds only the weight
/// configuration; every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompatibilityModel {
    weights: ScoreWeights,
}

impl CompatibilityModel {
    pub fn new(weights: ScoreWeights) -> Self {
        CompatibilityModel {
            weights: weights.normalized(),
        }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn score(&self, a: &CosmicProfile, b: &CosmicProfile) -> CompatibilityResult {
        let life_path = life_path_score(a.numerology.life_path, b.numerology.life_path);
        let western = western_score(&a.western, &b.western);
        let chinese = chinese_score(&a.chinese, &b.chinese);

        let overall = self.weights.life_path * life_path as f64
            + self.weights.western * western as f64
            + self.weights.chinese * chinese as f64;
        let overall = overall.round().clamp(0.0, 100.0) as u8;

        CompatibilityResult {
            overall,
            life_path,
            western,
            chinese,
        }
    }

    /// A soulmate match is either an outstanding aggregate or uniform
    /// excellence across all three dimensions, even when the weighted
    /// overall lands just under the top bucket.
    pub fn is_soulmate_match(&self, a: &CosmicProfile, b: &CosmicProfile) -> bool {
        let result = self.score(a, b);
        result.overall >= 90
            || (result.life_path >= 85 && result.western >= 85 && result.chinese >= 85)
    }

    /// Scores one profile against every candidate and summarizes the field.
    pub fn score_all(&self, profile: &CosmicProfile, candidates: &[CosmicProfile]) -> MatchInsights {
        if candidates.is_empty() {
            return MatchInsights {
                average_score: 0,
                best_matches: Vec::new(),
                distribution: ScoreDistribution::default(),
                rank: "Unranked".to_string(),
            };
        }

        let mut scored: Vec<MatchScore> = candidates
            .iter()
            .map(|candidate| {
                let result = self.score(profile, candidate);
                MatchScore {
                    name: candidate.name.clone(),
                    result,
                    label: compatibility_label(result.overall),
                }
            })
            .collect();

        let mut distribution = ScoreDistribution::default();
        for entry in &scored {
            match ScoreBucket::from_score(entry.result.overall) {
                ScoreBucket::Soulmate => distribution.soulmate += 1,
                ScoreBucket::Excellent => distribution.excellent += 1,
                ScoreBucket::Promising => distribution.promising += 1,
                ScoreBucket::Challenging => distribution.challenging += 1,
            }
        }

        let sum: u32 = scored.iter().map(|m| m.result.overall as u32).sum();
        let average_score = (sum as f64 / scored.len() as f64).round() as u8;

        // stable sort keeps equal scores in candidate order
        scored.sort_by(|x, y| y.result.overall.cmp(&x.result.overall));
        scored.truncate(BEST_MATCH_LIMIT);

        MatchInsights {
            average_score,
            best_matches: scored,
            distribution,
            rank: rank_label(average_score).to_string(),
        }
    }
}

impl Default for CompatibilityModel {
    fn default() -> Self {
        CompatibilityModel::new(ScoreWeights::default())
    }
}

fn rank_label(average_score: u8) -> &'static str {
    match average_score {
        85..=u8::MAX => "Top 5%",
        75..=84 => "Top 10%",
        65..=74 => "Top 25%",
        55..=64 => "Top 50%",
        _ => "Bottom half",
    }
}
