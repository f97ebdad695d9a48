//! Rule-based archetype classification
//!
//! An ordered list of threshold guards over the composite indices. The first
//! rule whose conditions all hold wins; Thoughtful is the fallback.

use crate::stats;
use crate::types::{ClassificationResult, CompositeScores, PersonalityType};

/// Margin at which confidence saturates
const FULL_CONFIDENCE_MARGIN: f64 = 0.3;

/// Comparison direction of a threshold condition
#[derive(Debug, Clone, Copy)]
enum Bound {
    Above(f64),
    Below(f64),
}

impl Bound {
    /// Signed distance past the threshold (positive when satisfied)
    fn margin(self, value: f64) -> f64 {
        match self {
            Bound::Above(threshold) => value - threshold,
            Bound::Below(threshold) => threshold - value,
        }
    }

    fn holds(self, value: f64) -> bool {
        match self {
            Bound::Above(threshold) => value > threshold,
            Bound::Below(threshold) => value < threshold,
        }
    }
}

type Selector = fn(&CompositeScores) -> f64;

struct Rule {
    personality: PersonalityType,
    conditions: [(Selector, Bound); 2],
}

impl Rule {
    fn matches(&self, scores: &CompositeScores) -> bool {
        self.conditions
            .iter()
            .all(|(select, bound)| bound.holds(select(scores)))
    }

    /// Smallest clearance among conditions; negative when the rule fails
    fn margin(&self, scores: &CompositeScores) -> f64 {
        self.conditions
            .iter()
            .map(|(select, bound)| bound.margin(select(scores)))
            .fold(f64::INFINITY, f64::min)
    }
}

fn attention_to_detail(s: &CompositeScores) -> f64 {
    s.attention_to_detail
}

fn behavioral_consistency(s: &CompositeScores) -> f64 {
    s.behavioral_consistency
}

fn creative_expression(s: &CompositeScores) -> f64 {
    s.creative_expression
}

fn psychological_investment(s: &CompositeScores) -> f64 {
    s.psychological_investment
}

/// Evaluated in order; the first full match wins
const RULES: [Rule; 3] = [
    Rule {
        personality: PersonalityType::Analytical,
        conditions: [
            (attention_to_detail, Bound::Above(0.7)),
            (behavioral_consistency, Bound::Above(0.6)),
        ],
    },
    Rule {
        personality: PersonalityType::Creative,
        conditions: [
            (creative_expression, Bound::Above(0.6)),
            (psychological_investment, Bound::Above(0.5)),
        ],
    },
    Rule {
        personality: PersonalityType::Efficient,
        conditions: [
            (psychological_investment, Bound::Below(0.4)),
            (behavioral_consistency, Bound::Above(0.5)),
        ],
    },
];

/// Classifier over composite scores
pub struct PersonalityClassifier;

impl PersonalityClassifier {
    /// Assign an archetype and a margin-based confidence
    pub fn classify(scores: &CompositeScores) -> ClassificationResult {
        let (personality, margin) = match RULES.iter().find(|rule| rule.matches(scores)) {
            Some(rule) => (rule.personality, rule.margin(scores)),
            None => (PersonalityType::Thoughtful, fallback_margin(scores)),
        };

        ClassificationResult {
            cluster_id: personality.cluster_id(),
            personality_type: personality,
            description: personality.description().to_string(),
            confidence_score: confidence_from_margin(margin),
        }
    }
}

/// Distance to the nearest rule that would have matched
fn fallback_margin(scores: &CompositeScores) -> f64 {
    RULES
        .iter()
        .map(|rule| -rule.margin(scores))
        .fold(f64::INFINITY, f64::min)
}

/// Formula: `0.5 + 0.5 * clamp(margin / 0.3, 0, 1)`
fn confidence_from_margin(margin: f64) -> f64 {
    let normalized = (margin / FULL_CONFIDENCE_MARGIN).clamp(0.0, 1.0);
    stats::round_to(0.5 + 0.5 * normalized, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(investment: f64, creative: f64, consistency: f64, detail: f64) -> CompositeScores {
        CompositeScores {
            psychological_investment: investment,
            creative_expression: creative,
            behavioral_consistency: consistency,
            attention_to_detail: detail,
        }
    }

    #[test]
    fn test_analytical() {
        let result = PersonalityClassifier::classify(&scores(0.5, 0.2, 0.8, 0.9));
        assert_eq!(result.personality_type, PersonalityType::Analytical);
        assert_eq!(result.cluster_id, 0);
        assert_eq!(result.description, "Detail-oriented, systematic, consistent");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Satisfies both the Analytical and Creative rules
        let s = scores(0.9, 0.9, 0.9, 0.9);
        assert_eq!(
            PersonalityClassifier::classify(&s).personality_type,
            PersonalityType::Analytical
        );
    }

    #[test]
    fn test_creative() {
        let result = PersonalityClassifier::classify(&scores(0.7, 0.8, 0.3, 0.9));
        assert_eq!(result.personality_type, PersonalityType::Creative);
        assert_eq!(result.cluster_id, 1);
    }

    #[test]
    fn test_efficient() {
        let result = PersonalityClassifier::classify(&scores(0.2, 0.1, 0.9, 0.3));
        assert_eq!(result.personality_type, PersonalityType::Efficient);
        assert_eq!(result.description, "Quick, decisive, minimalist");
    }

    #[test]
    fn test_thoughtful_fallback() {
        let result = PersonalityClassifier::classify(&scores(0.45, 0.3, 0.4, 0.5));
        assert_eq!(result.personality_type, PersonalityType::Thoughtful);
        assert_eq!(result.cluster_id, 3);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly on the Analytical thresholds does not match
        let s = scores(0.45, 0.0, 0.6, 0.7);
        assert_eq!(
            PersonalityClassifier::classify(&s).personality_type,
            PersonalityType::Thoughtful
        );
    }

    #[test]
    fn test_confidence_grows_with_margin() {
        let near = PersonalityClassifier::classify(&scores(0.5, 0.0, 0.62, 0.72));
        let far = PersonalityClassifier::classify(&scores(0.5, 0.0, 1.0, 1.0));

        assert_eq!(near.personality_type, PersonalityType::Analytical);
        assert_eq!(far.personality_type, PersonalityType::Analytical);
        assert!(near.confidence_score < far.confidence_score);
        // min margin 0.3 saturates
        assert_eq!(far.confidence_score, 1.0);
        // min margin 0.02 → 0.5 + 0.5 * 0.0667
        assert!((near.confidence_score - 0.533).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_confidence_within_bounds() {
        // Just misses Efficient (investment 0.41) → low confidence
        let near = PersonalityClassifier::classify(&scores(0.41, 0.0, 0.9, 0.0));
        assert_eq!(near.personality_type, PersonalityType::Thoughtful);
        assert!((near.confidence_score - 0.517).abs() < 1e-9);

        let result = PersonalityClassifier::classify(&scores(0.45, 0.3, 0.4, 0.5));
        assert!(result.confidence_score >= 0.5 && result.confidence_score <= 1.0);
    }
}
