use std::ops::RangeInclusive;

use crate::domain::recognition::entities::FeatureVector;

/// A named predicate over feature ranges and the labels it proposes.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRule {
    pub name: String,
    pub color: RangeInclusive<u8>,
    pub shape: RangeInclusive<u8>,
    pub texture: RangeInclusive<u8>,
    pub labels: Vec<String>,
}

impl PatternRule {
    pub fn new(
        name: &str,
        color: RangeInclusive<u8>,
        shape: RangeInclusive<u8>,
        texture: RangeInclusive<u8>,
        labels: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            color,
            shape,
            texture,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn matches(&self, features: &FeatureVector) -> bool {
        self.color.contains(&features.color)
            && self.shape.contains(&features.shape)
            && self.texture.contains(&features.texture)
    }
}

/// Ordered rule table mapping a feature vector to candidate labels.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    rules: Vec<PatternRule>,
}

impl PatternMatcher {
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// Every label referenced by any rule.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.labels.iter().map(String::as_str))
    }

    /// Labels of every matching rule, concatenated in table order.
    ///
    /// Overlapping rules may contribute the same label twice; duplicates are kept.
    pub fn match_features(&self, features: &FeatureVector) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(features))
            .flat_map(|rule| {
                tracing::trace!(rule = rule.name.as_str(), "pattern rule matched");
                rule.labels.iter().cloned()
            })
            .collect()
    }
}

impl Default for PatternMatcher {
    /// Narrow single-food rules first, broad look-alike groups after.
    fn default() -> Self {
        Self::new(vec![
            PatternRule::new("round_white_smooth", 5..=25, 1..=20, 1..=20, &["Idli"]),
            PatternRule::new(
                "small_round_hollow",
                20..=45,
                0..=25,
                60..=99,
                &["Pani Puri", "Sev Puri"],
            ),
            PatternRule::new(
                "crepe",
                30..=60,
                70..=99,
                0..=40,
                &["Masala Dosa", "Dosa with Curries", "Plain Dosa"],
            ),
            PatternRule::new(
                "golden_fried",
                40..=70,
                30..=60,
                50..=99,
                &["Samosa", "Vada Pav", "Pakora", "Kachori"],
            ),
            PatternRule::new(
                "mixed_rice",
                50..=80,
                0..=35,
                30..=70,
                &["Chicken Biryani", "Dal and Rice", "Vegetable Biryani"],
            ),
            PatternRule::new(
                "curry_bowl",
                60..=90,
                40..=70,
                20..=50,
                &["Chapati with Curry", "Butter Chicken", "Dal Tadka", "Palak Paneer"],
            ),
            PatternRule::new(
                "flat_bread",
                20..=50,
                60..=99,
                40..=70,
                &["Chapati", "Naan", "Paratha"],
            ),
            PatternRule::new(
                "syrupy_sweet",
                80..=99,
                0..=30,
                0..=30,
                &["Gulab Jamun", "Jalebi"],
            ),
            PatternRule::new("oval_yellow", 85..=99, 60..=99, 60..=99, &["Banana"]),
            PatternRule::new(
                "leafy_green",
                0..=15,
                80..=99,
                80..=99,
                &["Broccoli", "Spinach"],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_white_smooth_fires_alone() {
        let candidates = PatternMatcher::default().match_features(&FeatureVector::new(10, 5, 5));
        assert_eq!(candidates, vec!["Idli"]);
    }

    #[test]
    fn test_zero_vector_matches_nothing() {
        let candidates = PatternMatcher::default().match_features(&FeatureVector::new(0, 0, 0));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_overlapping_rules_accumulate_in_table_order() {
        // inside both crepe and flat_bread
        let candidates =
            PatternMatcher::default().match_features(&FeatureVector::new(40, 80, 35));
        assert_eq!(
            candidates,
            vec!["Masala Dosa", "Dosa with Curries", "Plain Dosa"]
        );

        let candidates =
            PatternMatcher::default().match_features(&FeatureVector::new(40, 80, 40));
        assert_eq!(
            candidates,
            vec![
                "Masala Dosa",
                "Dosa with Curries",
                "Plain Dosa",
                "Chapati",
                "Naan",
                "Paratha"
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let matcher = PatternMatcher::new(vec![
            PatternRule::new("a", 0..=50, 0..=99, 0..=99, &["Samosa", "Kachori"]),
            PatternRule::new("b", 40..=99, 0..=99, 0..=99, &["Samosa"]),
        ]);

        assert_eq!(
            matcher.match_features(&FeatureVector::new(45, 0, 0)),
            vec!["Samosa", "Kachori", "Samosa"]
        );
    }

    #[test]
    fn test_rule_bounds_are_inclusive() {
        let rule = PatternRule::new("edge", 10..=20, 10..=20, 10..=20, &["Idli"]);
        assert!(rule.matches(&FeatureVector::new(10, 20, 10)));
        assert!(!rule.matches(&FeatureVector::new(21, 15, 15)));
        assert!(!rule.matches(&FeatureVector::new(15, 9, 15)));
    }

    #[test]
    fn test_labels_lists_every_rule_label() {
        let matcher = PatternMatcher::default();
        let labels: Vec<&str> = matcher.labels().collect();
        assert!(labels.contains(&"Idli"));
        assert!(labels.contains(&"Spinach"));
    }
}
