//! Qualitative verdicts derived from the warm average and the standard deviation.
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Warm-latency classification.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Performance {
    #[strum(serialize = "EXCELLENT")]
    Excellent,
    #[strum(serialize = "GOOD")]
    Good,
    #[strum(serialize = "ACCEPTABLE")]
    Acceptable,
    #[strum(serialize = "NEEDS IMPROVEMENT")]
    #[serde(rename = "NEEDS IMPROVEMENT")]
    NeedsImprovement,
}

impl Performance {
    /// Classify a warm average given in seconds.
    pub fn classify(warm_mean: f64) -> Self {
        if warm_mean < 0.030 {
            Performance::Excellent
        } else if warm_mean < 0.040 {
            Performance::Good
        } else if warm_mean < 0.050 {
            Performance::Acceptable
        } else {
            Performance::NeedsImprovement
        }
    }

    /// Human-readable explanation printed after the label.
    pub fn message(&self) -> &'static str {
        match self {
            Performance::Excellent => "Sustained performance < 30ms",
            Performance::Good => "Sustained performance < 40ms",
            Performance::Acceptable => "Sustained performance < 50ms",
            Performance::NeedsImprovement => "Sustained performance > 50ms",
        }
    }
}

/// Jitter classification.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Consistency {
    Excellent,
    Good,
    Variable,
}

impl Consistency {
    /// Classify a standard deviation given in seconds.
    pub fn classify(std_dev: f64) -> Self {
        if std_dev < 0.005 {
            Consistency::Excellent
        } else if std_dev < 0.010 {
            Consistency::Good
        } else {
            Consistency::Variable
        }
    }

    /// Human-readable explanation printed after the label.
    pub fn message(&self) -> &'static str {
        match self {
            Consistency::Excellent => "Very stable response times",
            Consistency::Good => "Stable response times",
            Consistency::Variable => "Network might be unstable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn performance_thresholds() {
        assert_eq!(Performance::classify(0.010), Performance::Excellent);
        assert_eq!(Performance::classify(0.030), Performance::Good);
        assert_eq!(Performance::classify(0.0399), Performance::Good);
        assert_eq!(Performance::classify(0.045), Performance::Acceptable);
        assert_eq!(Performance::classify(0.050), Performance::NeedsImprovement);
        assert_eq!(Performance::classify(f64::INFINITY), Performance::NeedsImprovement);
    }

    #[test]
    fn consistency_thresholds() {
        assert_eq!(Consistency::classify(0.0), Consistency::Excellent);
        assert_eq!(Consistency::classify(0.005), Consistency::Good);
        assert_eq!(Consistency::classify(0.0099), Consistency::Good);
        assert_eq!(Consistency::classify(0.010), Consistency::Variable);
    }

    #[test]
    fn labels_are_upper_case() {
        let labels: Vec<String> = Performance::iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["EXCELLENT", "GOOD", "ACCEPTABLE", "NEEDS IMPROVEMENT"]);
        let labels: Vec<String> = Consistency::iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["EXCELLENT", "GOOD", "VARIABLE"]);
    }

    #[test]
    fn json_labels_match_text_labels() {
        for performance in Performance::iter() {
            let json = serde_json::to_value(performance).unwrap();
            assert_eq!(json, performance.to_string());
        }
        for consistency in Consistency::iter() {
            let json = serde_json::to_value(consistency).unwrap();
            assert_eq!(json, consistency.to_string());
        }
    }
}
