//! Serializable summary of one statistics evaluation.

/// Total statistic of one effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectStatistic {
    pub effect:    String,
    pub network:   Option<String>,
    pub statistic: f64,
}

/// Effect totals for the evaluator's current behavior state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsReport {
    pub variable:     String,
    pub period:       usize,
    pub overall_mean: f64,
    pub effects:      Vec<EffectStatistic>,
}
