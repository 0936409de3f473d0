//! Effect metadata.

/// Name and configuration of one effect in a model.
///
/// Opaque to the statistic code apart from `network_name`, which tells the
/// evaluator which network a network-dependent effect reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectInfo {
    /// Short effect name, e.g. `"maxAlt"`.
    pub effect_name: String,

    /// Network the effect depends on, if any.
    pub network_name: Option<String>,
}

impl EffectInfo {
    /// Metadata for an effect that does not depend on a network.
    pub fn new(effect_name: impl Into<String>) -> Self {
        Self { effect_name: effect_name.into(), network_name: None }
    }

    /// Metadata for an effect computed over `network_name`.
    pub fn on_network(effect_name: impl Into<String>, network_name: impl Into<String>) -> Self {
        Self {
            effect_name:  effect_name.into(),
            network_name: Some(network_name.into()),
        }
    }
}
