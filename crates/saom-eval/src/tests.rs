//! Unit tests for saom-eval.

use std::sync::Arc;

use saom_core::{ActorId, ActorSet, EvalConfig, VariableId};
use saom_data::{BehaviorDataBuilder, BehaviorLongitudinalData};
use saom_effects::{BehaviorEffect, EffectInfo, create_effect};
use saom_network::{Network, NetworkBuilder};

use crate::{EvalError, EvaluatorBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn actors(n: usize) -> Arc<ActorSet> {
    Arc::new(ActorSet::new("pupils", n))
}

/// One observation `[1, 0, 2, 1, 1]`: overall mean 1, range [0, 2].
fn single() -> BehaviorLongitudinalData {
    let mut b = BehaviorDataBuilder::new(VariableId(0), "smoking", actors(5), 1);
    b.row(0, &[1, 0, 2, 1, 1]).unwrap();
    b.build().unwrap()
}

/// Two observations where nobody decreases: period 0 is up-only.
fn panel() -> BehaviorLongitudinalData {
    let mut b = BehaviorDataBuilder::new(VariableId(0), "smoking", actors(5), 2);
    b.row(0, &[1, 0, 2, 1, 1]).unwrap();
    b.row(1, &[2, 1, 2, 1, 2]).unwrap();
    b.build().unwrap()
}

/// 0 → {1, 2, 3}, 1 → {0}.
fn friendship() -> Network {
    let mut b = NetworkBuilder::new("friendship", 5);
    b.add_tie(ActorId(0), ActorId(1));
    b.add_tie(ActorId(0), ActorId(2));
    b.add_tie(ActorId(0), ActorId(3));
    b.add_tie(ActorId(1), ActorId(0));
    b.build().unwrap()
}

fn effect(name: &str) -> Box<dyn BehaviorEffect> {
    create_effect(EffectInfo::new(name)).unwrap()
}

fn network_effect(name: &str) -> Box<dyn BehaviorEffect> {
    create_effect(EffectInfo::on_network(name, "friendship")).unwrap()
}

fn build_err(builder: EvaluatorBuilder<'_>) -> EvalError {
    match builder.build() {
        Ok(_) => panic!("expected the builder to fail"),
        Err(e) => e,
    }
}

/// State whose centered values under `single()` are `[3, 2, 5, -1, 0]`.
const STATE: [i32; 5] = [4, 3, 6, 0, 1];

// ── EvaluatorBuilder ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn rejects_uncalculated_data() {
        let data = BehaviorLongitudinalData::new(VariableId(0), "raw", actors(3), 1);
        let err = build_err(EvaluatorBuilder::new(EvalConfig::default(), &data));
        assert!(matches!(err, EvalError::PropertiesNotCalculated { ref variable } if variable == "raw"));
    }

    #[test]
    fn rejects_period_past_last_observation() {
        let data = single();
        let err = build_err(EvaluatorBuilder::new(EvalConfig::new(1), &data));
        assert!(matches!(err, EvalError::Config(_)));
    }

    #[test]
    fn rejects_network_over_other_actor_set() {
        let data = single();
        let net = NetworkBuilder::new("friendship", 4).build().unwrap();
        let err = build_err(EvaluatorBuilder::new(EvalConfig::default(), &data).network(net));
        assert!(matches!(err, EvalError::ActorCountMismatch { expected: 5, got: 4, .. }));
    }

    #[test]
    fn rejects_duplicate_network_name() {
        let data = single();
        let err = build_err(
            EvaluatorBuilder::new(EvalConfig::default(), &data)
                .network(friendship())
                .network(friendship()),
        );
        assert!(matches!(err, EvalError::DuplicateNetwork(ref name) if name == "friendship"));
    }

    #[test]
    fn rejects_effect_on_unknown_network() {
        let data = single();
        let err = build_err(
            EvaluatorBuilder::new(EvalConfig::default(), &data).effect(network_effect("maxAlt")),
        );
        assert!(matches!(
            err,
            EvalError::UnknownNetwork { ref effect, ref network } if effect == "maxAlt" && network == "friendship"
        ));
    }

    #[test]
    fn rejects_state_of_wrong_length() {
        let data = single();
        let err = build_err(
            EvaluatorBuilder::new(EvalConfig::default(), &data).current_values(vec![1, 1, 1]),
        );
        assert!(matches!(err, EvalError::ActorCountMismatch { expected: 5, got: 3, .. }));
    }

    #[test]
    fn default_state_is_observed_period() {
        let data = panel();
        let eval = EvaluatorBuilder::new(EvalConfig::new(1), &data).build().unwrap();
        assert_eq!(eval.current_values(), &[2, 1, 2, 1, 2]);
    }

    #[test]
    fn missing_cells_get_rounded_mean() {
        let mut b = BehaviorDataBuilder::new(VariableId(0), "smoking", actors(5), 1);
        b.row(0, &[2, 0, 2, 2, 0]).unwrap();
        b.set_missing(0, ActorId(4)).unwrap();
        let data = b.build().unwrap();
        assert_eq!(data.overall_mean(), 1.5);

        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data).build().unwrap();
        assert_eq!(eval.current_values(), &[2, 0, 2, 2, 2]);
    }

    #[test]
    fn effects_keep_insertion_order() {
        let data = single();
        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data)
            .network(friendship())
            .effects([effect("quad"), network_effect("avAlt"), effect("linear")])
            .build()
            .unwrap();
        let names: Vec<&str> = eval.effects().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["quad", "avAlt", "linear"]);
    }
}

// ── Move permission ───────────────────────────────────────────────────────────

#[cfg(test)]
mod permission_tests {
    use super::*;

    #[test]
    fn staying_is_always_permitted() {
        let data = single();
        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data)
            .current_values(STATE.to_vec())
            .build()
            .unwrap();
        for i in 0..5 {
            assert!(eval.is_permitted(ActorId(i), 0));
        }
    }

    #[test]
    fn target_must_stay_in_observed_range() {
        let data = single();
        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data).build().unwrap();
        // state [1, 0, 2, 1, 1], range [0, 2]
        assert!(eval.is_permitted(ActorId(0), 1));
        assert!(eval.is_permitted(ActorId(0), -1));
        assert!(!eval.is_permitted(ActorId(1), -1));
        assert!(!eval.is_permitted(ActorId(2), 1));
    }

    #[test]
    fn overflowing_target_is_not_permitted() {
        let data = single();
        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data)
            .current_values(vec![i32::MAX, 0, 0, 0, i32::MIN])
            .build()
            .unwrap();
        assert!(!eval.is_permitted(ActorId(0), 1));
        assert!(!eval.is_permitted(ActorId(4), -1));
        assert!(eval.is_permitted(ActorId(1), 1));
    }

    #[test]
    fn structural_value_cannot_change() {
        let mut b = BehaviorDataBuilder::new(VariableId(0), "smoking", actors(5), 1);
        b.row(0, &[1, 0, 2, 1, 1]).unwrap();
        b.set_structural(0, ActorId(3)).unwrap();
        let data = b.build().unwrap();

        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data).build().unwrap();
        assert!(!eval.is_permitted(ActorId(3), 1));
        assert!(!eval.is_permitted(ActorId(3), -1));
        assert!(eval.is_permitted(ActorId(3), 0));
        assert!(eval.is_permitted(ActorId(4), 1));
    }

    #[test]
    fn up_only_period_forbids_decrease() {
        let data = panel();
        assert!(data.up_only(0));

        let eval = EvaluatorBuilder::new(EvalConfig::new(0), &data).build().unwrap();
        assert!(eval.is_permitted(ActorId(0), 1));
        assert!(!eval.is_permitted(ActorId(0), -1));
    }

    #[test]
    fn trends_can_be_ignored() {
        let data = panel();
        let config = EvalConfig { period: 0, respect_trends: false };
        let eval = EvaluatorBuilder::new(config, &data).build().unwrap();
        assert!(eval.is_permitted(ActorId(0), -1));
    }

    #[test]
    fn last_observation_has_no_trend() {
        let data = panel();
        let eval = EvaluatorBuilder::new(EvalConfig::new(1), &data).build().unwrap();
        // state [2, 1, 2, 1, 2]
        assert!(eval.is_permitted(ActorId(1), -1));
    }

    #[test]
    fn down_only_period_forbids_increase() {
        let mut b = BehaviorDataBuilder::new(VariableId(0), "smoking", actors(3), 2);
        b.row(0, &[2, 1, 2]).unwrap();
        b.row(1, &[1, 0, 2]).unwrap();
        let data = b.build().unwrap();
        assert!(data.down_only(0));

        let eval = EvaluatorBuilder::new(EvalConfig::new(0), &data).build().unwrap();
        assert!(!eval.is_permitted(ActorId(1), 1));
        assert!(eval.is_permitted(ActorId(1), -1));
    }
}

// ── Change contributions and micro-steps ──────────────────────────────────────

#[cfg(test)]
mod contribution_tests {
    use super::*;

    #[test]
    fn contributions_for_every_candidate() {
        let data = single();
        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data)
            .network(friendship())
            .effects([network_effect("maxAlt"), effect("linear"), effect("quad")])
            .current_values(STATE.to_vec())
            .build()
            .unwrap();

        let moves = eval.change_contributions(ActorId(0));
        assert_eq!(moves.actor, ActorId(0));
        assert_eq!(moves.moves.len(), 3);

        // alters of 0 centered {2, 5, -1}, ego centered 3
        assert_eq!(moves.get(1).unwrap().contributions, vec![5.0, 1.0, 7.0]);
        assert_eq!(moves.get(0).unwrap().contributions, vec![0.0, 0.0, 0.0]);
        assert_eq!(moves.get(-1).unwrap().contributions, vec![-5.0, -1.0, -5.0]);
        assert!(moves.get(2).is_none());
    }

    #[test]
    fn out_of_range_state_permits_only_staying() {
        let data = single();
        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data)
            .current_values(STATE.to_vec())
            .build()
            .unwrap();
        let moves = eval.change_contributions(ActorId(2));
        let permitted: Vec<i32> = moves.permitted().map(|m| m.difference).collect();
        assert_eq!(permitted, [0]);
    }

    #[test]
    fn contribution_matches_ego_statistic_difference() {
        let data = single();
        let mut eval = EvaluatorBuilder::new(EvalConfig::default(), &data)
            .network(friendship())
            .effects([
                network_effect("maxAlt"),
                network_effect("minAlt"),
                network_effect("avAlt"),
                network_effect("totAlt"),
                network_effect("avSim"),
                effect("linear"),
                effect("quad"),
            ])
            .build()
            .unwrap();

        let ego = ActorId(0);
        let moves = eval.change_contributions(ego);
        let before = eval.ego_statistics(ego, &eval.centered_values());
        eval.apply_change(ego, 1).unwrap();
        let after = eval.ego_statistics(ego, &eval.centered_values());

        let expected = &moves.get(1).unwrap().contributions;
        for (k, contribution) in expected.iter().enumerate() {
            assert!(
                (after[k] - before[k] - contribution).abs() < 1e-9,
                "effect {k}: {} vs {contribution}",
                after[k] - before[k]
            );
        }
    }

    #[test]
    fn apply_change_updates_state() {
        let data = single();
        let mut eval = EvaluatorBuilder::new(EvalConfig::default(), &data).build().unwrap();
        eval.apply_change(ActorId(1), 1).unwrap();
        eval.apply_change(ActorId(4), -1).unwrap();
        assert_eq!(eval.current_values(), &[1, 1, 2, 1, 0]);
    }

    #[test]
    fn rejected_change_leaves_state_untouched() {
        let data = single();
        let mut eval = EvaluatorBuilder::new(EvalConfig::default(), &data).build().unwrap();
        let err = eval.apply_change(ActorId(2), 1).unwrap_err();
        assert!(matches!(err, EvalError::MoveNotPermitted { actor: ActorId(2), difference: 1 }));
        assert_eq!(eval.current_values(), &[1, 0, 2, 1, 1]);
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod statistics_tests {
    use super::*;

    fn evaluator(data: &BehaviorLongitudinalData) -> crate::Evaluator<'_> {
        EvaluatorBuilder::new(EvalConfig::default(), data)
            .network(friendship())
            .effects([network_effect("maxAlt"), effect("linear"), effect("quad")])
            .current_values(STATE.to_vec())
            .build()
            .unwrap()
    }

    #[test]
    fn centered_values_subtract_overall_mean() {
        let data = single();
        assert_eq!(evaluator(&data).centered_values(), vec![3.0, 2.0, 5.0, -1.0, 0.0]);
    }

    #[test]
    fn ego_statistics_per_effect() {
        let data = single();
        let eval = evaluator(&data);
        let centered = eval.centered_values();
        assert_eq!(eval.ego_statistics(ActorId(0), &centered), vec![15.0, 3.0, 9.0]);
        assert_eq!(eval.ego_statistics(ActorId(4), &centered), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn totals_sum_over_actors() {
        let data = single();
        // maxAlt: 5·3 + 3·2; linear: 3+2+5-1+0; quad: 9+4+25+1+0
        assert_eq!(evaluator(&data).statistics(), vec![21.0, 9.0, 39.0]);
    }

    #[test]
    fn no_effects_no_statistics() {
        let data = single();
        let eval = EvaluatorBuilder::new(EvalConfig::default(), &data).build().unwrap();
        assert!(eval.statistics().is_empty());
    }

    #[test]
    fn report_labels_totals() {
        let data = single();
        let report = evaluator(&data).report();
        assert_eq!(report.variable, "smoking");
        assert_eq!(report.period, 0);
        assert_eq!(report.overall_mean, 1.0);
        assert_eq!(report.effects.len(), 3);

        assert_eq!(report.effects[0].effect, "maxAlt");
        assert_eq!(report.effects[0].network.as_deref(), Some("friendship"));
        assert_eq!(report.effects[0].statistic, 21.0);
        assert_eq!(report.effects[2].effect, "quad");
        assert_eq!(report.effects[2].network, None);
        assert_eq!(report.effects[2].statistic, 39.0);
    }
}
