//! xsmall: smallest example for the saom behavior-effect engine.
//!
//! Eight pupils in one classroom, a smoking score (1-4) observed three
//! times, and a friendship network.  Loads the panel, centers it on the
//! network, then runs a short random walk of micro-steps and prints the
//! effect statistics before and after as JSON.

mod network;

use std::io::Cursor;
use std::sync::Arc;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use saom_core::{ActorId, ActorSet, EvalConfig, VariableId};
use saom_data::{BehaviorDataBuilder, LongitudinalData, load_behavior_reader};
use saom_effects::{EffectInfo, create_effect};
use saom_eval::EvaluatorBuilder;

use network::{FRIENDSHIP, build_network};

// ── Constants ─────────────────────────────────────────────────────────────────

const PUPIL_COUNT:  usize = 8;
const OBSERVATIONS: usize = 3;
const SEED:         u64   = 42;
const MICRO_STEPS:  usize = 40;
const PERIOD:       usize = 0;

// ── Behavior CSV ──────────────────────────────────────────────────────────────

// Pupil 7 did not answer at wave 1; pupil 6's wave-0 score is fixed.
const BEHAVIOR_CSV: &str = "\
actor,observation,value,missing,structural\n\
0,0,1,false,false\n\
1,0,1,false,false\n\
2,0,2,false,false\n\
3,0,1,false,false\n\
4,0,3,false,false\n\
5,0,2,false,false\n\
6,0,3,false,true\n\
7,0,1,false,false\n\
0,1,1,false,false\n\
1,1,2,false,false\n\
2,1,2,false,false\n\
3,1,2,false,false\n\
4,1,3,false,false\n\
5,1,3,false,false\n\
6,1,4,false,false\n\
7,1,,true,false\n\
0,2,2,false,false\n\
1,2,2,false,false\n\
2,2,3,false,false\n\
3,2,2,false,false\n\
4,2,4,false,false\n\
5,2,3,false,false\n\
6,2,4,false,false\n\
7,2,1,false,false\n\
";

/// Effects evaluated, in report order.  `true` marks effects on the
/// friendship network.
const EFFECTS: [(&str, bool); 7] = [
    ("linear", false),
    ("quad",   false),
    ("avAlt",  true),
    ("totAlt", true),
    ("maxAlt", true),
    ("minAlt", true),
    ("avSim",  true),
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== xsmall: saom behavior effects ===");
    println!("Pupils: {PUPIL_COUNT}  |  Observations: {OBSERVATIONS}  |  Seed: {SEED}");
    println!();

    // 1. Friendship network.
    let network = build_network(PUPIL_COUNT)?;
    println!("Network '{}': {} actors, {} ties", network.name(), network.n(), network.tie_count());

    // 2. Behavior panel, centered globally and on the network.
    let actors = Arc::new(ActorSet::new("pupils", PUPIL_COUNT));
    let builder = BehaviorDataBuilder::new(VariableId(0), "smoking", actors, OBSERVATIONS);
    let data = load_behavior_reader(Cursor::new(BEHAVIOR_CSV), builder)?
        .compute_similarity_mean()
        .center_on(&network)
        .build()?;
    println!(
        "Behavior '{}': range [{}, {}], overall mean {:.4}, similarity mean {:.4}",
        data.name(),
        data.min(),
        data.max(),
        data.overall_mean(),
        data.similarity_mean()
    );
    println!(
        "  up-only periods: {}  |  down-only periods: {}",
        data.any_up_only(),
        data.any_down_only()
    );
    println!();

    // 3. Evaluator.
    let effects = EFFECTS
        .iter()
        .map(|&(name, on_network)| {
            let info = if on_network {
                EffectInfo::on_network(name, FRIENDSHIP)
            } else {
                EffectInfo::new(name)
            };
            create_effect(info)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut eval = EvaluatorBuilder::new(EvalConfig::new(PERIOD), &data)
        .network(network)
        .effects(effects)
        .build()?;

    println!("Statistics at observation {PERIOD}:");
    println!("{}", serde_json::to_string_pretty(&eval.report())?);
    println!();

    // 4. Random walk: each step picks a pupil and one of its permitted moves.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut changes = 0usize;
    for _ in 0..MICRO_STEPS {
        let actor = ActorId(rng.gen_range(0..PUPIL_COUNT as u32));
        let moves = eval.change_contributions(actor);
        let permitted: Vec<i32> = moves.permitted().map(|m| m.difference).collect();
        let Some(&difference) = permitted.choose(&mut rng) else {
            continue;
        };
        if difference != 0 {
            eval.apply_change(actor, difference)?;
            changes += 1;
        }
    }
    log::info!("{changes} behavior changes in {MICRO_STEPS} micro-steps");

    println!("Statistics after {MICRO_STEPS} micro-steps:");
    println!("{}", serde_json::to_string_pretty(&eval.report())?);
    println!();

    // 5. Final behavior table.
    println!("{:<8} {:<10} {:<10}", "Pupil", "Observed", "Current");
    println!("{}", "-".repeat(28));
    let observed = data.values(PERIOD);
    for (i, (&before, &after)) in observed.iter().zip(eval.current_values()).enumerate() {
        println!("{i:<8} {before:<10} {after:<10}");
    }

    Ok(())
}
