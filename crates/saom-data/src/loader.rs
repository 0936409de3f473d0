//! CSV behavior loader.
//!
//! # CSV format
//!
//! Long format, one row per observed cell.  `missing` and `structural` are
//! optional columns (`true`/`false`, default `false`); an empty `value`
//! also marks the cell missing.
//!
//! ```csv
//! actor,observation,value,missing,structural
//! 0,0,1,false,false
//! 1,0,,true,false
//! 0,1,2,false,true
//! ```
//!
//! Cells without a row keep their defaults `(0, not missing, not
//! structural)`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use saom_core::ActorId;

use crate::{BehaviorDataBuilder, DataError, DataResult};

#[derive(Deserialize)]
struct BehaviorRecord {
    actor:       u32,
    observation: usize,
    value:       Option<i32>,
    #[serde(default)]
    missing:     bool,
    #[serde(default)]
    structural:  bool,
}

/// Fill `builder` from a CSV file.
pub fn load_behavior_csv<'n>(
    path:    &Path,
    builder: BehaviorDataBuilder<'n>,
) -> DataResult<BehaviorDataBuilder<'n>> {
    let file = std::fs::File::open(path)?;
    load_behavior_reader(file, builder)
}

/// Like [`load_behavior_csv`] but accepts any `Read` source.
pub fn load_behavior_reader<'n, R: Read>(
    reader:      R,
    mut builder: BehaviorDataBuilder<'n>,
) -> DataResult<BehaviorDataBuilder<'n>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = 0usize;

    for result in csv_reader.deserialize::<BehaviorRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        let actor = ActorId(row.actor);

        match row.value {
            Some(value) => builder.set(row.observation, actor, value)?,
            None => builder.set_missing(row.observation, actor)?,
        }
        if row.missing {
            builder.set_missing(row.observation, actor)?;
        }
        if row.structural {
            builder.set_structural(row.observation, actor)?;
        }
        rows += 1;
    }

    log::info!("loaded {rows} behavior cells");
    Ok(builder)
}
