//! CSV tie-list loader.
//!
//! # CSV format
//!
//! One row per directed tie.  The `value` column is optional and defaults
//! to 1.
//!
//! ```csv
//! ego,alter,value
//! 0,1,1
//! 0,2,1
//! 2,0,3
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use saom_core::ActorId;

use crate::{NetworkBuilder, NetworkError, NetworkResult};

#[derive(Deserialize)]
struct TieRecord {
    ego:   u32,
    alter: u32,
    #[serde(default = "default_tie_value")]
    value: i32,
}

fn default_tie_value() -> i32 {
    1
}

/// Load a tie list from a CSV file into a builder named `name` over `n`
/// actors.
pub fn load_network_csv(path: &Path, name: &str, n: usize) -> NetworkResult<NetworkBuilder> {
    let file = std::fs::File::open(path)?;
    load_network_reader(file, name, n)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
pub fn load_network_reader<R: Read>(reader: R, name: &str, n: usize) -> NetworkResult<NetworkBuilder> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = NetworkBuilder::new(name, n);

    for result in csv_reader.deserialize::<TieRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        builder.add_valued_tie(ActorId(row.ego), ActorId(row.alter), row.value);
    }

    log::info!("loaded {} ties for network '{name}'", builder.tie_count());
    Ok(builder)
}
