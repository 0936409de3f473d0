//! Unit tests for saom-network.

use saom_core::ActorId;

use crate::{IncidentTie, Network, NetworkBuilder, NetworkError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 0 → {1, 2, 3}, 1 → {0}, 2 → {}, 3 → {2}.
fn star_network() -> Network {
    let mut b = NetworkBuilder::new("friendship", 4);
    b.add_tie(ActorId(0), ActorId(3));
    b.add_tie(ActorId(1), ActorId(0));
    b.add_tie(ActorId(0), ActorId(1));
    b.add_tie(ActorId(3), ActorId(2));
    b.add_valued_tie(ActorId(0), ActorId(2), 4);
    b.build().unwrap()
}

// ── Network ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod network_tests {
    use super::*;

    #[test]
    fn degrees() {
        let net = star_network();
        assert_eq!(net.n(), 4);
        assert_eq!(net.tie_count(), 5);
        assert_eq!(net.out_degree(ActorId(0)), 3);
        assert_eq!(net.out_degree(ActorId(1)), 1);
        assert_eq!(net.out_degree(ActorId(2)), 0);
        assert_eq!(net.out_degree(ActorId(3)), 1);
    }

    #[test]
    fn out_ties_ascending_alters() {
        let net = star_network();
        let ties: Vec<IncidentTie> = net.out_ties(ActorId(0)).collect();
        assert_eq!(
            ties,
            vec![
                IncidentTie { actor: ActorId(1), value: 1 },
                IncidentTie { actor: ActorId(2), value: 4 },
                IncidentTie { actor: ActorId(3), value: 1 },
            ]
        );
    }

    #[test]
    fn iteration_is_stable_across_passes() {
        let net = star_network();
        let first: Vec<_> = net.out_ties(ActorId(0)).collect();
        let second: Vec<_> = net.out_ties(ActorId(0)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn out_ties_len_matches_degree() {
        let net = star_network();
        for ego in 0..4 {
            assert_eq!(net.out_ties(ActorId(ego)).len(), net.out_degree(ActorId(ego)));
        }
    }

    #[test]
    fn has_tie() {
        let net = star_network();
        assert!(net.has_tie(ActorId(3), ActorId(2)));
        assert!(!net.has_tie(ActorId(2), ActorId(3)));
    }

    #[test]
    fn ties_visits_every_tie_once() {
        let net = star_network();
        let egos: Vec<u32> = net.ties().map(|(ego, _)| ego.0).collect();
        assert_eq!(egos, vec![0, 0, 0, 1, 3]);
    }

    #[test]
    fn empty_network_has_no_ties() {
        let net = Network::empty("none", 3);
        assert_eq!(net.name(), "none");
        assert_eq!(net.tie_count(), 0);
        assert_eq!(net.out_degree(ActorId(2)), 0);
        assert_eq!(net.out_ties(ActorId(1)).count(), 0);
    }
}

// ── NetworkBuilder validation ─────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_alter() {
        let mut b = NetworkBuilder::new("net", 2);
        b.add_tie(ActorId(0), ActorId(2));
        assert!(matches!(
            b.build(),
            Err(NetworkError::ActorOutOfRange { actor: ActorId(2), n: 2, .. })
        ));
    }

    #[test]
    fn rejects_self_tie() {
        let mut b = NetworkBuilder::new("net", 2);
        b.add_tie(ActorId(1), ActorId(1));
        assert!(matches!(b.build(), Err(NetworkError::SelfTie { actor: ActorId(1), .. })));
    }

    #[test]
    fn rejects_duplicate_tie() {
        let mut b = NetworkBuilder::new("net", 3);
        b.add_tie(ActorId(0), ActorId(1));
        b.add_tie(ActorId(0), ActorId(2));
        b.add_valued_tie(ActorId(0), ActorId(1), 2);
        assert!(matches!(
            b.build(),
            Err(NetworkError::DuplicateTie { ego: ActorId(0), alter: ActorId(1), .. })
        ));
    }

    #[test]
    fn error_names_the_network() {
        let mut b = NetworkBuilder::new("advice", 2);
        b.add_tie(ActorId(0), ActorId(0));
        let msg = b.build().unwrap_err().to_string();
        assert!(msg.contains("advice"), "{msg}");
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{load_network_csv, load_network_reader};

    #[test]
    fn value_column_is_optional() {
        let csv = "ego,alter\n0,1\n1,2\n";
        let net = load_network_reader(Cursor::new(csv), "net", 3)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(net.tie_count(), 2);
        assert_eq!(net.out_ties(ActorId(1)).next().unwrap().value, 1);
    }

    #[test]
    fn valued_ties() {
        let csv = "ego,alter,value\n2,0,3\n";
        let net = load_network_reader(Cursor::new(csv), "net", 3)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            net.out_ties(ActorId(2)).collect::<Vec<_>>(),
            vec![IncidentTie { actor: ActorId(0), value: 3 }]
        );
    }

    #[test]
    fn bad_row_is_parse_error() {
        let csv = "ego,alter\n0,x\n";
        assert!(matches!(
            load_network_reader(Cursor::new(csv), "net", 3),
            Err(NetworkError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ego,alter").unwrap();
        writeln!(file, "0,1").unwrap();
        let net = load_network_csv(file.path(), "net", 2).unwrap().build().unwrap();
        assert!(net.has_tie(ActorId(0), ActorId(1)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::path::Path::new("/nonexistent/ties.csv");
        assert!(matches!(load_network_csv(path, "net", 2), Err(NetworkError::Io(_))));
    }
}
