//! Unit tests for saom-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActorId, VariableId};

    #[test]
    fn index_roundtrip() {
        let id = ActorId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ActorId::from_index(42), Some(id));
    }

    #[test]
    fn from_index_rejects_overflow() {
        assert_eq!(ActorId::from_index(u32::MAX as usize), Some(ActorId(u32::MAX)));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(ActorId::from_index(u32::MAX as usize + 1), None);
    }

    #[test]
    fn ordering() {
        assert!(ActorId(0) < ActorId(1));
        assert!(VariableId(3) > VariableId(2));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(ActorId(7).to_string(), "actor 7");
        assert_eq!(VariableId(0).to_string(), "variable 0");
    }
}

#[cfg(test)]
mod actors {
    use crate::{ActorId, ActorSet};

    #[test]
    fn count_and_ids() {
        let set = ActorSet::new("pupils", 3);
        assert_eq!(set.n(), 3);
        assert_eq!(set.name(), "pupils");
        let ids: Vec<ActorId> = set.actor_ids().collect();
        assert_eq!(ids, vec![ActorId(0), ActorId(1), ActorId(2)]);
    }

    #[test]
    fn contains() {
        let set = ActorSet::new("pupils", 2);
        assert!(set.contains(ActorId(1)));
        assert!(!set.contains(ActorId(2)));
    }

    #[test]
    fn empty_set() {
        let set = ActorSet::new("none", 0);
        assert!(set.is_empty());
        assert_eq!(set.actor_ids().count(), 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, EvalConfig};

    #[test]
    fn default_starts_at_first_period() {
        let cfg = EvalConfig::default();
        assert_eq!(cfg.period, 0);
        assert!(cfg.respect_trends);
    }

    #[test]
    fn period_must_be_an_observation() {
        assert!(EvalConfig::new(1).validate(2).is_ok());
        assert!(matches!(
            EvalConfig::new(2).validate(2),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn config_error_names_the_problem() {
        let err = EvalConfig::new(3).validate(2).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: period 3 out of range for 2 observations");
    }
}
