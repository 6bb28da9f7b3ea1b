//! Class retention and remapping policy.
//!
//! The conversion pipeline is parameterized by a [`ClassPolicy`] deciding,
//! per record, whether to keep it and which output class id to assign. The
//! policy is a pure function of the source class id; it never inspects
//! geometry.

/// The ten VisDrone object classes, indexed by `source_id - 1`.
///
/// Source id 0 is the "ignored region" pseudo-class and has no name.
pub const VISDRONE_CLASS_NAMES: [&str; 10] = [
    "pedestrian",
    "people",
    "bicycle",
    "car",
    "van",
    "truck",
    "tricycle",
    "awning-tricycle",
    "bus",
    "motor",
];

/// Returns the VisDrone class name for a raw source id (1..=10).
pub fn class_name(source_id: i64) -> Option<&'static str> {
    let index = usize::try_from(source_id.checked_sub(1)?).ok()?;
    VISDRONE_CLASS_NAMES.get(index).copied()
}

/// A rule mapping a source class id to a kept/dropped decision and an
/// output class id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassPolicy {
    /// Keep ids 1..=10 and remap them to the contiguous range 0..=9.
    ///
    /// Id 0 (ignored region pseudo-class) and anything outside the known
    /// set are dropped.
    ContiguousRemap,

    /// Keep only one source class and emit it under a fixed output id.
    ///
    /// Also accepts `target - 1`, the id the target class carries after a
    /// contiguous remap, so that raw and previously-converted records can
    /// be mixed in one run. Compatibility behavior, not a long-term
    /// contract.
    SingleClass { target: i64, output: i64 },
}

impl ClassPolicy {
    /// Decides whether to keep a record with the given source class id.
    ///
    /// Returns the output class id for kept records, `None` for dropped
    /// ones.
    pub fn decide(&self, class_id: i64) -> Option<i64> {
        match *self {
            ClassPolicy::ContiguousRemap => {
                if (1..=VISDRONE_CLASS_NAMES.len() as i64).contains(&class_id) {
                    Some(class_id - 1)
                } else {
                    None
                }
            }
            ClassPolicy::SingleClass { target, output } => {
                if class_id == target || class_id == target - 1 {
                    Some(output)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_remap_shifts_known_ids_down_by_one() {
        for source_id in 1..=10 {
            assert_eq!(
                ClassPolicy::ContiguousRemap.decide(source_id),
                Some(source_id - 1)
            );
        }
    }

    #[test]
    fn contiguous_remap_drops_unknown_ids() {
        assert_eq!(ClassPolicy::ContiguousRemap.decide(0), None);
        assert_eq!(ClassPolicy::ContiguousRemap.decide(11), None);
        assert_eq!(ClassPolicy::ContiguousRemap.decide(-1), None);
        assert_eq!(ClassPolicy::ContiguousRemap.decide(255), None);
    }

    #[test]
    fn single_class_keeps_only_the_target() {
        let policy = ClassPolicy::SingleClass {
            target: 4,
            output: 0,
        };
        assert_eq!(policy.decide(4), Some(0));
        assert_eq!(policy.decide(5), None);
        assert_eq!(policy.decide(0), None);
    }

    #[test]
    fn single_class_compat_accepts_already_remapped_id() {
        // target - 1 is what the target class is called after a contiguous
        // remap; accepting both lets raw and converted files mix in one
        // run.
        let policy = ClassPolicy::SingleClass {
            target: 4,
            output: 0,
        };
        assert_eq!(policy.decide(3), Some(0));
        assert_eq!(policy.decide(2), None);
    }

    #[test]
    fn class_name_covers_the_known_range() {
        assert_eq!(class_name(1), Some("pedestrian"));
        assert_eq!(class_name(4), Some("car"));
        assert_eq!(class_name(10), Some("motor"));
        assert_eq!(class_name(0), None);
        assert_eq!(class_name(11), None);
        assert_eq!(class_name(-3), None);
    }
}
