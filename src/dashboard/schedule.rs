use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::store::Medicine;

/// A display bucket of records sharing a scheduled time-of-day.
#[derive(Debug, Clone)]
pub struct TimeGroup {
    /// Normalized HH:MM label, or the raw time string when it can't be parsed.
    pub label: String,
    pub time: Option<NaiveTime>,
    pub medicines: Vec<Medicine>,
}

/// Derived dashboard counters, recomputed from the current list on every
/// render. Nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Medications still to be taken
    pub total: usize,
    /// Distinct time groups among not-yet-taken medications
    pub time_slots: usize,
    /// Medications already marked taken
    pub taken: usize,
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .ok()
}

/// Group records by normalized time-of-day, groups sorted ascending.
/// Records with unparseable times keep their raw string as the label and
/// sort after all parseable groups.
pub fn group_by_time(medicines: &[Medicine]) -> Vec<TimeGroup> {
    let mut parsed: BTreeMap<NaiveTime, Vec<Medicine>> = BTreeMap::new();
    let mut unparsed: BTreeMap<String, Vec<Medicine>> = BTreeMap::new();

    for medicine in medicines {
        match parse_time(&medicine.time) {
            Some(time) => parsed.entry(time).or_default().push(medicine.clone()),
            None => unparsed
                .entry(medicine.time.clone())
                .or_default()
                .push(medicine.clone()),
        }
    }

    let mut groups: Vec<TimeGroup> = parsed
        .into_iter()
        .map(|(time, medicines)| TimeGroup {
            label: time.format("%H:%M").to_string(),
            time: Some(time),
            medicines,
        })
        .collect();

    groups.extend(unparsed.into_iter().map(|(label, medicines)| TimeGroup {
        label,
        time: None,
        medicines,
    }));

    groups
}

/// Dashboard statistics over the current list. Time slots only count groups
/// of not-yet-taken medications.
pub fn stats(medicines: &[Medicine]) -> Stats {
    let pending: Vec<Medicine> = medicines.iter().filter(|m| !m.taken).cloned().collect();

    Stats {
        total: pending.len(),
        time_slots: group_by_time(&pending).len(),
        taken: medicines.iter().filter(|m| m.taken).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn medicine(name: &str, time: &str, taken: bool) -> Medicine {
        Medicine {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            time: time.to_string(),
            dosage: None,
            notes: None,
            taken,
        }
    }

    #[test]
    fn test_grouping_is_stable_and_ordered() {
        let meds = vec![
            medicine("Melatonin", "21:30", false),
            medicine("Aspirin", "09:00", false),
            medicine("Vitamin D", "09:00", false),
        ];

        let groups = group_by_time(&meds);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "09:00");
        assert_eq!(groups[0].medicines.len(), 2);
        assert_eq!(groups[1].label, "21:30");
        assert_eq!(groups[1].medicines.len(), 1);
    }

    #[test]
    fn test_unparseable_times_bucket_last() {
        let meds = vec![
            medicine("Aspirin", "whenever", false),
            medicine("Melatonin", "21:30", false),
        ];

        let groups = group_by_time(&meds);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "21:30");
        assert_eq!(groups[1].label, "whenever");
        assert!(groups[1].time.is_none());
    }

    #[test]
    fn test_seconds_precision_times_normalize() {
        let meds = vec![
            medicine("A", "09:00", false),
            medicine("B", "09:00:00", false),
        ];
        let groups = group_by_time(&meds);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "09:00");
    }

    #[test]
    fn test_stats_counts() {
        let meds = vec![
            medicine("Aspirin", "09:00", false),
            medicine("Vitamin D", "09:00", false),
            medicine("Melatonin", "21:30", true),
        ];

        let s = stats(&meds);
        assert_eq!(s.total, 2);
        assert_eq!(s.time_slots, 1); // the 21:30 group is fully taken
        assert_eq!(s.taken, 1);
    }

    #[test]
    fn test_stats_on_empty_list() {
        let s = stats(&[]);
        assert_eq!(s, Stats { total: 0, time_slots: 0, taken: 0 });
    }

    #[test]
    fn test_taken_count_matches_flag() {
        let meds = vec![
            medicine("A", "08:00", true),
            medicine("B", "08:00", true),
            medicine("C", "12:00", false),
        ];
        assert_eq!(stats(&meds).taken, 2);
    }
}
