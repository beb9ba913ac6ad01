use crate::models::DailyRecord;

pub const HISTORY_WINDOW: usize = 7;

/// Daily snapshots, oldest first, capped at [`HISTORY_WINDOW`].
///
/// The window is by position: a same-date record is replaced where it sits,
/// a new one is appended, and the front is dropped when over the cap. Dates
/// are never compared for order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    records: Vec<DailyRecord>,
}

impl HistoryLog {
    /// Drops records with `completed > total`, folds repeated dates into
    /// one record and keeps the last [`HISTORY_WINDOW`] of what remains.
    ///
    /// A repeated date keeps the position of its first occurrence and the
    /// value of its last, the same result `record` gives for an upsert.
    pub fn from_stored(records: Option<Vec<DailyRecord>>) -> Self {
        let mut stored = records.unwrap_or_default();
        let before = stored.len();
        stored.retain(|record| record.completed <= record.total);
        if stored.len() != before {
            tracing::warn!("dropped {} inconsistent history records", before - stored.len());
        }

        let loaded = stored.len();
        let mut records: Vec<DailyRecord> = Vec::with_capacity(loaded);
        for record in stored {
            match records.iter_mut().find(|existing| existing.date == record.date) {
                Some(existing) => *existing = record,
                None => records.push(record),
            }
        }
        if records.len() != loaded {
            tracing::warn!("merged {} duplicate history dates", loaded - records.len());
        }

        let mut log = Self { records };
        log.truncate();
        log
    }

    pub fn all(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, date: &str) -> Option<&DailyRecord> {
        self.records.iter().find(|record| record.date == date)
    }

    pub fn record(&mut self, date: &str, completed: u32, total: u32) {
        let record = DailyRecord {
            date: date.to_string(),
            completed,
            total,
        };

        match self.records.iter_mut().find(|existing| existing.date == date) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }

        self.truncate();
    }

    fn truncate(&mut self) {
        if self.records.len() > HISTORY_WINDOW {
            let excess = self.records.len() - HISTORY_WINDOW;
            self.records.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: usize) -> String {
        format!("{n:02}.06.2024")
    }

    #[test]
    fn same_date_replaces_in_place() {
        let mut log = HistoryLog::default();
        log.record(&day(1), 1, 5);
        log.record(&day(2), 2, 5);
        log.record(&day(1), 4, 5);

        assert_eq!(log.all().len(), 2);
        assert_eq!(log.all()[0].date, day(1));
        assert_eq!(log.all()[0].completed, 4);
        assert_eq!(log.all()[1].date, day(2));
    }

    #[test]
    fn eighth_distinct_date_evicts_the_oldest() {
        let mut log = HistoryLog::default();
        let completed = [1, 2, 3, 4, 5, 4, 3, 2];
        for (index, value) in completed.iter().enumerate() {
            log.record(&day(index + 1), *value, 5);
            assert!(log.all().len() <= HISTORY_WINDOW);
        }

        let dates: Vec<_> = log.all().iter().map(|record| record.date.clone()).collect();
        let expected: Vec<_> = (2..=8).map(day).collect();
        assert_eq!(dates, expected);

        let values: Vec<_> = log.all().iter().map(|record| record.completed).collect();
        assert_eq!(values, vec![2, 3, 4, 5, 4, 3, 2]);
    }

    #[test]
    fn window_is_by_position_not_date() {
        let mut log = HistoryLog::default();
        for n in (1..=8).rev() {
            log.record(&day(n), 1, 5);
        }
        // Inserted newest-date first, so the latest date is the one evicted.
        assert!(log.find(&day(8)).is_none());
        assert!(log.find(&day(1)).is_some());
    }

    #[test]
    fn stored_records_are_validated_and_capped() {
        let mut stored: Vec<_> = (1..=9)
            .map(|n| DailyRecord {
                date: day(n),
                completed: 1,
                total: 5,
            })
            .collect();
        stored[8].completed = 6;

        let log = HistoryLog::from_stored(Some(stored));
        assert_eq!(log.all().len(), HISTORY_WINDOW);
        assert_eq!(log.all()[0].date, day(2));
        assert_eq!(log.all().last().unwrap().date, day(8));
    }

    #[test]
    fn stored_duplicate_dates_collapse() {
        let stored = vec![
            DailyRecord {
                date: day(1),
                completed: 1,
                total: 5,
            },
            DailyRecord {
                date: day(2),
                completed: 2,
                total: 5,
            },
            DailyRecord {
                date: day(1),
                completed: 3,
                total: 5,
            },
        ];

        let mut log = HistoryLog::from_stored(Some(stored));
        assert_eq!(log.all().len(), 2);
        assert_eq!(log.all()[0].date, day(1));
        assert_eq!(log.all()[0].completed, 3);
        assert_eq!(log.all()[1].date, day(2));

        log.record(&day(1), 5, 5);
        let matching = log.all().iter().filter(|record| record.date == day(1)).count();
        assert_eq!(matching, 1);
        assert_eq!(log.find(&day(1)).unwrap().completed, 5);
    }
}
