use crate::checklist::ChecklistState;
use crate::history::HistoryLog;
use crate::models::{ChecklistItem, ChecklistView, DailyRecord, HistoryPoint, HistoryView};

/// Smallest chart denominator, so a week of low counts still shows bars.
pub const MIN_CHART_SCALE: u32 = 5;

pub fn completed_count(items: &[ChecklistItem]) -> u32 {
    items.iter().filter(|item| item.checked).count() as u32
}

pub fn progress_percentage(items: &[ChecklistItem]) -> f64 {
    percentage(completed_count(items), items.len() as u32)
}

pub fn max_completed(records: &[DailyRecord]) -> u32 {
    records
        .iter()
        .map(|record| record.completed)
        .fold(MIN_CHART_SCALE, u32::max)
}

pub fn bar_height(record: &DailyRecord, max_completed: u32) -> f64 {
    percentage(record.completed, max_completed)
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * f64::from(part) / f64::from(whole)
}

pub fn build_checklist_view(date: &str, checklist: &ChecklistState, day_changed: bool) -> ChecklistView {
    let items = checklist.items();
    ChecklistView {
        date: date.to_string(),
        items: items.to_vec(),
        completed: completed_count(items),
        total: items.len() as u32,
        percentage: progress_percentage(items),
        day_changed,
    }
}

pub fn build_history_view(history: &HistoryLog) -> HistoryView {
    let max = max_completed(history.all());
    let records = history
        .all()
        .iter()
        .map(|record| HistoryPoint {
            date: record.date.clone(),
            label: chart_label(&record.date),
            completed: record.completed,
            total: record.total,
            percentage: percentage(record.completed, record.total),
            bar_height: bar_height(record, max),
        })
        .collect();

    HistoryView {
        records,
        max_completed: max,
    }
}

/// `01.06.2024` -> `01.06`.
pub fn chart_label(date: &str) -> String {
    date.split('.').take(2).collect::<Vec<_>>().join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(completed: u32) -> DailyRecord {
        DailyRecord {
            date: "01.06.2024".into(),
            completed,
            total: 5,
        }
    }

    #[test]
    fn completed_count_spans_none_to_all() {
        let mut checklist = ChecklistState::default();
        assert_eq!(completed_count(checklist.items()), 0);
        assert_eq!(progress_percentage(checklist.items()), 0.0);

        let ids: Vec<_> = checklist.items().iter().map(|item| item.id.clone()).collect();
        let mut last = 0.0;
        for (index, id) in ids.iter().enumerate() {
            checklist.toggle(id);
            assert_eq!(completed_count(checklist.items()), index as u32 + 1);
            let current = progress_percentage(checklist.items());
            assert!(current > last);
            last = current;
        }
        assert_eq!(progress_percentage(checklist.items()), 100.0);
    }

    #[test]
    fn empty_checklist_has_zero_progress() {
        assert_eq!(progress_percentage(&[]), 0.0);
    }

    #[test]
    fn max_completed_is_floored() {
        assert_eq!(max_completed(&[]), MIN_CHART_SCALE);
        assert_eq!(max_completed(&[record(1), record(3)]), MIN_CHART_SCALE);

        let wide = DailyRecord {
            date: "02.06.2024".into(),
            completed: 8,
            total: 10,
        };
        assert_eq!(max_completed(&[record(2), wide]), 8);
    }

    #[test]
    fn bar_heights_scale_against_max() {
        assert_eq!(bar_height(&record(5), 5), 100.0);
        assert_eq!(bar_height(&record(2), 5), 40.0);
        assert_eq!(bar_height(&record(0), 5), 0.0);
    }

    #[test]
    fn history_view_carries_labels_and_heights() {
        let mut history = HistoryLog::default();
        history.record("01.06.2024", 2, 5);
        history.record("02.06.2024", 5, 5);

        let view = build_history_view(&history);
        assert_eq!(view.max_completed, 5);
        assert_eq!(view.records.len(), 2);
        assert_eq!(view.records[0].label, "01.06");
        assert_eq!(view.records[0].percentage, 40.0);
        assert_eq!(view.records[1].bar_height, 100.0);
    }
}
