use crate::checklist::ChecklistState;
use crate::errors::AppError;
use crate::history::HistoryLog;
use crate::models::{ChecklistView, DailyRecord, HistoryView};
use crate::stats::{build_checklist_view, build_history_view, completed_count};
use crate::storage::{Store, CHECKLIST_KEY, HISTORY_KEY, LAST_SAVED_KEY};
use tracing::info;

/// The single anonymous user's state. In-memory values are authoritative;
/// every mutation is written through to the store before it is applied.
#[derive(Debug)]
pub struct Session {
    store: Store,
    checklist: ChecklistState,
    history: HistoryLog,
    previous_day: Option<String>,
}

impl Session {
    pub async fn open(mut store: Store, today: &str) -> Result<Self, AppError> {
        let checklist = ChecklistState::from_stored(store.load(CHECKLIST_KEY));
        let history = HistoryLog::from_stored(store.load(HISTORY_KEY));
        store.save(CHECKLIST_KEY, &checklist.items()).await?;

        let mut session = Self {
            store,
            checklist,
            history,
            previous_day: None,
        };
        session.observe_day(today).await?;
        Ok(session)
    }

    /// Compares `lastSaved` with `today` and stores `today`. Called on every
    /// checklist read, so a day rollover is seen without a restart.
    pub async fn observe_day(&mut self, today: &str) -> Result<(), AppError> {
        let last_saved = self.store.get(LAST_SAVED_KEY).map(str::to_string);
        if last_saved.as_deref() == Some(today) {
            return Ok(());
        }

        self.store.set(LAST_SAVED_KEY, today).await?;
        if let Some(last) = &last_saved {
            info!("new day since last visit ({last} -> {today})");
        }
        self.previous_day = last_saved;
        Ok(())
    }

    /// True once a new day has been seen and today has not been recorded yet.
    pub fn day_changed(&self, today: &str) -> bool {
        self.previous_day
            .as_deref()
            .is_some_and(|previous| previous != today)
            && self.history.find(today).is_none()
    }

    pub fn checklist(&self) -> &ChecklistState {
        &self.checklist
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn checklist_view(&self, today: &str) -> ChecklistView {
        build_checklist_view(today, &self.checklist, self.day_changed(today))
    }

    pub fn history_view(&self) -> HistoryView {
        build_history_view(&self.history)
    }

    pub async fn toggle(&mut self, id: &str) -> Result<(), AppError> {
        let mut checklist = self.checklist.clone();
        if !checklist.toggle(id) {
            return Err(AppError::not_found(format!("no checklist item with id '{id}'")));
        }
        self.store.save(CHECKLIST_KEY, &checklist.items()).await?;
        self.checklist = checklist;
        Ok(())
    }

    /// Records today's completion count, then unchecks every item. A failed
    /// write leaves the in-memory state as it was before that step.
    pub async fn reset_day(&mut self, today: &str) -> Result<DailyRecord, AppError> {
        let completed = completed_count(self.checklist.items());
        let total = self.checklist.len() as u32;

        let mut history = self.history.clone();
        history.record(today, completed, total);
        self.store.save(HISTORY_KEY, &history.all()).await?;
        self.history = history;

        let mut checklist = self.checklist.clone();
        checklist.clear();
        self.store.save(CHECKLIST_KEY, &checklist.items()).await?;
        self.checklist = checklist;

        info!("recorded {today}: {completed}/{total}");
        Ok(DailyRecord {
            date: today.to_string(),
            completed,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChecklistItem, DailyRecord};

    const DAY: &str = "01.06.2024";

    async fn fresh() -> Session {
        Session::open(Store::in_memory(), DAY).await.unwrap()
    }

    #[tokio::test]
    async fn reset_records_snapshot_and_clears() {
        let mut session = fresh().await;
        session.toggle("1").await.unwrap();
        session.toggle("3").await.unwrap();

        let record = session.reset_day(DAY).await.unwrap();
        assert_eq!(
            record,
            DailyRecord {
                date: DAY.into(),
                completed: 2,
                total: 5
            }
        );
        assert_eq!(session.history().all(), &[record]);
        assert!(session.checklist().items().iter().all(|item| !item.checked));
    }

    #[tokio::test]
    async fn repeated_reset_on_same_day_upserts() {
        let mut session = fresh().await;
        session.toggle("2").await.unwrap();
        session.reset_day(DAY).await.unwrap();
        session.reset_day(DAY).await.unwrap();

        assert_eq!(session.history().all().len(), 1);
        assert_eq!(session.history().all()[0].completed, 0);
    }

    #[tokio::test]
    async fn toggle_unknown_id_reports_not_found() {
        let mut session = fresh().await;
        let err = session.toggle("missing").await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(completed_count(session.checklist().items()), 0);
    }

    #[tokio::test]
    async fn every_mutation_writes_through() {
        let mut session = fresh().await;
        session.toggle("4").await.unwrap();

        let stored: Vec<ChecklistItem> = session.store.load(CHECKLIST_KEY).unwrap();
        assert_eq!(stored, session.checklist().items());

        session.reset_day(DAY).await.unwrap();
        let stored: Vec<DailyRecord> = session.store.load(HISTORY_KEY).unwrap();
        assert_eq!(stored, session.history().all());
        let stored: Vec<ChecklistItem> = session.store.load(CHECKLIST_KEY).unwrap();
        assert!(stored.iter().all(|item| !item.checked));
    }

    #[tokio::test]
    async fn reopening_restores_state() {
        let mut session = fresh().await;
        session.toggle("5").await.unwrap();
        session.reset_day(DAY).await.unwrap();
        session.toggle("1").await.unwrap();

        let Session {
            store,
            checklist,
            history,
            ..
        } = session;
        let reopened = Session::open(store, DAY).await.unwrap();
        assert_eq!(reopened.checklist(), &checklist);
        assert_eq!(reopened.history(), &history);
    }

    #[tokio::test]
    async fn last_saved_flags_a_new_day() {
        let session = fresh().await;
        assert!(!session.checklist_view(DAY).day_changed);

        let mut next = Session::open(session.store, "02.06.2024").await.unwrap();
        assert!(next.checklist_view("02.06.2024").day_changed);
        assert_eq!(next.store.get(LAST_SAVED_KEY), Some("02.06.2024"));

        next.reset_day("02.06.2024").await.unwrap();
        assert!(!next.checklist_view("02.06.2024").day_changed);
    }

    #[tokio::test]
    async fn day_rollover_is_seen_without_reopening() {
        let mut session = fresh().await;
        session.toggle("1").await.unwrap();

        session.observe_day("02.06.2024").await.unwrap();
        assert!(session.checklist_view("02.06.2024").day_changed);
        assert_eq!(session.store.get(LAST_SAVED_KEY), Some("02.06.2024"));

        // Later reads the same day keep the flag until the day is recorded.
        session.observe_day("02.06.2024").await.unwrap();
        assert!(session.checklist_view("02.06.2024").day_changed);

        session.reset_day("02.06.2024").await.unwrap();
        session.observe_day("02.06.2024").await.unwrap();
        assert!(!session.checklist_view("02.06.2024").day_changed);
    }

    #[tokio::test]
    async fn failed_write_leaves_state_untouched() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("care_checklist_session_{nanos}"));
        std::fs::create_dir_all(&dir).unwrap();

        let store = Store::open(&dir.join("state.json")).await;
        let mut session = Session::open(store, DAY).await.unwrap();
        session.toggle("2").await.unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(session.reset_day(DAY).await.is_err());
        assert!(session.history().is_empty());
        assert_eq!(completed_count(session.checklist().items()), 1);
        assert!(session.store.load::<Vec<DailyRecord>>(HISTORY_KEY).is_none());

        assert!(session.toggle("3").await.is_err());
        assert_eq!(completed_count(session.checklist().items()), 1);
    }
}
