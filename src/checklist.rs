use crate::models::ChecklistItem;
use std::collections::HashSet;

/// The five daily checks every fresh session starts with.
pub fn default_items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("1", "Pill taken in the morning on an empty stomach"),
        ChecklistItem::new("2", "Energy level is normal"),
        ChecklistItem::new("3", "Mood is stable"),
        ChecklistItem::new("4", "No new swelling"),
        ChecklistItem::new("5", "Not complaining about feeling cold"),
    ]
}

/// Ordered checklist. Ids and labels are fixed once built; only `checked`
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistState {
    items: Vec<ChecklistItem>,
}

impl Default for ChecklistState {
    fn default() -> Self {
        Self {
            items: default_items(),
        }
    }
}

impl ChecklistState {
    /// Builds from stored items, falling back to the default list when the
    /// stored list is empty or has duplicate ids.
    pub fn from_stored(items: Option<Vec<ChecklistItem>>) -> Self {
        match items {
            Some(items) if is_valid(&items) => Self { items },
            Some(_) => {
                tracing::warn!("stored checklist is empty or has duplicate ids, using defaults");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flips the item with `id`. Returns false when no such item exists.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }
}

fn is_valid(items: &[ChecklistItem]) -> bool {
    let mut seen = HashSet::new();
    !items.is_empty() && items.iter().all(|item| seen.insert(item.id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_the_matching_item() {
        let mut checklist = ChecklistState::default();
        assert!(checklist.toggle("3"));

        for item in checklist.items() {
            assert_eq!(item.checked, item.id == "3", "item {}", item.id);
        }

        assert!(checklist.toggle("3"));
        assert!(checklist.items().iter().all(|item| !item.checked));
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut checklist = ChecklistState::default();
        let before = checklist.clone();
        assert!(!checklist.toggle("42"));
        assert_eq!(checklist, before);
    }

    #[test]
    fn clear_unchecks_everything() {
        let mut checklist = ChecklistState::default();
        checklist.toggle("1");
        checklist.toggle("5");
        checklist.clear();
        assert!(checklist.items().iter().all(|item| !item.checked));
        assert_eq!(checklist.len(), 5);
    }

    #[test]
    fn invalid_stored_lists_fall_back_to_defaults() {
        assert_eq!(ChecklistState::from_stored(Some(Vec::new())), ChecklistState::default());

        let duplicated = vec![ChecklistItem::new("1", "a"), ChecklistItem::new("1", "b")];
        assert_eq!(ChecklistState::from_stored(Some(duplicated)), ChecklistState::default());

        let custom = vec![ChecklistItem::new("x", "Walk")];
        assert_eq!(ChecklistState::from_stored(Some(custom.clone())).items(), custom.as_slice());
    }
}
