//! List cursor over the ordered view.

use crate::mail::OrderedView;

/// Current position in the folder view.
///
/// Stored as an id so it survives the view being rebuilt; the last known
/// index is kept to pick a neighbour when the current email leaves the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCursor {
    id: Option<String>,
    index: usize,
}

impl ListCursor {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Position of the cursor in the given view
    pub fn index_in(&self, view: &OrderedView<'_>) -> Option<usize> {
        self.id.as_deref().and_then(|id| view.position(id))
    }

    /// Point at the entry at `index`; out of range leaves the cursor alone
    pub fn select_index(&mut self, view: &OrderedView<'_>, index: usize) -> bool {
        let Some(email) = view.get(index) else {
            return false;
        };
        self.id = Some(email.id.clone());
        self.index = index;
        true
    }

    /// Point at a specific id, if it is in the view
    pub fn select_id(&mut self, view: &OrderedView<'_>, id: &str) -> bool {
        match view.position(id) {
            Some(index) => self.select_index(view, index),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.id = None;
        self.index = 0;
    }

    /// Step forward; returns the new id. No-op when unset or at the end.
    pub fn next(&mut self, view: &OrderedView<'_>) -> Option<String> {
        let current = self.index_in(view)?;
        if current + 1 >= view.len() {
            return None;
        }
        self.select_index(view, current + 1);
        self.id.clone()
    }

    /// Step backward; returns the new id. No-op when unset or at the start.
    pub fn prev(&mut self, view: &OrderedView<'_>) -> Option<String> {
        let current = self.index_in(view)?;
        if current == 0 {
            return None;
        }
        self.select_index(view, current - 1);
        self.id.clone()
    }

    pub fn first(&mut self, view: &OrderedView<'_>) -> bool {
        self.select_index(view, 0)
    }

    pub fn last(&mut self, view: &OrderedView<'_>) -> bool {
        match view.len() {
            0 => false,
            len => self.select_index(view, len - 1),
        }
    }

    /// Restore the invariant after the view changed shape.
    ///
    /// Keeps the id if still present, otherwise moves to the entry now at the
    /// last known index (clamped), or unsets the cursor on an empty view.
    pub fn reconcile(&mut self, view: &OrderedView<'_>) {
        let Some(id) = self.id.as_deref() else { return };

        if let Some(index) = view.position(id) {
            self.index = index;
            return;
        }

        if view.is_empty() {
            self.clear();
            return;
        }

        let index = self.index.min(view.len() - 1);
        self.select_index(view, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::seed::email;
    use crate::mail::{Email, Folder};

    fn emails(ids: &[&str]) -> Vec<Email> {
        ids.iter().map(|id| email(id, Folder::Inbox)).collect()
    }

    fn view(emails: &[Email]) -> OrderedView<'_> {
        OrderedView::from_entries(emails.iter().collect())
    }

    #[test]
    fn test_navigation_requires_cursor() {
        let data = emails(&["a", "b"]);
        let v = view(&data);
        let mut cursor = ListCursor::default();

        assert_eq!(cursor.next(&v), None);
        assert_eq!(cursor.prev(&v), None);
        assert!(cursor.id().is_none());
    }

    #[test]
    fn test_step_and_bounds() {
        let data = emails(&["a", "b", "c"]);
        let v = view(&data);
        let mut cursor = ListCursor::default();

        assert!(cursor.first(&v));
        assert_eq!(cursor.id(), Some("a"));
        assert_eq!(cursor.prev(&v), None);
        assert_eq!(cursor.id(), Some("a"));

        assert_eq!(cursor.next(&v).as_deref(), Some("b"));
        assert_eq!(cursor.next(&v).as_deref(), Some("c"));
        assert_eq!(cursor.next(&v), None);
        assert_eq!(cursor.id(), Some("c"));
    }

    #[test]
    fn test_jump_on_empty_view() {
        let data: Vec<Email> = Vec::new();
        let v = view(&data);
        let mut cursor = ListCursor::default();

        assert!(!cursor.first(&v));
        assert!(!cursor.last(&v));
        assert!(cursor.id().is_none());
    }

    #[test]
    fn test_reconcile_keeps_present_id() {
        let data = emails(&["a", "b", "c"]);
        let mut cursor = ListCursor::default();
        cursor.select_id(&view(&data), "c");

        let shrunk = emails(&["b", "c"]);
        cursor.reconcile(&view(&shrunk));
        assert_eq!(cursor.id(), Some("c"));
        assert_eq!(cursor.index_in(&view(&shrunk)), Some(1));
    }

    #[test]
    fn test_reconcile_moves_to_neighbour() {
        let data = emails(&["a", "b", "c"]);
        let mut cursor = ListCursor::default();
        cursor.select_id(&view(&data), "b");

        let after = emails(&["a", "c"]);
        cursor.reconcile(&view(&after));
        assert_eq!(cursor.id(), Some("c"));
    }

    #[test]
    fn test_reconcile_clamps_to_end() {
        let data = emails(&["a", "b", "c"]);
        let mut cursor = ListCursor::default();
        cursor.last(&view(&data));

        let after = emails(&["a"]);
        cursor.reconcile(&view(&after));
        assert_eq!(cursor.id(), Some("a"));
    }

    #[test]
    fn test_reconcile_empty_view_unsets() {
        let data = emails(&["a"]);
        let mut cursor = ListCursor::default();
        cursor.first(&view(&data));

        let empty: Vec<Email> = Vec::new();
        cursor.reconcile(&view(&empty));
        assert_eq!(cursor.id(), None);
    }
}
