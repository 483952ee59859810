use crate::model::LessonId;
use crate::store::LessonStore;

/// Viewer selection over the sorted keys of a store.
///
/// Owned by whoever drives the viewer and passed to render calls; input that
/// does not resolve to a lesson in the store leaves the selection alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCursor {
    keys: Vec<String>,
    index: usize,
}

impl LessonCursor {
    /// Cursor on the first lesson, or `None` for an empty store.
    pub fn new(store: &LessonStore) -> Option<LessonCursor> {
        let keys: Vec<String> = store.keys().map(str::to_string).collect();
        if keys.is_empty() {
            return None;
        }
        Some(LessonCursor { keys, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.keys[self.index]
    }

    /// Move to the given lesson. Returns false (selection unchanged) when
    /// the input is not a valid lesson id or the lesson is not in the store.
    pub fn select(&mut self, query: &str) -> bool {
        let Some(label) = LessonId::normalize(query).map(LessonId::label) else {
            return false;
        };
        match self.keys.iter().position(|k| *k == label) {
            Some(i) => {
                self.index = i;
                true
            }
            None => false,
        }
    }

    /// Step forward; false at the last lesson.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.keys.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step back; false at the first lesson.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LessonRecord;

    fn store(numbers: &[u16]) -> LessonStore {
        let mut store = LessonStore::new();
        for &n in numbers {
            store.insert(LessonId::new(n).unwrap(), LessonRecord::default());
        }
        store
    }

    #[test]
    fn test_empty_store_has_no_cursor() {
        assert!(LessonCursor::new(&LessonStore::new()).is_none());
    }

    #[test]
    fn test_select_and_step() {
        let mut cursor = LessonCursor::new(&store(&[3, 1, 2])).unwrap();
        assert_eq!(cursor.current(), "DAY 001");

        assert!(cursor.select("day 2"));
        assert_eq!(cursor.current(), "DAY 002");
        assert!(cursor.next());
        assert_eq!(cursor.current(), "DAY 003");
        assert!(!cursor.next());
        assert_eq!(cursor.current(), "DAY 003");
    }

    #[test]
    fn test_prev_clamps_at_start() {
        let mut cursor = LessonCursor::new(&store(&[1, 2])).unwrap();
        assert!(!cursor.prev());
        assert_eq!(cursor.current(), "DAY 001");
    }

    #[test]
    fn test_invalid_input_keeps_selection() {
        let mut cursor = LessonCursor::new(&store(&[1, 2, 130])).unwrap();
        assert!(cursor.select("130"));
        assert!(!cursor.select("131"));
        assert!(!cursor.select("abc"));
        // valid id but not in the store
        assert!(!cursor.select("50"));
        assert_eq!(cursor.current(), "DAY 130");
    }
}
