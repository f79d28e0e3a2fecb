/// The single playback slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Nothing loaded
    #[default]
    Empty,

    /// Video loaded and playing
    Playing(String),

    /// Video loaded but paused
    Paused(String),
}

impl Cursor {
    /// ID of the loaded video, playing or paused
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Cursor::Empty => None,
            Cursor::Playing(id) | Cursor::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Cursor::Paused(_))
    }

    /// Unload the current video, returning its ID
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Cursor::Empty => None,
            Cursor::Playing(id) | Cursor::Paused(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let cursor = Cursor::default();
        assert_eq!(cursor, Cursor::Empty);
        assert_eq!(cursor.video_id(), None);
        assert!(!cursor.is_paused());
    }

    #[test]
    fn test_take_clears_cursor() {
        let mut cursor = Cursor::Paused("a".to_string());
        assert!(cursor.is_paused());
        assert_eq!(cursor.take().as_deref(), Some("a"));
        assert_eq!(cursor, Cursor::Empty);
        assert_eq!(cursor.take(), None);
    }
}
