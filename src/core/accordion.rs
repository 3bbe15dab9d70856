//! Single-open accordion state for the FAQ list

/// Static question/answer pair rendered by the FAQ accordion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqEntry {
    pub const fn new(question: &'static str, answer: &'static str) -> Self {
        Self { question, answer }
    }
}

/// Which FAQ item, if any, is expanded.
///
/// At most one item is open at a time; opening another one closes the
/// previous item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the item at `index`.
    ///
    /// Returns whether that item is open afterwards.
    pub fn select(&mut self, index: usize) -> bool {
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Collapse whatever is open
    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let state = AccordionState::new();
        assert_eq!(state.open_index(), None);
        assert!(!state.is_open(0));
    }

    #[test]
    fn test_select_opens_when_nothing_is_open() {
        let mut state = AccordionState::new();
        assert!(state.select(3));
        assert!(state.is_open(3));
        assert_eq!(state.open_index(), Some(3));
    }

    #[test]
    fn test_select_other_index_moves_the_open_item() {
        let mut state = AccordionState::new();
        state.select(1);
        assert!(state.select(2));
        assert!(!state.is_open(1));
        assert!(state.is_open(2));
    }

    #[test]
    fn test_select_open_index_closes_it() {
        let mut state = AccordionState::new();
        state.select(0);
        assert!(!state.select(0));
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_close() {
        let mut state = AccordionState::new();
        state.select(4);
        state.close();
        assert_eq!(state.open_index(), None);

        // Closing twice is harmless
        state.close();
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_faq_entry_is_const_constructible() {
        const ENTRY: FaqEntry = FaqEntry::new("Q?", "A.");
        assert_eq!(ENTRY.question, "Q?");
        assert_eq!(ENTRY.answer, "A.");
    }
}
