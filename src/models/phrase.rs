/// A Hausa phrase with its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub id: u32,
    pub text: String,
    pub translation: String,
}

impl Phrase {
    pub fn new(id: u32, text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            translation: translation.into(),
        }
    }
}

/// Position in the repeat-after-me drill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatDrill {
    index: usize,
    repeated: Vec<bool>,
}

impl RepeatDrill {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            repeated: vec![false; len],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.repeated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repeated.is_empty()
    }

    pub fn is_repeated(&self, index: usize) -> bool {
        self.repeated.get(index).copied().unwrap_or(false)
    }

    pub fn repeated_count(&self) -> usize {
        self.repeated.iter().filter(|done| **done).count()
    }

    pub fn mark_repeated(&mut self) {
        if let Some(done) = self.repeated.get_mut(self.index) {
            *done = true;
        }
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len() - 1) % self.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_wraps_both_ways() {
        let mut drill = RepeatDrill::new(3);
        drill.previous();
        assert_eq!(drill.index(), 2);
        drill.next();
        assert_eq!(drill.index(), 0);
    }

    #[test]
    fn test_mark_repeated_counts_once() {
        let mut drill = RepeatDrill::new(3);
        drill.mark_repeated();
        drill.mark_repeated();
        drill.next();
        drill.mark_repeated();

        assert_eq!(drill.repeated_count(), 2);
        assert!(drill.is_repeated(0));
        assert!(!drill.is_repeated(2));
    }

    #[test]
    fn test_empty_drill_is_inert() {
        let mut drill = RepeatDrill::new(0);
        drill.next();
        drill.mark_repeated();
        assert_eq!(drill.index(), 0);
        assert_eq!(drill.repeated_count(), 0);
    }
}
