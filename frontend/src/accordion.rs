/// Expand/collapse state for a list where at most one item is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    /// Opens `index`, closing whatever was open. Toggling the open item closes it.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggled(mut self, index: usize) -> Self {
        self.toggle(index);
        self
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_item_closes_the_first() {
        let accordion = Accordion::default().toggled(2).toggled(5);
        assert!(!accordion.is_expanded(2));
        assert!(accordion.is_expanded(5));
        assert_eq!((0..10).filter(|&i| accordion.is_expanded(i)).count(), 1);
    }

    #[test]
    fn toggling_open_item_collapses_all() {
        let accordion = Accordion::default().toggled(3).toggled(3);
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn starts_collapsed() {
        let accordion = Accordion::default();
        assert!((0..10).all(|i| !accordion.is_expanded(i)));
    }
}
