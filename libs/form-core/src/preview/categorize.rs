//! Drag-items-into-categories interaction.

use crate::types::{CategorizeAnswer, CategorizeData, CategorizeItem};

/// Interaction state for one categorize question.
///
/// Derived views are recomputed from the placements on every call.
#[derive(Debug, Clone)]
pub struct CategorizePreview<'q> {
    question: &'q CategorizeData,
    placements: CategorizeAnswer,
}

impl<'q> CategorizePreview<'q> {
    /// Start from a prior answer, or empty when there is none.
    pub fn new(question: &'q CategorizeData, seed: Option<CategorizeAnswer>) -> Self {
        Self {
            question,
            placements: seed.unwrap_or_default(),
        }
    }

    pub fn question(&self) -> &'q CategorizeData {
        self.question
    }

    /// Drop an item into a category.
    ///
    /// Ignored unless both the item and the category are declared by the
    /// question. Returns whether the drop was applied.
    pub fn place(&mut self, item: &str, category: &str) -> bool {
        if !self.question.has_category(category) || !self.question.has_item(item) {
            tracing::debug!(item, category, "ignoring drop onto unknown target");
            return false;
        }
        self.placements.insert(item.to_string(), category.to_string());
        true
    }

    /// Return an item to the uncategorized pool.
    pub fn unplace(&mut self, item: &str) -> bool {
        self.placements.remove(item).is_some()
    }

    /// Category currently holding `item`, if any.
    pub fn category_of(&self, item: &str) -> Option<&str> {
        self.placements.get(item).map(String::as_str)
    }

    /// Items not yet placed, in question order.
    pub fn uncategorized(&self) -> Vec<&'q CategorizeItem> {
        self.question
            .items
            .iter()
            .filter(|item| !self.placements.contains_key(&item.name))
            .collect()
    }

    /// Items placed in `category`, in question order.
    pub fn items_in(&self, category: &str) -> Vec<&'q CategorizeItem> {
        self.question
            .items
            .iter()
            .filter(|item| self.category_of(&item.name) == Some(category))
            .collect()
    }

    pub fn answer(&self) -> &CategorizeAnswer {
        &self.placements
    }

    pub fn into_answer(self) -> CategorizeAnswer {
        self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question() -> CategorizeData {
        CategorizeData {
            categories: vec!["Fruit".to_string(), "Veg".to_string()],
            items: vec![
                CategorizeItem::new("Apple", "Fruit"),
                CategorizeItem::new("Carrot", "Veg"),
            ],
        }
    }

    fn names(items: Vec<&CategorizeItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_uncategorized() {
        let q = question();
        let preview = CategorizePreview::new(&q, None);
        assert_eq!(names(preview.uncategorized()), vec!["Apple", "Carrot"]);
        assert!(preview.items_in("Fruit").is_empty());
    }

    #[test]
    fn place_into_declared_category() {
        let q = question();
        let mut preview = CategorizePreview::new(&q, None);

        assert!(preview.place("Apple", "Fruit"));
        assert_eq!(names(preview.items_in("Fruit")), vec!["Apple"]);
        assert_eq!(names(preview.uncategorized()), vec!["Carrot"]);
    }

    #[test]
    fn place_into_unknown_category_is_ignored() {
        let q = question();
        let mut preview = CategorizePreview::new(&q, None);
        preview.place("Apple", "Fruit");
        let before = preview.answer().clone();

        assert!(!preview.place("Apple", "Dairy"));
        assert_eq!(preview.answer(), &before);
        assert_eq!(names(preview.items_in("Fruit")), vec!["Apple"]);
    }

    #[test]
    fn place_unknown_item_is_ignored() {
        let q = question();
        let mut preview = CategorizePreview::new(&q, None);
        assert!(!preview.place("Banana", "Fruit"));
        assert!(preview.answer().is_empty());
    }

    #[test]
    fn moving_between_categories_overwrites() {
        let q = question();
        let mut preview = CategorizePreview::new(&q, None);
        preview.place("Carrot", "Fruit");
        preview.place("Carrot", "Veg");
        assert!(preview.items_in("Fruit").is_empty());
        assert_eq!(preview.category_of("Carrot"), Some("Veg"));
    }

    #[test]
    fn place_then_unplace_restores_pool() {
        let q = question();
        let mut preview = CategorizePreview::new(&q, None);
        let before = names(preview.uncategorized());

        preview.place("Apple", "Fruit");
        assert!(preview.unplace("Apple"));

        assert_eq!(names(preview.uncategorized()), before);
        assert!(!preview.unplace("Apple"));
    }

    #[test]
    fn seeded_answer_is_respected() {
        let q = question();
        let seed = CategorizeAnswer::from([("Carrot".to_string(), "Veg".to_string())]);
        let preview = CategorizePreview::new(&q, Some(seed));
        assert_eq!(names(preview.items_in("Veg")), vec!["Carrot"]);
        assert_eq!(names(preview.uncategorized()), vec!["Apple"]);
    }
}
