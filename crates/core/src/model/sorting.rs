#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortCategory {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortItem {
    pub id: &'static str,
    pub emoji: &'static str,
    /// Id of the category the item belongs to.
    pub category: &'static str,
}

/// A fixed sorting level: three bins and the items that go into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingSet {
    pub name: &'static str,
    pub categories: [SortCategory; 3],
    pub items: [SortItem; 6],
}

impl SortingSet {
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&SortCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&SortItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

const fn category(id: &'static str, name: &'static str) -> SortCategory {
    SortCategory { id, name }
}

const fn item(id: &'static str, emoji: &'static str, category: &'static str) -> SortItem {
    SortItem {
        id,
        emoji,
        category,
    }
}

pub static SORTING_SETS: [SortingSet; 3] = [
    SortingSet {
        name: "Colors",
        categories: [
            category("red", "Red"),
            category("blue", "Blue"),
            category("yellow", "Yellow"),
        ],
        items: [
            item("apple", "🍎", "red"),
            item("strawberry", "🍓", "red"),
            item("blueberry", "🫐", "blue"),
            item("water", "💧", "blue"),
            item("banana", "🍌", "yellow"),
            item("sun", "☀️", "yellow"),
        ],
    },
    SortingSet {
        name: "Animals",
        categories: [
            category("water", "Water Animals"),
            category("land", "Land Animals"),
            category("air", "Air Animals"),
        ],
        items: [
            item("fish", "🐠", "water"),
            item("dolphin", "🐬", "water"),
            item("dog", "🐕", "land"),
            item("elephant", "🐘", "land"),
            item("bird", "🐦", "air"),
            item("butterfly", "🦋", "air"),
        ],
    },
    SortingSet {
        name: "Shapes",
        categories: [
            category("round", "Round"),
            category("square", "Square"),
            category("triangle", "Triangle"),
        ],
        items: [
            item("ball", "⚽", "round"),
            item("orange", "🍊", "round"),
            item("box", "📦", "square"),
            item("tv", "📺", "square"),
            item("pizza", "🍕", "triangle"),
            item("mountain", "⛰️", "triangle"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_points_at_a_category_of_its_set() {
        for set in &SORTING_SETS {
            for item in &set.items {
                assert!(set.category(item.category).is_some(), "{}", item.id);
            }
        }
    }
}
