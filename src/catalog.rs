//! Product categories derived from catalogue ids.

use std::{fmt, ops::RangeInclusive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Smartphones,
    Consoles,
    Headphones,
    Electronics,
    PortableConsoles,
    HomeAppliances,
    Other,
}

/// Id blocks assigned to each category in the product source list.
/// Ranges are inclusive and do not overlap; the first match wins.
const CATEGORY_RANGES: [(RangeInclusive<i64>, Category); 6] = [
    (1..=5, Category::Smartphones),
    (6..=10, Category::Consoles),
    (11..=15, Category::Headphones),
    (16..=18, Category::Electronics),
    (19..=23, Category::PortableConsoles),
    (24..=28, Category::HomeAppliances),
];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Smartphones => "smartphones",
            Category::Consoles => "consoles",
            Category::Headphones => "headphones",
            Category::Electronics => "electronics",
            Category::PortableConsoles => "portable_consoles",
            Category::HomeAppliances => "home_appliances",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(product_id: i64) -> Category {
    CATEGORY_RANGES
        .iter()
        .find(|(range, _)| range.contains(&product_id))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalogue_id_maps_to_its_block() {
        let expected = [
            (1..=5, "smartphones"),
            (6..=10, "consoles"),
            (11..=15, "headphones"),
            (16..=18, "electronics"),
            (19..=23, "portable_consoles"),
            (24..=28, "home_appliances"),
        ];
        for (ids, label) in expected {
            for id in ids {
                assert_eq!(classify(id).as_str(), label, "id {id}");
            }
        }
    }

    #[test]
    fn ids_outside_the_catalogue_are_other() {
        for id in [i64::MIN, -5, -1, 0, 29, 30, 1_000, i64::MAX] {
            assert_eq!(classify(id), Category::Other, "id {id}");
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Category::PortableConsoles.to_string(), "portable_consoles");
        assert_eq!(format!("{}", Category::HomeAppliances), "home_appliances");
    }
}
