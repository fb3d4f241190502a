//! Vegetable icons and display text helpers.

/// Known vegetables, in legend order
pub const VEGETABLE_ICONS: &[(&str, &str)] = &[
    ("tomato", "🍅"),
    ("carrot", "🥕"),
    ("lettuce", "🥬"),
    ("cucumber", "🥒"),
    ("pepper", "🫑"),
    ("potato", "🥔"),
    ("onion", "🧅"),
    ("garlic", "🧄"),
    ("broccoli", "🥦"),
    ("cabbage", "🥬"),
    ("kale", "🥬"),
    ("spinach", "🥬"),
    ("beet", "🫜"),
    ("radish", "🫜"),
    ("corn", "🌽"),
    ("pea", "🫛"),
    ("bean", "🫘"),
    ("pumpkin", "🎃"),
    ("squash", "🎃"),
    ("zucchini", "🥒"),
    ("strawberry", "🍓"),
    ("blueberry", "🫐"),
    ("herb", "🌿"),
];

/// Shown for anything not in [`VEGETABLE_ICONS`]
pub const FALLBACK_ICON: &str = "🌱";

pub const TREE_ICON: &str = "🌳";

/// Case-insensitive lookup; never fails.
pub fn icon_for_vegetable(vegetable: &str) -> &'static str {
    let key = vegetable.to_lowercase();
    VEGETABLE_ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

/// `"sweet corn"` -> `"Sweet Corn"`. Repeated spaces collapse to one.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
