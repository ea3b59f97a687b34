use serde::Serialize;

/// Read-only demo records backing the `/name/` listing. Never mutated after
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FakeItem {
    pub item_name: &'static str,
}

pub static FAKE_ITEMS_DB: [FakeItem; 3] = [
    FakeItem { item_name: "Foo" },
    FakeItem { item_name: "Bar" },
    FakeItem { item_name: "Baz" },
];

/// Slice of the fixture list clamped to its bounds. Out-of-range requests
/// yield a truncated or empty slice, never an error.
pub fn page(start_index: usize, count: usize) -> &'static [FakeItem] {
    let start = start_index.min(FAKE_ITEMS_DB.len());
    let end = start_index
        .saturating_add(count)
        .min(FAKE_ITEMS_DB.len());
    &FAKE_ITEMS_DB[start..end]
}
