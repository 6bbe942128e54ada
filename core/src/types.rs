/// Opaque identifier the Category Source uses for a category.
pub type CategoryId = u64;

/// Board position `(category, clue)`, i.e. `(column, row)`.
pub type CellPos = (usize, usize);

/// Number of categories (columns) on a board.
pub const CATEGORY_COUNT: usize = 6;

/// Number of clues (rows) per category.
pub const CLUES_PER_CATEGORY: usize = 5;

/// How many candidate categories are requested before sampling.
pub const CATEGORY_POOL_SIZE: usize = 100;

pub const fn cell_count() -> usize {
    CATEGORY_COUNT * CLUES_PER_CATEGORY
}
