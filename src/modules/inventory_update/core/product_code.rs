use unicode_normalization::UnicodeNormalization;

use crate::modules::inventory_update::core::table::Cell;

/// Uppercases, strips accents and keeps only `A-Z0-9`, so `"ab-12"` and
/// `"AB 12"` match. Empty cells normalize to `""`.
pub fn normalize_product_code(cell: &Cell) -> String {
    cell.display()
        .to_uppercase()
        .nfkd()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}
