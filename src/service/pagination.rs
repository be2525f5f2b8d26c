//! Page slicing for question listings.

/// Default number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return page `page` (1-based) of `items`.
///
/// Page `n` holds items `[per_page * (n - 1), per_page * n)`, clamped to the
/// end of the slice. Pages below 1 and pages past the end are empty.
#[must_use]
pub fn paginate<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    let Ok(index) = usize::try_from(page.saturating_sub(1)) else {
        return &[];
    };
    let start = index.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
