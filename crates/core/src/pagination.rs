//! Pagination window calculation.
//!
//! Decides which page numbers a pagination bar shows as direct-jump
//! controls, and whether the first/last shortcuts and ellipses appear.
//! Near either end the window slides instead of shrinking.

/// Number of page buttons shown by default.
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// Page sizes offered to the user.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 30, 50];

/// Default number of heroes per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The page numbers to render plus the shortcut flags around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Consecutive page numbers, ascending.
    pub pages: Vec<u32>,
    /// Jump-to-first control before the window.
    pub show_first: bool,
    /// Ellipsis between the first page and the window.
    pub show_leading_ellipsis: bool,
    /// Ellipsis between the window and the last page.
    pub show_trailing_ellipsis: bool,
    /// Jump-to-last control after the window.
    pub show_last: bool,
}

/// Compute the visible page window.
///
/// The window is centred on `current_page` where possible and clamped to
/// `1..=total_pages`. When `total_pages >= max_visible` it always holds
/// exactly `max_visible` pages.
///
/// # Examples
///
/// ```
/// use heroes_core::pagination::page_window;
///
/// let window = page_window(1, 10, 5);
/// assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
/// assert!(!window.show_first);
/// assert!(window.show_trailing_ellipsis);
/// assert!(window.show_last);
/// ```
pub fn page_window(current_page: u32, total_pages: u32, max_visible: u32) -> PageWindow {
    let mut start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = total_pages.min(start.saturating_add(max_visible).saturating_sub(1));

    if end.saturating_sub(start) < max_visible.saturating_sub(1) {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let pages: Vec<u32> = (start..=end).collect();

    let (show_first, show_leading_ellipsis) = match pages.first() {
        Some(&first) => (first > 2, first > 3),
        None => (false, false),
    };
    let (show_trailing_ellipsis, show_last) = match pages.last() {
        Some(&last) => (
            u64::from(last) + 2 < u64::from(total_pages),
            u64::from(last) + 1 < u64::from(total_pages),
        ),
        None => (false, false),
    };

    PageWindow {
        pages,
        show_first,
        show_leading_ellipsis,
        show_trailing_ellipsis,
        show_last,
    }
}

/// Human-readable item range for a page, e.g. `"11 - 20"`.
///
/// The end is clamped to `total_items` so the last page reads `"21 - 25"`.
pub fn range_text(current_page: u32, page_size: u32, total_items: u64) -> String {
    let page_size = u64::from(page_size);
    let current_page = u64::from(current_page.max(1));
    let start = (current_page - 1) * page_size + 1;
    let end = (current_page * page_size).min(total_items);
    format!("{start} - {end}")
}

/// Navigation state of a pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    pub total_items: u64,
    pub max_visible: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            total_items: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl Paginator {
    pub fn new(current_page: u32, total_pages: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            current_page,
            total_pages,
            page_size,
            total_items,
            ..Default::default()
        }
    }

    /// Page to load for a "previous" press, if there is one.
    pub fn previous_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Page to load for a "next" press, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }

    /// `page` if it is in range and not already current.
    pub fn go_to_page(&self, page: u32) -> Option<u32> {
        (page >= 1 && page <= self.total_pages && page != self.current_page).then_some(page)
    }

    pub fn window(&self) -> PageWindow {
        page_window(self.current_page, self.total_pages, self.max_visible)
    }

    pub fn range_text(&self) -> String {
        range_text(self.current_page, self.page_size, self.total_items)
    }
}
