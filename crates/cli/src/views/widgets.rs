//! Reusable text widgets: pagination bar, error panel, skeletons.

use std::fmt::Write;

use heroes_core::pagination::Paginator;

/// Cell used to draw skeleton placeholders.
const SHADE: char = '░';

/// One line of page controls, e.g. `‹ 1 … 4 5 [6] 7 8 … 20 ›`.
///
/// Arrows are replaced by spaces when there is no previous/next page.
pub fn pagination_bar(paginator: &Paginator) -> String {
    let window = paginator.window();
    let mut tokens: Vec<String> = Vec::new();

    tokens.push(if paginator.previous_page().is_some() { "‹" } else { " " }.to_string());
    if window.show_first {
        tokens.push("1".to_string());
    }
    if window.show_leading_ellipsis {
        tokens.push("…".to_string());
    }
    for page in &window.pages {
        if *page == paginator.current_page {
            tokens.push(format!("[{page}]"));
        } else {
            tokens.push(page.to_string());
        }
    }
    if window.show_trailing_ellipsis {
        tokens.push("…".to_string());
    }
    if window.show_last {
        tokens.push(paginator.total_pages.to_string());
    }
    tokens.push(if paginator.next_page().is_some() { "›" } else { " " }.to_string());

    tokens.join(" ").trim_end().to_string()
}

/// Range summary and page-size choices under the pagination bar.
pub fn pagination_footer(paginator: &Paginator) -> String {
    let options = paginator
        .page_size_options
        .iter()
        .map(|size| {
            if *size == paginator.page_size {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} of {}  |  per page: {options}",
        paginator.range_text(),
        paginator.total_items
    )
}

/// Error message with the action the user can take.
pub fn error_panel(message: &str, action: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  ! {message}");
    let _ = writeln!(out, "    {action}");
    out
}

/// Placeholder rows shown while a list page is loading.
pub fn list_skeleton(rows: u32) -> String {
    let row = format!("  {}  {}  {}", shade(4), shade(24), shade(18));
    let mut out = String::new();
    for _ in 0..rows {
        let _ = writeln!(out, "{row}");
    }
    out
}

/// Placeholder block shown while the detail view is loading.
pub fn detail_skeleton() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", shade(20));
    let _ = writeln!(out, "{}", shade(32));
    let _ = writeln!(out);
    for _ in 0..6 {
        let _ = writeln!(out, "  {}  {}", shade(12), shade(10));
    }
    out
}

fn shade(width: usize) -> String {
    std::iter::repeat(SHADE).take(width).collect()
}
