//! Interactive browser: list and detail screens driven by one-line commands.
//!
//! | Key        | Screen | Action                               |
//! |------------|--------|--------------------------------------|
//! | `n`        | list   | next page                            |
//! | `p`        | list   | previous page                        |
//! | `g <page>` | list   | jump to a page                       |
//! | `s <size>` | list   | change page size (back to page 1)    |
//! | `o <id>`   | any    | open a hero                          |
//! | `b`        | detail | back to the list                     |
//! | `r`        | any    | reload the current screen            |
//! | `q`        | any    | quit                                 |

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use heroes_core::pagination::PAGE_SIZE_OPTIONS;
use heroes_core::service::HeroService;

use crate::views::detail::HeroDetailView;
use crate::views::list::HeroListView;

pub const HELP_LINE: &str = "n next | p prev | g <page> | s <size> | o <id> | b back | r retry | q quit";

/// One parsed key command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Next,
    Previous,
    GoTo(u32),
    PageSize(u32),
    Open(String),
    Back,
    Retry,
    Quit,
}

/// Parse one input line. `Err` carries a message for the user.
pub fn parse_key(line: &str) -> Result<Key, String> {
    let mut parts = line.split_whitespace();
    let key = parts.next().unwrap_or_default();
    let arg = parts.next();

    if parts.next().is_some() {
        return Err(format!("Too many arguments. {HELP_LINE}"));
    }

    match (key, arg) {
        ("n", None) => Ok(Key::Next),
        ("p", None) => Ok(Key::Previous),
        ("b", None) => Ok(Key::Back),
        ("r", None) => Ok(Key::Retry),
        ("q", None) => Ok(Key::Quit),
        ("g", Some(page)) => page
            .parse()
            .map(Key::GoTo)
            .map_err(|_| format!("Not a page number: {page}")),
        ("s", Some(size)) => match size.parse::<u32>() {
            Ok(size) if PAGE_SIZE_OPTIONS.contains(&size) => Ok(Key::PageSize(size)),
            _ => Err(format!("Page size must be one of {PAGE_SIZE_OPTIONS:?}")),
        },
        ("o", Some(id)) => Ok(Key::Open(id.to_string())),
        _ => Err(HELP_LINE.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// Both views plus which one is showing.
pub struct Browser {
    list: HeroListView,
    detail: HeroDetailView,
    screen: Screen,
    /// Feedback for the last command, shown once under the screen.
    notice: Option<String>,
}

impl Browser {
    pub fn new(service: HeroService, page_size: u32) -> Self {
        Self {
            list: HeroListView::new(service.clone(), page_size),
            detail: HeroDetailView::new(service),
            screen: Screen::List,
            notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn list(&self) -> &HeroListView {
        &self.list
    }

    pub fn detail(&self) -> &HeroDetailView {
        &self.detail
    }

    /// Apply one key. Returns `false` when the user quits.
    pub async fn apply(&mut self, key: Key) -> bool {
        self.notice = None;
        match (key, self.screen) {
            (Key::Quit, _) => return false,
            (Key::Open(id), _) => {
                self.screen = Screen::Detail;
                self.detail.open(&id).await;
            }
            (Key::Retry, Screen::List) => self.list.retry().await,
            (Key::Retry, Screen::Detail) => self.detail.retry().await,
            (Key::Back, Screen::Detail) => self.screen = Screen::List,
            (Key::Next, Screen::List) => match self.list.paginator().next_page() {
                Some(page) => self.list.change_page(page).await,
                None => self.notice = Some("Already on the last page.".into()),
            },
            (Key::Previous, Screen::List) => match self.list.paginator().previous_page() {
                Some(page) => self.list.change_page(page).await,
                None => self.notice = Some("Already on the first page.".into()),
            },
            (Key::GoTo(page), Screen::List) => match self.list.paginator().go_to_page(page) {
                Some(page) => self.list.change_page(page).await,
                None if page == self.list.current_page() => {}
                None => {
                    self.notice = Some(format!(
                        "Page {page} is out of range (1-{}).",
                        self.list.total_pages()
                    ))
                }
            },
            (Key::PageSize(size), Screen::List) => {
                if size != self.list.page_size() {
                    self.list.change_page_size(size).await;
                }
            }
            (_, Screen::Detail) => self.notice = Some("Press b to go back to the list.".into()),
            (Key::Back, Screen::List) => {}
        }
        true
    }

    pub fn render(&self) -> String {
        let mut out = match self.screen {
            Screen::List => self.list.render(),
            Screen::Detail => self.detail.render(),
        };
        if let Some(notice) = &self.notice {
            out.push_str(&format!("\n{notice}\n"));
        }
        out
    }
}

/// Run the browser against `input` until `q` or end of input.
pub async fn run<R, W>(service: HeroService, page_size: u32, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut browser = Browser::new(service, page_size);
    browser.list.load().await;

    let mut lines = input.lines();
    loop {
        writeln!(output, "{}", browser.render())?;
        write!(output, "{HELP_LINE}\n> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_key(&line) {
            Ok(key) => {
                tracing::debug!(?key, "Browser command");
                if !browser.apply(key).await {
                    break;
                }
            }
            Err(message) => browser.notice = Some(message),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_keys() {
        assert_eq!(parse_key("n"), Ok(Key::Next));
        assert_eq!(parse_key(" p "), Ok(Key::Previous));
        assert_eq!(parse_key("g 12"), Ok(Key::GoTo(12)));
        assert_eq!(parse_key("s 30"), Ok(Key::PageSize(30)));
        assert_eq!(parse_key("o 70"), Ok(Key::Open("70".into())));
        assert_eq!(parse_key("q"), Ok(Key::Quit));
    }

    #[test]
    fn rejects_sizes_outside_the_options() {
        assert!(parse_key("s 15").is_err());
        assert!(parse_key("s many").is_err());
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_key("g").is_err());
        assert!(parse_key("g x").is_err());
        assert!(parse_key("n 2").is_err());
        assert!(parse_key("o 1 2").is_err());
        assert!(parse_key("zoom").is_err());
    }
}
