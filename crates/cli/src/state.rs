/// Lifecycle of data shown by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// A request is in flight; render skeletons.
    Loading,
    /// The last request failed; the message is already user-facing.
    Failed(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}
