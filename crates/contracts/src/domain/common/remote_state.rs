/// Load status of one remotely fetched data set.
///
/// A page holds one `RemoteState` per data set instead of separate
/// `loading`/`error` booleans, so impossible combinations (loaded *and*
/// errored) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RemoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for RemoteState<T> {
    fn default() -> Self {
        RemoteState::Loading
    }
}
