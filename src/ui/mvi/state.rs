/// Marker trait for UI state snapshots.
///
/// `PartialEq` lets callers tell whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
