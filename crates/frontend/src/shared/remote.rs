//! Per-slot request lifecycle primitives.
//!
//! Every remotely loaded piece of screen state lives in one [`RemoteState`]
//! slot, and every slot that can be re-requested pairs it with a
//! [`RequestFence`] so a slow stale response cannot clobber a newer one.

/// Lifecycle of one remotely loaded state slot.
///
/// The tagged variants replace the loose data/error/loading triple: a slot
/// cannot be loading and failed at once. A failure while data is already on
/// screen keeps the data (the message goes to the owning screen's banner
/// instead of wiping the slot).
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for RemoteState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RemoteState<T> {
    /// Mark the slot as loading. A previously loaded value stays put so the
    /// screen keeps rendering it while the refresh is in flight.
    pub fn begin(&mut self) {
        if !matches!(self, Self::Loaded(_)) {
            *self = Self::Loading;
        }
    }

    pub fn resolve(&mut self, value: T) {
        *self = Self::Loaded(value);
    }

    /// Record a failure. A previously loaded value survives it.
    pub fn fail(&mut self, message: impl Into<String>) {
        if !matches!(self, Self::Loaded(_)) {
            *self = Self::Failed(message.into());
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic sequence fence for one state slot.
///
/// Each request takes a fresh sequence number from [`issue`](Self::issue);
/// a response may only write back when its number still
/// [`admits`](Self::admits), i.e. no newer request has been issued since.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestFence {
    issued: u64,
}

impl RequestFence {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn current(&self) -> u64 {
        self.issued
    }

    pub fn admits(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_starts_idle_and_not_loading() {
        let slot = RemoteState::<Vec<i64>>::default();
        assert_eq!(slot, RemoteState::Idle);
        assert!(!slot.is_loading());
    }

    #[test]
    fn begin_resolve_cycle() {
        let mut slot = RemoteState::default();
        slot.begin();
        assert!(slot.is_loading());
        slot.resolve(vec![1, 2]);
        assert_eq!(slot.data(), Some(&vec![1, 2]));
        assert!(!slot.is_loading());
    }

    #[test]
    fn failure_without_data_is_failed() {
        let mut slot = RemoteState::<i64>::default();
        slot.begin();
        slot.fail("no luck");
        assert_eq!(slot.error(), Some("no luck"));
        assert!(slot.data().is_none());
        assert!(!slot.is_loading());
    }

    #[test]
    fn loaded_value_survives_failed_refresh() {
        let mut slot = RemoteState::default();
        slot.resolve(7);
        slot.begin();
        assert_eq!(slot.data(), Some(&7));
        slot.fail("refresh failed");
        assert_eq!(slot.data(), Some(&7));
        assert!(slot.error().is_none());
    }

    #[test]
    fn resolve_replaces_previous_value() {
        let mut slot = RemoteState::default();
        slot.resolve(vec![1]);
        slot.begin();
        slot.resolve(vec![2, 3]);
        assert_eq!(slot.data(), Some(&vec![2, 3]));
    }

    #[test]
    fn fence_admits_only_latest_sequence() {
        let mut fence = RequestFence::default();
        let first = fence.issue();
        assert!(fence.admits(first));

        let second = fence.issue();
        assert!(!fence.admits(first));
        assert!(fence.admits(second));
        assert_eq!(fence.current(), second);
    }

    #[test]
    fn fence_sequences_are_monotonic() {
        let mut fence = RequestFence::default();
        let a = fence.issue();
        let b = fence.issue();
        let c = fence.issue();
        assert!(a < b && b < c);
    }
}
