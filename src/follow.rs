use std::collections::BTreeSet;

/// Handles the signed-in user follows from the suggestion list.
#[derive(Debug, Clone, Default)]
pub struct FollowList {
    handles: BTreeSet<String>,
}

impl FollowList {
    pub fn is_following(&self, handle: &str) -> bool {
        self.handles.contains(handle)
    }

    /// Follows or unfollows `handle`. Returns true when now following.
    pub fn toggle(&mut self, handle: &str) -> bool {
        if self.handles.remove(handle) {
            false
        } else {
            self.handles.insert(handle.to_string());
            true
        }
    }
}
