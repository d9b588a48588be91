use std::collections::VecDeque;

const HISTORY_LIMIT: usize = 64;

/// Host-side address fragment with back/forward history.
///
/// Fragments are stored verbatim (minus one leading `#`) and are never
/// validated here: an unknown fragment is still a valid address, it is the
/// route controller that decides what it means. Every method that moves the
/// address returns the new fragment when, and only when, the address
/// actually changed; that return value is the change signal.
#[derive(Debug, Clone)]
pub struct Location {
    entries: VecDeque<String>,
    cursor: usize,
}

impl Location {
    pub fn new(initial: &str) -> Self {
        let mut entries = VecDeque::with_capacity(HISTORY_LIMIT);
        entries.push_back(normalize(initial).to_string());
        Self { entries, cursor: 0 }
    }

    /// Current fragment without the leading `#`.
    pub fn fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Request a new fragment, as a link activation would.
    ///
    /// Requesting the current fragment is not a change and emits nothing.
    /// Otherwise forward history is discarded and the fragment is pushed.
    pub fn request(&mut self, fragment: &str) -> Option<String> {
        let fragment = normalize(fragment);
        if fragment == self.fragment() {
            return None;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(fragment.to_string());
        if self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;

        Some(fragment.to_string())
    }

    pub fn back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.fragment().to_string())
    }

    pub fn forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.fragment().to_string())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("")
    }
}

fn normalize(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::{HISTORY_LIMIT, Location};

    #[test]
    fn given_new_fragment_when_requested_then_change_is_signalled_once() {
        let mut location = Location::new("");

        assert_eq!(location.request("#verify"), Some(String::from("verify")));
        assert_eq!(location.request("verify"), None);
        assert_eq!(location.request("#verify"), None);
        assert_eq!(location.fragment(), "verify");
    }

    #[test]
    fn given_history_when_going_back_and_forward_then_fragments_replay() {
        let mut location = Location::new("home");
        location.request("verify");
        location.request("settings");

        assert_eq!(location.back(), Some(String::from("verify")));
        assert_eq!(location.back(), Some(String::from("home")));
        assert_eq!(location.back(), None);
        assert_eq!(location.forward(), Some(String::from("verify")));
        assert_eq!(location.forward(), Some(String::from("settings")));
        assert_eq!(location.forward(), None);
    }

    #[test]
    fn given_back_navigation_when_new_fragment_requested_then_forward_is_dropped()
     {
        let mut location = Location::new("home");
        location.request("verify");
        location.request("settings");
        location.back();

        location.request("analytics");

        assert!(!location.can_go_forward());
        assert_eq!(location.back(), Some(String::from("verify")));
    }

    #[test]
    fn given_unknown_fragment_when_requested_then_it_is_kept_verbatim() {
        let mut location = Location::new("");

        assert_eq!(location.request("#retired"), Some(String::from("retired")));
        assert_eq!(location.fragment(), "retired");
    }

    #[test]
    fn given_long_history_when_requests_exceed_limit_then_oldest_are_dropped() {
        let mut location = Location::new("start");
        for index in 0..HISTORY_LIMIT * 2 {
            location.request(&format!("entry-{index}"));
        }

        let mut steps = 0;
        while location.back().is_some() {
            steps += 1;
        }

        assert_eq!(steps, HISTORY_LIMIT - 1);
        assert_ne!(location.fragment(), "start");
    }
}
