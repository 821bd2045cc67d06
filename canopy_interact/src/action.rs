// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions produced by the controller and the notifier seam they feed.

use alloc::vec::Vec;

use canopy_tree::Pre;

/// A change to the externally owned mark set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkUpdate {
    /// Drop every mark.
    Clear,
    /// Replace the mark set with these ids, sorted ascending and deduplicated.
    Replace(Vec<Pre>),
}

/// One request the view makes of its host.
///
/// Actions are data, not callbacks: the controller stays pure and hosts
/// decide how (and whether) to apply them. [`dispatch`] applies a batch to
/// a [`Notifier`] in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The resolved focused node changed.
    Focus(Pre),
    /// The mark set should change.
    Mark(MarkUpdate),
    /// The host should navigate to the given nodes as the new context.
    Navigate {
        /// Target node ids, usually a single focused node.
        targets: Vec<Pre>,
        /// Whether the navigation should replace the current history entry
        /// instead of pushing a new one.
        replace_history: bool,
    },
    /// The host should navigate one step back in its history.
    HistoryBack,
}

/// The global notification sink other views listen on.
///
/// Implementations own cross-view state: the focused node, the shared mark
/// set, and navigation history. This crate only ever reads layout; every
/// mutation goes through here.
pub trait Notifier {
    /// The focused node changed.
    fn focus(&mut self, pre: Pre);
    /// The mark set changed.
    fn mark(&mut self, update: &MarkUpdate);
    /// Navigate to a new node context.
    fn navigate(&mut self, targets: &[Pre], replace_history: bool);
    /// Navigate back in history.
    fn history_back(&mut self);
}

/// Applies a batch of actions to a notifier, in order.
pub fn dispatch<N: Notifier>(actions: &[Action], notifier: &mut N) {
    for action in actions {
        match action {
            Action::Focus(pre) => notifier.focus(*pre),
            Action::Mark(update) => notifier.mark(update),
            Action::Navigate {
                targets,
                replace_history,
            } => notifier.navigate(targets, *replace_history),
            Action::HistoryBack => notifier.history_back(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use canopy_tree::Pre;

    use super::{Action, MarkUpdate, Notifier, dispatch};

    #[derive(Default)]
    struct Recorder {
        log: Vec<&'static str>,
        focused: Option<Pre>,
        marked: Vec<Pre>,
    }

    impl Notifier for Recorder {
        fn focus(&mut self, pre: Pre) {
            self.log.push("focus");
            self.focused = Some(pre);
        }

        fn mark(&mut self, update: &MarkUpdate) {
            self.log.push("mark");
            match update {
                MarkUpdate::Clear => self.marked.clear(),
                MarkUpdate::Replace(ids) => self.marked = ids.clone(),
            }
        }

        fn navigate(&mut self, _targets: &[Pre], _replace_history: bool) {
            self.log.push("navigate");
        }

        fn history_back(&mut self) {
            self.log.push("back");
        }
    }

    #[test]
    fn dispatch_preserves_order() {
        let mut recorder = Recorder::default();
        dispatch(
            &[
                Action::Focus(7),
                Action::Mark(MarkUpdate::Replace(vec![1, 2])),
                Action::HistoryBack,
            ],
            &mut recorder,
        );
        assert_eq!(recorder.log, vec!["focus", "mark", "back"]);
        assert_eq!(recorder.focused, Some(7));
        assert_eq!(recorder.marked, vec![1, 2]);
    }

    #[test]
    fn clear_empties_the_recorded_mark_set() {
        let mut recorder = Recorder::default();
        dispatch(
            &[
                Action::Mark(MarkUpdate::Replace(vec![3, 4, 5])),
                Action::Mark(MarkUpdate::Clear),
            ],
            &mut recorder,
        );
        assert!(recorder.marked.is_empty());
    }
}
