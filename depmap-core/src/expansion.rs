//! Per-category expand/collapse flags.

use crate::model::CategoryKey;

/// Which category cards show their item lists.
///
/// Owned by a single view; never persisted. Keys come from the closed
/// [`CategoryKey`] set, so every key always has a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionState {
    flags: [bool; CategoryKey::COUNT],
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::initial()
    }
}

impl ExpansionState {
    /// Every category expanded.
    pub fn initial() -> Self {
        Self {
            flags: [true; CategoryKey::COUNT],
        }
    }

    pub fn is_expanded(&self, key: CategoryKey) -> bool {
        self.flags[key.index()]
    }

    /// Flip one category. Returns the new value.
    pub fn toggle(&mut self, key: CategoryKey) -> bool {
        let flag = &mut self.flags[key.index()];
        *flag = !*flag;
        *flag
    }

    pub fn set(&mut self, key: CategoryKey, expanded: bool) {
        self.flags[key.index()] = expanded;
    }

    pub fn expand_all(&mut self) {
        self.flags = [true; CategoryKey::COUNT];
    }

    pub fn collapse_all(&mut self) {
        self.flags = [false; CategoryKey::COUNT];
    }

    /// `(key, expanded)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, bool)> + '_ {
        CategoryKey::ALL.into_iter().map(|k| (k, self.is_expanded(k)))
    }

    pub fn expanded_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// Start from [`initial`](Self::initial) and toggle each listed key once.
    /// Repeated keys count once.
    pub fn with_collapsed(keys: &[CategoryKey]) -> Self {
        let mut state = Self::initial();
        for key in CategoryKey::ALL {
            if keys.contains(&key) {
                state.toggle(key);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_expands_every_category() {
        let state = ExpansionState::initial();
        for key in CategoryKey::ALL {
            assert!(state.is_expanded(key), "{key} should start expanded");
        }
        assert_eq!(state.expanded_count(), 6);
    }

    #[test]
    fn toggle_flips_only_the_given_key() {
        for key in CategoryKey::ALL {
            let before = ExpansionState::initial();
            let mut after = before;
            assert!(!after.toggle(key));

            for other in CategoryKey::ALL {
                if other == key {
                    assert!(!after.is_expanded(other));
                } else {
                    assert_eq!(after.is_expanded(other), before.is_expanded(other));
                }
            }

            assert!(after.toggle(key));
            assert_eq!(after, before);
        }
    }

    #[test]
    fn expand_and_collapse_all() {
        let mut state = ExpansionState::initial();
        state.collapse_all();
        assert_eq!(state.expanded_count(), 0);
        state.set(CategoryKey::News, true);
        assert!(state.is_expanded(CategoryKey::News));
        state.expand_all();
        assert_eq!(state, ExpansionState::initial());
    }

    #[test]
    fn with_collapsed_ignores_duplicates() {
        let state =
            ExpansionState::with_collapsed(&[CategoryKey::Mt5, CategoryKey::Mt5, CategoryKey::Core]);
        assert!(!state.is_expanded(CategoryKey::Mt5));
        assert!(!state.is_expanded(CategoryKey::Core));
        assert_eq!(state.expanded_count(), 4);
    }

    #[test]
    fn iter_follows_declaration_order() {
        let keys: Vec<CategoryKey> = ExpansionState::initial().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, CategoryKey::ALL.to_vec());
    }
}
