//! Property-based tests for the expansion state and the data store.

use proptest::prelude::*;

use depmap_core::report::MarkdownReportGenerator;
use depmap_core::{data, CategoryKey, ExpansionState, Icon, ItemType};

fn arb_key() -> impl Strategy<Value = CategoryKey> {
    (0..CategoryKey::COUNT).prop_map(|i| CategoryKey::from_index(i).unwrap())
}

fn arb_item_type() -> impl Strategy<Value = ItemType> {
    (0..ItemType::ALL.len()).prop_map(|i| ItemType::ALL[i])
}

proptest! {
    /// A key's flag equals `true` XOR the parity of how often it was toggled,
    /// whatever else was toggled in between.
    #[test]
    fn flag_tracks_toggle_parity(toggles in prop::collection::vec(arb_key(), 0..64)) {
        let mut state = ExpansionState::initial();
        for key in &toggles {
            state.toggle(*key);
        }
        for key in CategoryKey::ALL {
            let flips = toggles.iter().filter(|k| **k == key).count();
            prop_assert_eq!(state.is_expanded(key), flips % 2 == 0);
        }
    }

    /// Double toggle is the identity from any reachable state.
    #[test]
    fn double_toggle_restores(
        prefix in prop::collection::vec(arb_key(), 0..16),
        key in arb_key(),
    ) {
        let mut state = ExpansionState::initial();
        for k in &prefix {
            state.toggle(*k);
        }
        let before = state;
        state.toggle(key);
        state.toggle(key);
        prop_assert_eq!(state, before);
    }

    /// The badge count never depends on expansion.
    #[test]
    fn badge_ignores_expansion(toggles in prop::collection::vec(arb_key(), 0..32)) {
        let mut state = ExpansionState::initial();
        for key in &toggles {
            state.toggle(*key);
        }
        let md = MarkdownReportGenerator.generate(&state);
        for category in data::categories() {
            prop_assert_eq!(category.badge(), format!("{} items", category.items.len()));
            let heading = format!("{} ({})", category.title, category.badge());
            prop_assert!(md.contains(&heading), "missing {}", heading);
        }
    }

    /// Only the four decorated types get an icon.
    #[test]
    fn icon_lookup_is_total(t in arb_item_type()) {
        let decorated = matches!(
            t,
            ItemType::External | ItemType::Config | ItemType::Feature | ItemType::Storage
        );
        prop_assert_eq!(Icon::for_item_type(t).is_some(), decorated);
    }
}

#[test]
fn mt5_collapse_scenario() {
    let mut state = ExpansionState::initial();
    let mt5 = data::category(CategoryKey::Mt5);

    assert!(state.is_expanded(CategoryKey::Mt5));
    state.toggle(CategoryKey::Mt5);
    assert!(!state.is_expanded(CategoryKey::Mt5));
    assert_eq!(mt5.badge(), "4 items");

    state.toggle(CategoryKey::Mt5);
    assert!(state.is_expanded(CategoryKey::Mt5));
    assert_eq!(mt5.items.len(), 4);
    assert_eq!(mt5.items[0].name, "MetaTrader5 >= 5.0.45");
}
