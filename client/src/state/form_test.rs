use super::*;

fn typed(field: Field, value: &str) -> FormState {
    FormState::default().reduce(FormMsg::Input(field, value.to_owned())).state
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_trims_appends_and_clears_input() {
    let state = typed(Field::Texts, "  a lighthouse at dusk  ");
    let update = state.reduce(FormMsg::Add(Field::Texts));
    assert_eq!(update.state.spec.texts, vec!["a lighthouse at dusk".to_owned()]);
    assert!(update.state.text_input.is_empty());
    assert!(update.submitted.is_none());
}

#[test]
fn add_whitespace_only_is_noop() {
    let state = typed(Field::Styles, "   \t ");
    let update = state.reduce(FormMsg::Add(Field::Styles));
    assert_eq!(update.state, state);
}

#[test]
fn add_targets_only_its_field() {
    let state = typed(Field::Styles, "oil painting").reduce(FormMsg::Add(Field::Styles)).state;
    assert_eq!(state.spec.styles, vec!["oil painting".to_owned()]);
    assert!(state.spec.texts.is_empty());
}

#[test]
fn add_preserves_insertion_order() {
    let mut state = FormState::default();
    for text in ["first", "second", "third"] {
        state = state.reduce(FormMsg::Input(Field::Texts, text.to_owned())).state;
        state = state.reduce(FormMsg::Add(Field::Texts)).state;
    }
    assert_eq!(state.entries(Field::Texts), ["first", "second", "third"]);
}

#[test]
fn reduce_leaves_original_untouched() {
    let state = typed(Field::Texts, "foo");
    let _ = state.reduce(FormMsg::Add(Field::Texts));
    assert_eq!(state.input(Field::Texts), "foo");
    assert!(state.spec.texts.is_empty());
}

// =============================================================
// Remove
// =============================================================

#[test]
fn add_then_remove_returns_to_empty() {
    let state = typed(Field::Texts, "foo").reduce(FormMsg::Add(Field::Texts)).state;
    let state = state.reduce(FormMsg::Remove(Field::Texts, "foo".to_owned())).state;
    assert!(state.spec.texts.is_empty());
}

#[test]
fn remove_missing_value_is_noop() {
    let state = typed(Field::Styles, "ink").reduce(FormMsg::Add(Field::Styles)).state;
    let update = state.reduce(FormMsg::Remove(Field::Styles, "oil".to_owned()));
    assert_eq!(update.state, state);
}

#[test]
fn remove_duplicate_drops_first_occurrence_only() {
    let mut state = FormState::default();
    for text in ["a", "b", "a"] {
        state = state.reduce(FormMsg::Input(Field::Texts, text.to_owned())).state;
        state = state.reduce(FormMsg::Add(Field::Texts)).state;
    }
    let state = state.reduce(FormMsg::Remove(Field::Texts, "a".to_owned())).state;
    assert_eq!(state.entries(Field::Texts), ["b", "a"]);
}

// =============================================================
// Submit / toggle
// =============================================================

#[test]
fn submit_hands_off_draft_and_resets() {
    let state = typed(Field::Texts, "foo").reduce(FormMsg::Add(Field::Texts)).state;
    let state = state.reduce(FormMsg::Input(Field::Styles, "ink".to_owned())).state;
    let state = state.reduce(FormMsg::Add(Field::Styles)).state;

    let update = state.reduce(FormMsg::Submit);
    let submitted = update.submitted.expect("submit yields draft");
    assert_eq!(submitted.texts, vec!["foo".to_owned()]);
    assert_eq!(submitted.styles, vec!["ink".to_owned()]);
    assert!(update.state.spec.texts.is_empty());
    assert!(update.state.spec.styles.is_empty());
    assert_eq!(update.state.spec, ImageSpec::default());
}

#[test]
fn submit_keeps_expanded_and_inputs() {
    let state = FormState { expanded: true, style_input: "half typed".to_owned(), ..FormState::default() };
    let update = state.reduce(FormMsg::Submit);
    assert!(update.state.expanded);
    assert_eq!(update.state.style_input, "half typed");
}

#[test]
fn toggle_flips_expanded() {
    let state = FormState::default();
    let opened = state.reduce(FormMsg::ToggleExpanded).state;
    assert!(opened.expanded);
    let closed = opened.reduce(FormMsg::ToggleExpanded).state;
    assert!(!closed.expanded);
}

// =============================================================
// estimated_steps
// =============================================================

#[test]
fn estimated_steps_zero_without_texts() {
    assert_eq!(FormState::default().estimated_steps(), 0);
}

#[test]
fn estimated_steps_counts_cleanup_step() {
    let state = typed(Field::Texts, "foo").reduce(FormMsg::Add(Field::Texts)).state;
    // one cleanup step + 1 text x 1 style slot x 25 epochs
    assert_eq!(state.estimated_steps(), 26);
}
