use super::*;
use leptos::reactive::owner::Owner;

#[test]
fn first_observation_is_not_a_change() {
    assert!(!token_changed(None, &None));
    assert!(!token_changed(None, &Some("abc".into())));
}

#[test]
fn unchanged_token_is_not_a_change() {
    assert!(!token_changed(Some(&Some("abc".into())), &Some("abc".into())));
    assert!(!token_changed(Some(&None), &None));
}

#[test]
fn sign_in_and_sign_out_are_changes() {
    assert!(token_changed(Some(&None), &Some("abc".into())));
    assert!(token_changed(Some(&Some("abc".into())), &None));
    assert!(token_changed(Some(&Some("abc".into())), &Some("xyz".into())));
}

#[test]
fn stored_token_is_absent_outside_browser() {
    assert_eq!(load_token(), None);
}

#[test]
fn set_token_blank_signs_out() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::from_raw(Some("abc")));
        set_token(auth, Some("   "));
        assert_eq!(auth.get_untracked(), AuthState::default());
    });
}

#[test]
fn set_token_trims_new_token() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        set_token(auth, Some(" abc\n"));
        assert_eq!(auth.get_untracked().token.as_deref(), Some("abc"));
    });
}
