use super::*;

#[test]
fn login_prompt_names_the_origin_route() {
    let redirect = RedirectState { from: "/dashboard".to_owned() };
    assert_eq!(login_prompt(Some(&redirect)), "Sign in to continue to /dashboard.");
}

#[test]
fn login_prompt_without_origin_is_generic() {
    assert_eq!(login_prompt(None), "Sign in to continue.");
    let redirect = RedirectState { from: String::new() };
    assert_eq!(login_prompt(Some(&redirect)), "Sign in to continue.");
}

#[test]
fn should_leave_login_only_after_session_settles() {
    assert!(should_leave_login(&AuthState::authenticated()));
    assert!(!should_leave_login(&AuthState::loading()));
    assert!(!should_leave_login(&AuthState { is_authenticated: true, is_loading: true }));
    assert!(!should_leave_login(&AuthState::default()));
}
