use super::*;

#[test]
fn new_sidebar_starts_expanded() {
    assert!(!SidebarContext::new().is_collapsed());
}

#[test]
fn toggle_goes_false_true_false() {
    let sidebar = SidebarContext::new();
    assert!(!sidebar.is_collapsed());
    sidebar.toggle();
    assert!(sidebar.is_collapsed());
    sidebar.toggle();
    assert!(!sidebar.is_collapsed());
}

#[test]
fn detached_sidebar_stays_expanded() {
    let sidebar = SidebarContext::detached();
    assert!(sidebar.is_detached());
    sidebar.toggle();
    assert!(!sidebar.is_collapsed());
}

#[test]
fn default_is_detached() {
    assert!(SidebarContext::default().is_detached());
}

#[test]
fn toggle_trait_reports_collapse_flag() {
    let sidebar = SidebarContext::new();
    Toggle::toggle(&sidebar);
    assert!(sidebar.current());
}

#[test]
fn use_sidebar_outside_provider_is_detached() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(use_sidebar().is_detached());
    });
}

#[test]
fn descendants_share_one_flag() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(SidebarContext::new());
        let child = owner.child();
        child.with(|| use_sidebar().toggle());
        assert!(use_sidebar().is_collapsed());
    });
}
