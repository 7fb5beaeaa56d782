//! Two-state values shared through context.

/// A value with exactly two states and a flip operation.
///
/// Implemented by the theme and sidebar contexts. Detached handles (no provider
/// mounted) report their default and ignore `toggle`.
pub trait Toggle: Copy + 'static {
    type Value: Copy + PartialEq;

    /// Current value. Tracks reactively when called inside a reactive scope.
    fn current(&self) -> Self::Value;

    /// Flip the value.
    fn toggle(&self);
}

/// Click handler that flips `state`.
pub fn on_toggle<T: Toggle>(state: T) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static {
    move |_| state.toggle()
}
