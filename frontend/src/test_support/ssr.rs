use leptos::*;

/// Keeps a reactive runtime alive until dropped, so async tests can hold
/// signals across `.await` points.
pub struct ReactiveScope {
    runtime: Option<RuntimeId>,
}

impl ReactiveScope {
    pub fn new() -> Self {
        Self {
            runtime: Some(create_runtime()),
        }
    }
}

impl Drop for ReactiveScope {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.dispose();
        }
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let _scope = ReactiveScope::new();
    f()
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
