use leptos::*;

/// Runs `f` inside a fresh reactive runtime. Resource loading is suppressed,
/// so view models that create resources can be built without an executor.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    result
}

/// Renders a view to HTML. Components that fetch on mount render their
/// initial state only.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_stay_unloaded_inside_runtime() {
        let loaded = with_runtime(|| {
            let count = create_rw_signal(0u32);
            let resource = create_resource(move || count.get(), |n| async move { n + 1 });
            count.set(1);
            resource.get()
        });
        assert_eq!(loaded, None);
    }
}
