use yew::html::BaseComponent;
use yew::LocalServerRenderer;

/// Renders `C` to an HTML string without hydration markers. Effects never
/// run here, so canvases stay blank and no listeners are attached.
pub fn render<C: BaseComponent>(props: C::Properties) -> String {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime");
    tokio::task::LocalSet::new().block_on(
        &runtime,
        LocalServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render(),
    )
}

/// Byte offset of `needle` in `html`, failing the test when it is absent.
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in rendered markup", needle))
}
