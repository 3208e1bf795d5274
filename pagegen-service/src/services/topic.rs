/// Turn a request path (without its leading slash) into the phrase the page is
/// about: `products/vintage_cameras` becomes `products vintage cameras`.
///
/// An empty path is the home page. Everything except `/` and `_` is kept as-is,
/// including case and repeated spaces.
pub fn page_topic(path: &str) -> String {
    if path.is_empty() {
        return "home".to_string();
    }

    path.replace('/', " ").replace('_', " ")
}
