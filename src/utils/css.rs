/// Wraps a path in a CSS `url()` function.
pub fn css_url(path: &str) -> String {
    format!("url({path})")
}
