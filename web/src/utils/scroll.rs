/// Smoothly scrolls the element with `id` to the top of the viewport.
/// Missing elements are ignored.
pub fn scroll_to_id(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Target of an in-page `#anchor` link, if `href` is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn anchor_target_strips_hash() {
        assert_eq!(anchor_target("#fees"), Some("fees"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/contact-us"), None);
    }
}
