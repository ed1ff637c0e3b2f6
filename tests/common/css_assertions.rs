//! Assertions over generated CSS text.

/// Asserts that `css` contains a rule block for `selector` holding `declaration`.
#[macro_export]
macro_rules! assert_css_rule {
    ($css:expr, $selector:expr, $declaration:expr) => {{
        let opening = format!("{} {{\n", $selector);
        let start = $css
            .find(&opening)
            .unwrap_or_else(|| panic!("No rule for '{}' in:\n{}", $selector, $css));
        let block = &$css[start..];
        let end = block.find('}').unwrap_or(block.len());
        assert!(
            block[..end].contains(&format!("  {};", $declaration)),
            "Rule '{}' lacks '{}':\n{}",
            $selector,
            $declaration,
            &block[..end]
        );
    }};
}
