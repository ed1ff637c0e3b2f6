//! Plain CSS rule model emitted by presets and fluid contexts.
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// A selector with its declaration block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    /// Value of the first declaration for `property`, if any.
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        writeln!(
            f,
            "{}",
            self.declarations.iter().map(|d| format!("  {}", d)).join("\n")
        )?;
        write!(f, "}}")
    }
}

/// Turns a preset name into a class selector, escaping characters that are
/// not valid in a bare CSS identifier.
pub fn class_selector(name: &str) -> String {
    let mut selector = String::with_capacity(name.len() + 1);
    selector.push('.');
    for c in name.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            selector.push('\\');
        }
        selector.push(c);
    }
    selector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(
            ".wrapper",
            vec![
                Declaration::new("max-width", "60rem"),
                Declaration::new("margin-inline", "auto"),
            ],
        );
        assert_eq!(
            rule.to_string(),
            ".wrapper {\n  max-width: 60rem;\n  margin-inline: auto;\n}"
        );
        assert_eq!(rule.value_of("max-width"), Some("60rem"));
        assert_eq!(rule.value_of("padding"), None);
    }

    #[test]
    fn test_class_selector_escapes() {
        assert_eq!(class_selector("grid-cols-3"), ".grid-cols-3");
        assert_eq!(class_selector("aspect-4:3"), ".aspect-4\\:3");
        assert_eq!(class_selector("aspect-1.85:1"), ".aspect-1\\.85\\:1");
    }
}
