use indexmap::IndexSet;

/// Single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Ordered declaration list for one selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<Declaration>);

impl Declarations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, property: &str, value: impl Into<String>) {
        self.0.push(Declaration {
            property: property.to_string(),
            value: value.into(),
        });
    }

    /// Push only when `value` is present and non-empty
    pub fn push_present(&mut self, property: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(property, value);
        }
    }

    pub fn extend(&mut self, other: Declarations) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.iter().any(|d| d.property == property)
    }

    pub fn any(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.0.iter().any(|d| predicate(&d.property))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.0.iter()
    }
}

/// CSS rule with selector and declarations, optionally wrapped in a media query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Declarations,
    pub media_query: Option<String>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>, declarations: Declarations) -> Self {
        Self {
            selector: selector.into(),
            declarations,
            media_query: None,
        }
    }

    pub fn with_media_query(mut self, media_query: impl Into<String>) -> Self {
        self.media_query = Some(media_query.into());
        self
    }

    /// Convert to CSS text
    pub fn to_css(&self) -> String {
        match &self.media_query {
            None => render_block(&self.selector, &self.declarations, ""),
            Some(query) => format!(
                "@media {} {{\n{}\n}}",
                query,
                render_block(&self.selector, &self.declarations, "  ")
            ),
        }
    }
}

fn render_block(selector: &str, declarations: &Declarations, indent: &str) -> String {
    let mut css = String::new();
    css.push_str(indent);
    css.push_str(selector);
    css.push_str(" {\n");

    for declaration in declarations.iter() {
        css.push_str(indent);
        css.push_str("  ");
        css.push_str(&declaration.property);
        css.push_str(": ");
        css.push_str(&declaration.value);
        css.push_str(";\n");
    }

    css.push_str(indent);
    css.push('}');
    css
}

/// Stylesheet under construction. Rules are identified by their full text,
/// so an identical rule produced twice is only kept once.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: IndexSet<String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule; empty rules are dropped.
    pub fn add_rule(&mut self, rule: CssRule) {
        if rule.declarations.is_empty() {
            return;
        }
        self.rules.insert(rule.to_css());
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarations(pairs: &[(&str, &str)]) -> Declarations {
        let mut decls = Declarations::new();
        for (property, value) in pairs {
            decls.push(property, *value);
        }
        decls
    }

    #[test]
    fn test_rule_to_css() {
        let rule = CssRule::new(".card", declarations(&[("padding", "1rem"), ("color", "#333")]));
        assert_eq!(rule.to_css(), ".card {\n  padding: 1rem;\n  color: #333;\n}");
    }

    #[test]
    fn test_media_rule_is_indented() {
        let rule = CssRule::new(".card", declarations(&[("padding", "0.5rem")]))
            .with_media_query("(max-width: 375px)");
        assert_eq!(
            rule.to_css(),
            "@media (max-width: 375px) {\n  .card {\n    padding: 0.5rem;\n  }\n}"
        );
    }

    #[test]
    fn test_identical_rules_collapse() {
        let mut sheet = StyleSheet::new();
        sheet.add_rule(CssRule::new(".a", declarations(&[("color", "red")])));
        sheet.add_rule(CssRule::new(".a", declarations(&[("color", "red")])));
        sheet.add_rule(CssRule::new(".a", declarations(&[("color", "blue")])));
        sheet.add_rule(CssRule::new(".empty", Declarations::new()));

        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.to_css(),
            ".a {\n  color: red;\n}\n\n.a {\n  color: blue;\n}"
        );
    }
}
