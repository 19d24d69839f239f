//! Configuration templates for `econ init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out example
//! configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn templates_parse_as_valid_toml() {
        let local = parse_config(LOCAL_TEMPLATE);
        assert!(local.is_ok(), "local template failed to parse: {local:?}");
        let global = parse_config(GLOBAL_TEMPLATE);
        assert!(global.is_ok(), "global template failed to parse: {global:?}");
    }

    #[test]
    fn local_template_defines_both_collections() {
        let config = parse_config(LOCAL_TEMPLATE).unwrap();
        let collections = config.collection.unwrap();
        assert!(collections.contains_key("data"));
        assert!(collections.contains_key("reports"));
    }

    #[test]
    fn commented_template_parses_as_empty() {
        let config = parse_config(&local_template()).unwrap();
        assert!(config.search.is_none());
        assert!(config.collection.is_none());
        assert!(global_template().contains("# [search]"));
    }

    #[test]
    fn comment_template_rules() {
        let input = "# note\n[section]\nkey = \"value\"\n\nother = 1\n";
        assert_eq!(
            comment_template(input),
            "# note\n# [section]\n# key = \"value\"\n\n# other = 1\n"
        );
    }
}
