//! Ordered rename rules applied to every file of a materialized template.
//!
//! Rules are evaluated top to bottom and the first match wins, so the
//! reserved names are never treated as placeholder files.

use regex::{NoExpand, Regex, RegexBuilder};

use crate::constants::PLACEHOLDER_MARKER;

/// What a rule decided for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the file to a new name, content untouched
    Rename { to: String },
    /// Render the content into a new file and drop the original
    Render { to: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exact, case-sensitive file name rewritten to a dotfile
    Reserved { name: &'static str, rename_to: &'static str },
    /// File names containing `marker` are rendered
    Placeholder { marker: &'static str },
}

/// Rules applied by the transformer, in precedence order.
pub const RULES: &[Rule] = &[
    Rule::Reserved { name: "gitignore", rename_to: ".gitignore" },
    Rule::Reserved { name: "gitkeep", rename_to: ".gitkeep" },
    Rule::Reserved { name: "golangci.yml", rename_to: ".golangci.yml" },
    Rule::Placeholder { marker: PLACEHOLDER_MARKER },
];

/// Replaces every case-insensitive occurrence of the template name with the
/// lower-cased project name.
#[derive(Debug)]
pub struct NameSwap {
    pattern: Option<Regex>,
    replacement: String,
}

impl NameSwap {
    pub fn new(template_name: &str, project_name: &str) -> Result<Self, regex::Error> {
        let pattern = if template_name.is_empty() {
            None
        } else {
            Some(RegexBuilder::new(&regex::escape(template_name)).case_insensitive(true).build()?)
        };
        Ok(Self { pattern, replacement: project_name.to_lowercase() })
    }

    pub fn apply(&self, file_name: &str) -> String {
        match &self.pattern {
            Some(pattern) => {
                pattern.replace_all(file_name, NoExpand(&self.replacement)).into_owned()
            }
            None => file_name.to_string(),
        }
    }
}

impl Rule {
    /// Returns the action for `file_name`, or `None` when the rule does not match.
    pub fn apply(&self, file_name: &str, swap: &NameSwap) -> Option<Action> {
        match *self {
            Rule::Reserved { name, rename_to } => {
                (file_name == name).then(|| Action::Rename { to: rename_to.to_string() })
            }
            Rule::Placeholder { marker } => file_name.contains(marker).then(|| {
                Action::Render { to: swap.apply(&file_name.replace(marker, "")) }
            }),
        }
    }
}

/// Evaluates `rules` in order; the first match decides.
pub fn evaluate(rules: &[Rule], file_name: &str, swap: &NameSwap) -> Option<Action> {
    rules.iter().find_map(|rule| rule.apply(file_name, swap))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap() -> NameSwap {
        NameSwap::new("mytpl", "MyProject").unwrap()
    }

    fn render_to(name: &str) -> Option<Action> {
        Some(Action::Render { to: name.to_string() })
    }

    #[test]
    fn reserved_names_are_renamed() {
        let swap = swap();
        for (from, to) in
            [("gitignore", ".gitignore"), ("gitkeep", ".gitkeep"), ("golangci.yml", ".golangci.yml")]
        {
            assert_eq!(
                evaluate(RULES, from, &swap),
                Some(Action::Rename { to: to.to_string() })
            );
        }
    }

    #[test]
    fn reserved_names_are_case_sensitive() {
        assert_eq!(evaluate(RULES, "GitIgnore", &swap()), None);
        assert_eq!(evaluate(RULES, ".gitignore", &swap()), None);
    }

    #[test]
    fn placeholder_marker_is_removed() {
        assert_eq!(evaluate(RULES, "main-tpl.go", &swap()), render_to("main.go"));
        assert_eq!(evaluate(RULES, "go.mod-tpl", &swap()), render_to("go.mod"));
    }

    #[test]
    fn template_name_is_swapped_case_insensitively() {
        assert_eq!(evaluate(RULES, "mytpl-tpl.go", &swap()), render_to("myproject.go"));
        assert_eq!(evaluate(RULES, "MyTpl_test-tpl.go", &swap()), render_to("myproject_test.go"));
    }

    #[test]
    fn swap_only_applies_to_rendered_files() {
        assert_eq!(evaluate(RULES, "mytpl.go", &swap()), None);
    }

    #[test]
    fn template_name_is_matched_literally() {
        let swap = NameSwap::new("a.b", "proj").unwrap();
        assert_eq!(swap.apply("a.b.go"), "proj.go");
        assert_eq!(swap.apply("axb.go"), "axb.go");

        let swap = NameSwap::new("cli", "$name").unwrap();
        assert_eq!(swap.apply("cli.go"), "$name.go");
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = [
            Rule::Placeholder { marker: "-tpl" },
            Rule::Reserved { name: "gitignore-tpl", rename_to: ".gitignore" },
        ];
        assert_eq!(evaluate(&rules, "gitignore-tpl", &swap()), render_to("gitignore"));
    }
}
