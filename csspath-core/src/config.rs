//! Keyword and operator tables used by the classifiers

/// Fixed vocabulary that reclassifies generic words, operators and at-rules
#[derive(Debug, Clone)]
pub struct DialectRules {
    /// At-rule names that are SCSS control directives
    /// e.g., `@if`, `@each`
    pub control_directives: &'static [&'static str],

    /// Words that belong to an `@for` header
    pub for_keywords: &'static [&'static str],

    /// Boolean words inside `@if` / `@else if` conditions
    pub logical_keywords: &'static [&'static str],

    /// Words that belong to an `@each` header
    pub each_keywords: &'static [&'static str],

    /// Operator tokens that take surrounding space
    pub arithmetic_operators: &'static [&'static str],

    /// Comparisons; the value grammar reads these as words
    pub equality_operators: &'static [&'static str],
    pub relational_operators: &'static [&'static str],

    /// CSS-wide keywords valid for every property (compared case-insensitively)
    pub wide_keywords: &'static [&'static str],

    /// `from` / `to` selectors inside keyframes (compared case-insensitively)
    pub keyframe_selectors: &'static [&'static str],
}

impl DialectRules {
    pub fn is_control_directive(&self, name: &str) -> bool {
        self.control_directives.contains(&name)
    }

    pub fn is_for_keyword(&self, word: &str) -> bool {
        self.for_keywords.contains(&word)
    }

    pub fn is_logical_keyword(&self, word: &str) -> bool {
        self.logical_keywords.contains(&word)
    }

    pub fn is_each_keyword(&self, word: &str) -> bool {
        self.each_keywords.contains(&word)
    }

    pub fn is_arithmetic_operator(&self, op: &str) -> bool {
        self.arithmetic_operators.contains(&op)
    }

    pub fn is_equality_operator(&self, op: &str) -> bool {
        self.equality_operators.contains(&op)
    }

    pub fn is_relational_operator(&self, op: &str) -> bool {
        self.relational_operators.contains(&op)
    }

    pub fn is_wide_keyword(&self, value: &str) -> bool {
        contains_ignore_case(self.wide_keywords, value)
    }

    pub fn is_keyframe_selector(&self, value: &str) -> bool {
        contains_ignore_case(self.keyframe_selectors, value)
    }
}

fn contains_ignore_case(set: &[&str], value: &str) -> bool {
    set.iter().any(|item| item.eq_ignore_ascii_case(value))
}

pub static RULES: DialectRules = DialectRules {
    control_directives: &["if", "else", "for", "each", "while"],
    for_keywords: &["from", "through", "end"],
    logical_keywords: &["and", "or", "not"],
    each_keywords: &["in"],
    arithmetic_operators: &["+", "-", "/", "*", "%"],
    equality_operators: &["==", "!="],
    relational_operators: &["<", ">", "<=", ">="],
    wide_keywords: &["initial", "inherit", "unset", "revert"],
    keyframe_selectors: &["from", "to"],
};
