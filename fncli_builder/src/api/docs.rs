use std::collections::BTreeMap;

const PARAM_TAGS: [&str; 2] = [":param ", "@param "];
const RETURN_TAGS: [&str; 3] = [":return:", ":returns:", "@return:"];

/// The documentation of a function, split into its summary, parameters and return value.
///
/// Recognizes `:param name: text`, `@param name: text`, `:return: text`, `:returns: text` and `@return: text`.
/// Lines which aren't tagged either form the summary, or continue the preceding tag.
///
/// ### Example
/// ```
/// # use fncli_builder as fncli;
/// use fncli::FunctionDocs;
///
/// let docs = FunctionDocs::parse(
///     r#"Add two numbers.
///     :param a: The first number.
///     :param b: The second
///         number.
///     :return: The sum."#,
/// );
///
/// assert_eq!(docs.summary(), Some("Add two numbers."));
/// assert_eq!(docs.param("b"), Some("The second number."));
/// assert_eq!(docs.returns(), Some("The sum."));
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FunctionDocs {
    summary: Option<String>,
    params: BTreeMap<String, String>,
    returns: Option<String>,
}

enum Section {
    Summary,
    Param(String),
    Return,
}

impl FunctionDocs {
    /// Read the documentation from a docstring.
    pub fn parse(text: &str) -> Self {
        let mut docs = FunctionDocs::default();
        let mut section = Section::Summary;

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some((name, rest)) = param_tag(line) {
                docs.params.insert(name.to_string(), String::default());
                section = Section::Param(name.to_string());
                docs.append(&section, rest);
            } else if let Some(rest) = return_tag(line) {
                docs.returns.get_or_insert_with(String::default);
                section = Section::Return;
                docs.append(&section, rest);
            } else {
                docs.append(&section, line);
            }
        }

        docs
    }

    fn append(&mut self, section: &Section, text: &str) {
        let target = match section {
            Section::Summary => self.summary.get_or_insert_with(String::default),
            Section::Param(name) => self.params.entry(name.clone()).or_default(),
            Section::Return => self.returns.get_or_insert_with(String::default),
        };

        let text = text.trim();

        if text.is_empty() {
            return;
        }

        if !target.is_empty() {
            target.push(' ');
        }

        target.push_str(text);
    }

    /// The untagged description, if any.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    /// The documentation of parameter `name`, if any.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// All the documented parameters, ordered by name.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// The return value documentation, if any.
    pub fn returns(&self) -> Option<&str> {
        self.returns.as_deref().filter(|s| !s.is_empty())
    }
}

fn param_tag(line: &str) -> Option<(&str, &str)> {
    let rest = PARAM_TAGS.iter().find_map(|tag| line.strip_prefix(tag))?;
    let (name, text) = rest.split_once(':')?;
    let name = name.trim();

    if name.is_empty() {
        None
    } else {
        Some((name, text))
    }
}

fn return_tag(line: &str) -> Option<&str> {
    RETURN_TAGS.iter().find_map(|tag| line.strip_prefix(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\n  \n")]
    fn parse_empty(#[case] text: &str) {
        let docs = FunctionDocs::parse(text);
        assert_eq!(docs.summary(), None);
        assert_eq!(docs.params().count(), 0);
        assert_eq!(docs.returns(), None);
    }

    #[test]
    fn parse_summary_only() {
        let docs = FunctionDocs::parse("  Say hello.\n\n  To everyone.  ");
        assert_eq!(docs.summary(), Some("Say hello. To everyone."));
        assert_eq!(docs.returns(), None);
    }

    #[rstest]
    #[case(":param name: Who to greet.")]
    #[case("@param name: Who to greet.")]
    #[case(":param name:   Who to greet.   ")]
    #[case(":param name:\n  Who to greet.")]
    #[case(":param name: Who\nto greet.")]
    fn parse_param(#[case] text: &str) {
        let docs = FunctionDocs::parse(text);
        assert_eq!(docs.summary(), None);
        assert_eq!(docs.param("name"), Some("Who to greet."));
        assert_eq!(docs.param("other"), None);
    }

    #[rstest]
    #[case(":return: A greeting.")]
    #[case(":returns: A greeting.")]
    #[case("@return: A greeting.")]
    #[case(":return:\nA greeting.")]
    fn parse_return(#[case] text: &str) {
        let docs = FunctionDocs::parse(text);
        assert_eq!(docs.returns(), Some("A greeting."));
    }

    #[test]
    fn parse_all() {
        let docs = FunctionDocs::parse(
            r#"
            Divide two numbers.

            :param numerator: The top.
            :param denominator: The bottom,
                which must not be zero.
            :return: The quotient.
            "#,
        );

        assert_eq!(docs.summary(), Some("Divide two numbers."));
        assert_eq!(
            docs.params().collect::<Vec<_>>(),
            vec![
                ("denominator", "The bottom, which must not be zero."),
                ("numerator", "The top."),
            ]
        );
        assert_eq!(docs.returns(), Some("The quotient."));
    }

    #[test]
    fn parse_malformed_tag() {
        // No closing ':' after the name, so this is plain text.
        let docs = FunctionDocs::parse(":param name without colon");
        assert_eq!(docs.summary(), Some(":param name without colon"));
        assert_eq!(docs.params().count(), 0);
    }

    #[test]
    fn parse_repeated_param() {
        let docs = FunctionDocs::parse(":param a: first\n:param a: second");
        assert_eq!(docs.param("a"), Some("second"));
    }
}
