use crate::constant::*;
use crate::matcher::model::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Pairs a flat token list with parameter names.
///
/// Flags (`--name=value`, `--name value`, `--name`) are paired by name, and are accepted even when no such parameter is declared.
/// Every other token is paired positionally: the token at position `i` binds to the `i`-th parameter name (in index order).
#[derive(Debug)]
pub(crate) struct TokenMatcher<'a> {
    // Ordered by parameter index.
    names: Vec<&'a str>,
}

impl<'a> TokenMatcher<'a> {
    pub(crate) fn new(names: Vec<&'a str>) -> Self {
        Self { names }
    }

    /// Read the pair which starts at `tokens[index]`.
    /// A positional token is paired with the parameter at the same position.
    pub(crate) fn read_param_pair(
        &self,
        index: usize,
        tokens: &[&str],
    ) -> Result<ParamPair, MatchError> {
        let token = tokens[index];

        if let Some(flag) = token.strip_prefix(FLAG_PREFIX) {
            // Only the first '=' splits, so `--key=a=b` pairs 'key' with 'a=b'.
            if let Some((name, value)) = flag.split_once('=') {
                return Ok(ParamPair::flag(name, value, index, 1));
            }

            return match tokens.get(index + 1) {
                Some(next) if !next.starts_with(FLAG_PREFIX) => {
                    Ok(ParamPair::flag(flag, *next, index + 1, 2))
                }
                // The flag is the final token, or is directly followed by another flag.
                _ => Ok(ParamPair::flag(flag, FLAG_PRESENT, index, 1)),
            };
        }

        match self.names.get(index) {
            Some(name) => Ok(ParamPair::positional(*name, token, index)),
            None => Err(MatchError::UnexpectedArgument {
                token: token.to_string(),
                index,
            }),
        }
    }

    /// Match all the tokens, where later matches for the same name replace earlier ones.
    pub(crate) fn match_tokens(&self, tokens: &[&str]) -> Result<RawArguments, MatchError> {
        let mut raw_arguments = RawArguments::default();
        let mut index = 0;

        while index < tokens.len() {
            let ParamPair {
                name,
                value,
                offset,
                consumed,
            } = self.read_param_pair(index, tokens)?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched '{name}' to '{value}' from token {index} (consumed {consumed}).");
            }

            index += consumed;
            raw_arguments.insert(name, (offset, value));
        }

        Ok(raw_arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn raw(pairs: Vec<(&str, usize, &str)>) -> RawArguments {
        pairs
            .into_iter()
            .map(|(name, offset, value)| (name.to_string(), (offset, value.to_string())))
            .collect()
    }

    #[test]
    fn read_param_pair_equals() {
        let token_matcher = TokenMatcher::new(vec!["arg1"]);

        let pair = token_matcher
            .read_param_pair(0, vec!["--arg1=2"].as_slice())
            .unwrap();

        assert_eq!(pair, ParamPair::flag("arg1", "2", 0, 1));
    }

    #[rstest]
    #[case(vec!["--arg1="], "arg1", "", 0, 1)]
    #[case(vec!["--arg1=a=b"], "arg1", "a=b", 0, 1)]
    #[case(vec!["--arg1=a b"], "arg1", "a b", 0, 1)]
    #[case(vec!["--arg1"], "arg1", "True", 0, 1)]
    #[case(vec!["--arg1", "foo"], "arg1", "foo", 1, 2)]
    #[case(vec!["--arg1", "foo", "bar"], "arg1", "foo", 1, 2)]
    #[case(vec!["--arg1", "--arg2"], "arg1", "True", 0, 1)]
    #[case(vec!["--arg1", "--arg2=x"], "arg1", "True", 0, 1)]
    #[case(vec!["--unknown", "x"], "unknown", "x", 1, 2)]
    #[case(vec!["--help"], "help", "True", 0, 1)]
    fn read_param_pair_flag(
        #[case] tokens: Vec<&str>,
        #[case] name: &str,
        #[case] value: &str,
        #[case] offset: usize,
        #[case] consumed: usize,
    ) {
        let token_matcher = TokenMatcher::new(vec!["arg1", "arg2"]);

        let pair = token_matcher
            .read_param_pair(0, tokens.as_slice())
            .unwrap();

        assert_eq!(pair, ParamPair::flag(name, value, offset, consumed));
    }

    #[rstest]
    #[case(0, "arg1")]
    #[case(1, "arg2")]
    fn read_param_pair_positional(#[case] index: usize, #[case] name: &str) {
        let token_matcher = TokenMatcher::new(vec!["arg1", "arg2"]);

        let pair = token_matcher
            .read_param_pair(index, vec!["a", "b"].as_slice())
            .unwrap();

        assert_eq!(pair, ParamPair::positional(name, ["a", "b"][index], index));
    }

    #[test]
    fn read_param_pair_positional_after_flag() {
        let token_matcher = TokenMatcher::new(vec!["arg1", "arg2"]);

        // The flag occupies positions 0 and 1, so 'a' lands on position 2.
        let error = token_matcher
            .read_param_pair(2, vec!["--arg2", "b", "a"].as_slice())
            .unwrap_err();

        assert_eq!(
            error,
            MatchError::UnexpectedArgument {
                token: "a".to_string(),
                index: 2,
            }
        );
    }

    #[test]
    fn read_param_pair_unexpected() {
        let token_matcher = TokenMatcher::new(vec!["arg1"]);

        let error = token_matcher
            .read_param_pair(1, vec!["foo", "bar"].as_slice())
            .unwrap_err();

        assert_eq!(
            error,
            MatchError::UnexpectedArgument {
                token: "bar".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn match_tokens_empty() {
        let token_matcher = TokenMatcher::new(vec!["arg1"]);
        assert_eq!(
            token_matcher.match_tokens(&[]).unwrap(),
            RawArguments::default()
        );
    }

    #[rstest]
    #[case(vec!["test"], raw(vec![("arg1", 0, "test")]))]
    #[case(vec!["a", "b"], raw(vec![("arg1", 0, "a"), ("arg2", 1, "b")]))]
    #[case(vec!["a", "--arg2", "b"], raw(vec![("arg1", 0, "a"), ("arg2", 2, "b")]))]
    #[case(vec!["a", "--arg2=b"], raw(vec![("arg1", 0, "a"), ("arg2", 1, "b")]))]
    #[case(vec!["--arg1", "1", "--arg1", "2"], raw(vec![("arg1", 3, "2")]))]
    #[case(vec!["a", "--arg1=b"], raw(vec![("arg1", 1, "b")]))]
    #[case(vec!["--arg1", "--arg2"], raw(vec![("arg1", 0, "True"), ("arg2", 1, "True")]))]
    #[case(vec!["a", "--help"], raw(vec![("arg1", 0, "a"), ("help", 1, "True")]))]
    #[case(vec!["--other=x", "a"], raw(vec![("other", 0, "x"), ("arg2", 1, "a")]))]
    #[case(vec!["--arg2=b", "a"], raw(vec![("arg2", 1, "a")]))]
    fn match_tokens(#[case] tokens: Vec<&str>, #[case] expected: RawArguments) {
        let token_matcher = TokenMatcher::new(vec!["arg1", "arg2"]);
        assert_eq!(token_matcher.match_tokens(tokens.as_slice()).unwrap(), expected);
    }

    #[rstest]
    #[case(vec!["arg1"], vec!["foo", "bar", "baz"], "bar", 1)]
    #[case(vec!["arg1", "arg2"], vec!["foo", "bar", "baz"], "baz", 2)]
    #[case(vec![], vec!["foo"], "foo", 0)]
    #[case(vec!["arg1"], vec!["--arg1", "x", "foo"], "foo", 2)]
    #[case(vec!["arg1", "arg2"], vec!["--arg2", "b", "a"], "a", 2)]
    #[case(vec!["arg1"], vec!["--other=x", "a"], "a", 1)]
    fn match_tokens_unexpected(
        #[case] names: Vec<&str>,
        #[case] tokens: Vec<&str>,
        #[case] token: &str,
        #[case] index: usize,
    ) {
        let token_matcher = TokenMatcher::new(names);

        let error = token_matcher.match_tokens(tokens.as_slice()).unwrap_err();

        assert_eq!(
            error,
            MatchError::UnexpectedArgument {
                token: token.to_string(),
                index,
            }
        );
    }

    #[test]
    fn match_tokens_equals_random() {
        let token_matcher = TokenMatcher::new(vec![]);

        for _ in 0..100 {
            let name: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..10))
                .map(char::from)
                .collect();
            let value: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(0..10))
                .map(char::from)
                .collect();
            let token = format!("--{name}={value}");

            let pair = token_matcher
                .read_param_pair(0, vec![token.as_str()].as_slice())
                .unwrap();

            assert_eq!(pair, ParamPair::flag(name, value, 0, 1));
        }
    }
}
