use std::collections::BTreeMap;

use crate::api::CommandError;
use crate::model::{FromValue, Value};

/// The resolved arguments of a command: parameter name to coerced value.
///
/// Besides the command's declared parameters, this may hold flags the command doesn't declare (ex: `help`), as strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: BTreeMap<String, Value>,
}

impl Arguments {
    /// Create an empty set of arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value for `name`, if given.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a value for `name` was given.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set the value for `name`, replacing any existing value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the name, value pairs ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Extract the value for `name` as a `T`.
    ///
    /// ### Example
    /// ```
    /// # use fncli_builder as fncli;
    /// use fncli::Arguments;
    ///
    /// let arguments = Arguments::from_iter([("count", 3)]);
    ///
    /// assert_eq!(arguments.require::<u8>("count").unwrap(), 3);
    /// assert!(arguments.require::<u8>("missing").is_err());
    /// ```
    pub fn require<T: FromValue>(&self, name: &str) -> Result<T, CommandError> {
        match self.values.get(name) {
            Some(value) => Ok(T::from_value(value)?),
            None => Err(CommandError::new(format!("Missing argument '{name}'."))),
        }
    }

    /// Extract the value for `name` as a `T`, falling back to `default` when not given.
    pub fn get_or<T: FromValue>(&self, name: &str, default: &Value) -> Result<T, CommandError> {
        let value = self.values.get(name).unwrap_or(default);
        Ok(T::from_value(value)?)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn create_empty() {
        let arguments = Arguments::new();
        assert!(arguments.is_empty());
        assert_eq!(arguments.len(), 0);
        assert_eq!(arguments.get("x"), None);
        assert!(!arguments.contains("x"));
    }

    #[test]
    fn insert_replaces() {
        let mut arguments = Arguments::new();
        arguments.insert("x", 1);
        arguments.insert("x", "two");

        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments.get("x"), Some(&Value::Str("two".to_string())));
    }

    #[test]
    fn iter_ordered() {
        let arguments = Arguments::from_iter([("b", Value::Int(2)), ("a", Value::Bool(true))]);

        assert_eq!(
            arguments.iter().collect::<Vec<_>>(),
            vec![("a", &Value::Bool(true)), ("b", &Value::Int(2))]
        );
    }

    #[rstest]
    #[case(Value::Int(12), 12)]
    #[case(Value::Str("12".to_string()), 12)]
    fn require_int(#[case] value: Value, #[case] expected: i32) {
        let arguments = Arguments::from_iter([("n", value)]);
        assert_eq!(arguments.require::<i32>("n").unwrap(), expected);
    }

    #[test]
    fn require_missing() {
        let arguments = Arguments::new();
        assert_eq!(
            arguments.require::<String>("name").unwrap_err(),
            CommandError::new("Missing argument 'name'.")
        );
    }

    #[test]
    fn require_invalid() {
        let arguments = Arguments::from_iter([("n", "abc")]);
        let error = arguments.require::<i32>("n").unwrap_err();
        assert_eq!(error.to_string(), "Cannot extract i32 from 'abc'.");
    }

    #[test]
    fn require_option() {
        let arguments = Arguments::from_iter([("a", Value::None), ("b", Value::Int(1))]);
        assert_eq!(arguments.require::<Option<i64>>("a").unwrap(), None);
        assert_eq!(arguments.require::<Option<i64>>("b").unwrap(), Some(1));
    }

    #[rstest]
    #[case(vec![], false)]
    #[case(vec![("flag", Value::Bool(true))], true)]
    #[case(vec![("flag", Value::Str("True".to_string()))], true)]
    fn get_or(#[case] pairs: Vec<(&str, Value)>, #[case] expected: bool) {
        let arguments = Arguments::from_iter(pairs);
        assert_eq!(
            arguments
                .get_or::<bool>("flag", &Value::Bool(false))
                .unwrap(),
            expected
        );
    }
}
