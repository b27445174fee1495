use crate::error::CfpxError;
use toml::Value;

pub const PROXY_SUFFIX: &str = "-proxy";

/// The program and arguments to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: String, args: Vec<String>) -> Result<Self, CfpxError> {
        if program.is_empty() {
            return Err(CfpxError::UnresolvedCommandName);
        }
        Ok(Invocation { program, args })
    }
}

pub fn extract_command_name(raw: Option<&Value>) -> Result<String, CfpxError> {
    match raw {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(CfpxError::InvalidCommandNameType {
            found: other.type_str(),
        }),
    }
}

/// Configured name wins; otherwise `<cmd>-proxy` invocations resolve to `<cmd>`.
/// Returns an empty string when neither applies.
pub fn executable_name(invoked: &str, configured: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    invoked
        .strip_suffix(PROXY_SUFFIX)
        .map(str::to_string)
        .unwrap_or_default()
}

/// String elements of `command.args`, in order. Anything else is skipped.
pub fn extract_string_args(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    #[test]
    fn configured_name_wins() {
        assert_eq!(executable_name("foo-proxy", "bar"), "bar");
        assert_eq!(executable_name("anything", "foo"), "foo");
    }

    #[test]
    fn proxy_suffix_is_stripped() {
        assert_eq!(executable_name("foo-proxy", ""), "foo");
        assert_eq!(executable_name("/usr/local/bin/git-proxy", ""), "/usr/local/bin/git");
    }

    #[test]
    fn no_suffix_no_name() {
        assert_eq!(executable_name("foo", ""), "");
        assert_eq!(executable_name("foo-proxy-x", ""), "");
        // the suffix alone strips down to nothing
        assert_eq!(executable_name("-proxy", ""), "");
    }

    #[test]
    fn command_name_types() {
        assert_eq!(extract_command_name(None).unwrap(), "");
        assert_eq!(extract_command_name(Some(&s("ls"))).unwrap(), "ls");
        let err = extract_command_name(Some(&Value::Integer(42))).unwrap_err();
        assert!(matches!(err, CfpxError::InvalidCommandNameType { found: "integer" }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn mixed_args_keep_only_strings_in_order() {
        let raw = Value::Array(vec![s("a"), Value::Integer(1), s("b"), Value::Boolean(true)]);
        assert_eq!(extract_string_args(Some(&raw)), vec!["a", "b"]);
    }

    #[test]
    fn non_array_args_are_empty() {
        assert!(extract_string_args(None).is_empty());
        assert!(extract_string_args(Some(&s("a b"))).is_empty());
    }

    #[test]
    fn empty_program_is_rejected() {
        let err = Invocation::new(String::new(), vec!["x".into()]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
