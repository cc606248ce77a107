use std::collections::HashMap;

/// Resolves `$VARIABLE` references in filename templates
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Resolve every registered `$VARIABLE` reference in the input
    pub fn parse(&self, input: &str) -> String {
        let mut result = input.to_string();

        for (key, value) in &self.variables {
            let pattern = format!("${}", key);
            result = result.replace(&pattern, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_identifier_template() {
        let mut tpl = Tpl::new();
        tpl.register("NAME", "My-Project");
        tpl.register("VERSION", "42");

        assert_eq!(tpl.parse("$NAME-v$VERSION"), "My-Project-v42");
    }

    #[test]
    fn test_unregistered_variables_pass_through() {
        let mut tpl = Tpl::new();
        tpl.register("VERSION", "7");

        assert_eq!(tpl.parse("$NAME-v$VERSION"), "$NAME-v7");
    }
}
