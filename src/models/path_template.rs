//! Endpoint path templates such as `/chat/{room}/{user}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed endpoint path with its `{variable}` names in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathTemplate {
    raw: String,
    variables: Vec<String>,
}

impl PathTemplate {
    /// Parse a path template.
    ///
    /// Fails with a human-readable reason on unbalanced braces, nested braces,
    /// or empty variable names.
    pub fn parse(path: &str) -> Result<Self, String> {
        let mut variables = Vec::new();
        let mut current: Option<String> = None;

        for (idx, ch) in path.char_indices() {
            match ch {
                '{' => {
                    if current.is_some() {
                        return Err(format!("nested '{{' at offset {idx}"));
                    }
                    current = Some(String::new());
                }
                '}' => {
                    let name = current
                        .take()
                        .ok_or_else(|| format!("unmatched '}}' at offset {idx}"))?;
                    let name = name.trim().to_string();
                    if name.is_empty() {
                        return Err(format!("empty path parameter at offset {idx}"));
                    }
                    if !variables.contains(&name) {
                        variables.push(name);
                    }
                }
                c => {
                    if let Some(name) = current.as_mut() {
                        name.push(c);
                    }
                }
            }
        }

        if current.is_some() {
            return Err("unclosed '{'".to_string());
        }

        Ok(Self {
            raw: path.to_string(),
            variables,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
