//! Deployment environment selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::UnknownEnvironment;

/// Deployment environment a service is configured for.
///
/// Each variant carries a stable numeric id and a lowercase name; the
/// lowercase name is the serialized form in configuration documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Stable numeric id for the environment.
    pub const fn id(self) -> u8 {
        match self {
            Self::Development => 1,
            Self::Staging => 2,
            Self::Production => 3,
        }
    }

    /// Lowercase name used for serialization.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// All recognized environments.
    pub const ALL: [Self; 3] = [Self::Development, Self::Staging, Self::Production];
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    /// Parses the lowercase environment name. Unrecognized values are an
    /// error naming the bad value, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(UnknownEnvironment {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_ids() {
        assert_eq!(Environment::Development.id(), 1);
        assert_eq!(Environment::Staging.id(), 2);
        assert_eq!(Environment::Production.id(), 3);
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_parse_lowercase_names() {
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        let err = "qa".parse::<Environment>().unwrap_err();
        assert_eq!(err.value, "qa");
        assert!(err.to_string().contains("qa"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("DEVELOPMENT".parse::<Environment>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let yaml = serde_yaml::to_string(&Environment::Staging).unwrap();
        assert_eq!(yaml.trim(), "staging");

        let env: Environment = serde_yaml::from_str("production").unwrap();
        assert_eq!(env, Environment::Production);
    }
}
