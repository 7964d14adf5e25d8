use serde::{Deserialize, Serialize};

/// Configuration for the database connection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite connection URL, the database file is created if it doesn't exist.
    pub url: String,
    /// Defines a maximum number of connections allowed.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://remindr.db".to_string(),
            max_connections: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DatabaseConfig;
    use insta::assert_toml_snapshot;

    #[test]
    fn serialization() {
        let config = DatabaseConfig::default();
        assert_toml_snapshot!(config, @r###"
        url = 'sqlite://remindr.db'
        max_connections = 10
        "###);
    }

    #[test]
    fn deserialization() {
        let config: DatabaseConfig = toml::from_str(
            r#"
        url = 'sqlite:///data/remindr.db'
        max_connections = 3
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            DatabaseConfig {
                url: "sqlite:///data/remindr.db".to_string(),
                max_connections: 3,
            }
        );
    }
}
