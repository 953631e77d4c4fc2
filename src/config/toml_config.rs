use crate::core::{Replacement, ReplacementTable};
use crate::utils::error::{ReplaceError, Result};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Replacement table file:
///
/// ```toml
/// [target]
/// path = "app/_data/calculators.ts"
///
/// [[replacements]]
/// old = "description: 'Long text.',"
/// new = "description: 'Short.',"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub target: Option<TargetConfig>,
    pub replacements: Option<Vec<Replacement>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub path: String,
}

impl TableConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReplaceError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Only `[target].path` gets `${VAR}` expansion; replacement text stays literal.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| ReplaceError::TomlParseError {
            message: e.to_string(),
        })?;

        if let Some(target) = config.target.as_mut() {
            target.path = Self::substitute_env_vars(&target.path)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SITE_ROOT})；未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReplaceError::TomlParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn target_path(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.path.as_str())
    }

    pub fn to_table(&self) -> Result<ReplacementTable> {
        let entries = validate_required_field("replacements", &self.replacements)?;
        Ok(entries.iter().cloned().collect())
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.target_path() {
            validate_path("target.path", path)?;
        }
        super::validate_table(&self.to_table()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_table() {
        let toml_content = r#"
[target]
path = "app/_data/calculators.ts"

[[replacements]]
old = "description: 'Calculate acceleration, initial velocity, final velocity, and time using a = (v - u) / t.',"
new = "description: 'Calculate acceleration, velocity, and time using a = (v - u) / t formula.',"

[[replacements]]
old = "b"
new = "c"
"#;

        let config = TableConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target_path(), Some("app/_data/calculators.ts"));

        let table = config.to_table().unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.entries()[0].new.ends_with("formula.',"));
    }

    #[test]
    fn test_escaped_quote_is_kept_literally() {
        let toml_content = r#"
[[replacements]]
old = "description: 'Newton\\'s law',"
new = "description: 'F = m × a',"
"#;
        let table = TableConfig::from_toml_str(toml_content)
            .unwrap()
            .to_table()
            .unwrap();
        assert_eq!(table.entries()[0].old, r"description: 'Newton\'s law',");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DESC_REPLACER_TEST_ROOT", "/srv/site");

        let toml_content = r#"
[target]
path = "${DESC_REPLACER_TEST_ROOT}/calculators.ts"

[[replacements]]
old = "a"
new = "b"
"#;

        let config = TableConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target_path(), Some("/srv/site/calculators.ts"));

        std::env::remove_var("DESC_REPLACER_TEST_ROOT");
    }

    #[test]
    fn test_env_var_in_replacement_text_is_not_expanded() {
        std::env::set_var("DESC_REPLACER_TEST_UNIT", "kg");

        let toml_content = r#"
[target]
path = "${DESC_REPLACER_TEST_UNIT}.ts"

[[replacements]]
old = "label: `${DESC_REPLACER_TEST_UNIT}`,"
new = "unit: `${DESC_REPLACER_TEST_UNIT}`,"
"#;

        let config = TableConfig::from_toml_str(toml_content).unwrap();
        let table = config.to_table().unwrap();
        assert_eq!(config.target_path(), Some("kg.ts"));
        assert_eq!(table.entries()[0].old, "label: `${DESC_REPLACER_TEST_UNIT}`,");
        assert_eq!(table.entries()[0].new, "unit: `${DESC_REPLACER_TEST_UNIT}`,");

        std::env::remove_var("DESC_REPLACER_TEST_UNIT");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let toml_content = r#"
[target]
path = "${DESC_REPLACER_SURELY_UNSET}/x.ts"

[[replacements]]
old = "a"
new = "b"
"#;
        let config = TableConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target_path(), Some("${DESC_REPLACER_SURELY_UNSET}/x.ts"));
    }

    #[test]
    fn test_table_validation() {
        let missing = "[target]\npath = \"x.ts\"\n";
        assert!(matches!(
            TableConfig::from_toml_str(missing),
            Err(ReplaceError::MissingConfigError { .. })
        ));

        let duplicate = r#"
[[replacements]]
old = "a"
new = "b"

[[replacements]]
old = "a"
new = "c"
"#;
        assert!(matches!(
            TableConfig::from_toml_str(duplicate),
            Err(ReplaceError::DuplicateKeyError { .. })
        ));

        assert!(matches!(
            TableConfig::from_toml_str("[[replacements]]\nold = 1\n"),
            Err(ReplaceError::TomlParseError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[replacements]]\nold = \"long\"\nnew = \"short\"\n")
            .unwrap();

        let config = TableConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.target_path(), None);
        assert_eq!(config.to_table().unwrap().len(), 1);
    }
}
