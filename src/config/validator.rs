use serde_json::Value;

use super::model::{Config, FieldFilter, Section, URLENCODED};
use super::sections::{key_list, RawDocument, RawSection};
use crate::error::{ConfigError, Result};

/// 过滤配置校验器
///
/// 按 body、path、cookie、header 的固定顺序处理各部分，遇到第一个错误即返回。
pub struct ConfigValidator;

impl ConfigValidator {
    /// 以默认值为起点解析配置
    pub fn parse(text: &str) -> Result<Config> {
        Self::parse_with_defaults(text, Config::default())
    }

    /// 解析宿主传入的原始字节
    pub fn parse_bytes(bytes: &[u8]) -> Result<Config> {
        let text = std::str::from_utf8(bytes).map_err(|_| {
            ConfigError::MalformedInput("configuration is not valid UTF-8".to_string())
        })?;
        Self::parse(text)
    }

    /// 以调用方提供的默认值为起点解析配置
    ///
    /// 输入中缺失、为 `null` 或既没有 include 也没有 exclude 的部分保留 `defaults` 中的值。
    pub fn parse_with_defaults(text: &str, defaults: Config) -> Result<Config> {
        match Self::build(text, defaults) {
            Ok(config) => {
                tracing::info!("{}", config.diagnostic());
                Ok(config)
            }
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), error = %err, "rejected filter configuration");
                Err(err)
            }
        }
    }

    fn build(text: &str, mut config: Config) -> Result<Config> {
        let mut document = RawDocument::parse(text)?;

        for section in Section::ALL {
            let Some(value) = document.take(section) else {
                continue;
            };
            let raw = RawSection::from_value(section, value)?;
            if section == Section::Body {
                config.content_type = Self::validate_content_type(&raw)?;
            }
            if let Some(filter) = Self::validate_field(section, raw)? {
                *config.filter_mut(section) = filter;
            }
        }

        Ok(config)
    }

    fn validate_content_type(raw: &RawSection) -> Result<String> {
        let content_type = raw.content_type()?.ok_or(ConfigError::MissingField)?;
        if content_type != URLENCODED {
            return Err(ConfigError::UnsupportedValue { content_type });
        }
        Ok(content_type)
    }

    /// 校验单个部分的 include/exclude
    ///
    /// 两者都不存在时返回 `None`，表示保持原值。
    fn validate_field(section: Section, raw: RawSection) -> Result<Option<FieldFilter>> {
        match (raw.include, raw.exclude) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingKeys {
                section: section.key(),
            }),
            (Some(include), None) => {
                let keys = Self::keys(section, "include", include)?;
                Ok(Some(FieldFilter::include(keys)))
            }
            (None, Some(exclude)) => {
                let keys = Self::keys(section, "exclude", exclude)?;
                Ok(Some(FieldFilter::exclude(keys)))
            }
            (None, None) => {
                tracing::debug!(section = %section, "no include or exclude list, keeping defaults");
                Ok(None)
            }
        }
    }

    fn keys(section: Section, mode: &str, value: Value) -> Result<Vec<String>> {
        let keys = key_list(section, mode, value)?;
        tracing::debug!(section = %section, mode, count = keys.len(), "section filter parsed");
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn parse(value: Value) -> Result<Config> {
        ConfigValidator::parse(&value.to_string())
    }

    #[test]
    fn test_empty_document_keeps_defaults() {
        let config = parse(json!({})).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_body_is_checked_before_other_sections() {
        let err = parse(json!({
            "body": {"include": ["a"]},
            "header": {"include": ["X"], "exclude": ["Y"]}
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_content_type_checked_before_conflict() {
        let err = parse(json!({
            "body": {"content-type": "text/plain", "include": [], "exclude": []}
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedValue {
                content_type: "text/plain".to_string()
            }
        );
    }

    #[test]
    fn test_conflict_checked_before_list_types() {
        let err = parse(json!({"cookie": {"include": [1], "exclude": "x"}})).unwrap_err();
        assert_eq!(err, ConfigError::ConflictingKeys { section: "cookie" });
    }

    #[test]
    fn test_null_include_counts_as_absent() {
        let config = parse(json!({"path": {"include": null, "exclude": ["id"]}})).unwrap();
        assert_eq!(config.path, FieldFilter::exclude(vec!["id".to_string()]));
    }

    #[test]
    fn test_body_without_lists_only_sets_content_type() {
        let config = parse(json!({"body": {"content-type": URLENCODED}})).unwrap();
        assert_eq!(config.content_type, URLENCODED);
        assert_eq!(config.body, FieldFilter::default());
    }

    #[test]
    fn test_defaults_survive_absent_sections() {
        let defaults = Config {
            header: FieldFilter::exclude(vec!["Authorization".to_string()]),
            ..Config::default()
        };
        let config = ConfigValidator::parse_with_defaults(
            &json!({"path": {"include": ["id"]}}).to_string(),
            defaults,
        )
        .unwrap();
        assert_eq!(config.header.keys, vec!["Authorization"]);
        assert!(!config.header.include);
        assert_eq!(config.path.keys, vec!["id"]);
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = ConfigValidator::parse_bytes(&[0x7b, 0xff, 0x7d]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MalformedInput("configuration is not valid UTF-8".to_string())
        );

        let config = ConfigValidator::parse_bytes(br#"{"header":{"exclude":["Cookie"]}}"#).unwrap();
        assert!(!config.header.include);
    }
}
