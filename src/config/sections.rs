use serde::Deserialize;
use serde_json::Value;

use super::model::Section;
use crate::error::{ConfigError, Result};

/// 配置文档的顶层结构
///
/// 缺失和显式 `null` 都会得到 `None`。未知字段忽略。
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub path: Option<Value>,
    #[serde(default)]
    pub cookie: Option<Value>,
    #[serde(default)]
    pub header: Option<Value>,
}

impl RawDocument {
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|_| ConfigError::parse_error())?;
        if !value.is_object() {
            return Err(ConfigError::parse_error());
        }
        serde_json::from_value(value).map_err(|_| ConfigError::parse_error())
    }

    pub fn take(&mut self, section: Section) -> Option<Value> {
        match section {
            Section::Body => self.body.take(),
            Section::Path => self.path.take(),
            Section::Cookie => self.cookie.take(),
            Section::Header => self.header.take(),
        }
    }
}

/// 单个部分的原始配置
///
/// 列表保持为 `Value`，在冲突检查之后才做类型提取。
#[derive(Debug, Deserialize)]
pub(crate) struct RawSection {
    #[serde(default, rename = "content-type")]
    pub content_type: Option<Value>,
    #[serde(default)]
    pub include: Option<Value>,
    #[serde(default)]
    pub exclude: Option<Value>,
}

impl RawSection {
    pub fn from_value(section: Section, value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ConfigError::MalformedInput(format!(
                "{section} configuration must be an object"
            )));
        }
        serde_json::from_value(value).map_err(|err| {
            ConfigError::MalformedInput(format!("invalid {section} configuration: {err}"))
        })
    }

    pub fn content_type(&self) -> Result<Option<String>> {
        match &self.content_type {
            None => Ok(None),
            Some(Value::String(content_type)) => Ok(Some(content_type.clone())),
            Some(_) => Err(ConfigError::MalformedInput(
                "content-type under body must be a string".to_string(),
            )),
        }
    }
}

/// 将 include/exclude 列表提取为字符串序列，保留顺序与重复项
pub(crate) fn key_list(section: Section, mode: &str, value: Value) -> Result<Vec<String>> {
    serde_json::from_value(value).map_err(|err| {
        ConfigError::MalformedInput(format!("invalid {mode} list under {section}: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_null_sections_are_absent() {
        let doc = RawDocument::parse(r#"{"path": null, "header": {"include": []}}"#).unwrap();
        assert!(doc.path.is_none());
        assert!(doc.body.is_none());
        assert_eq!(doc.header, Some(json!({"include": []})));
    }

    #[test]
    fn test_non_object_document_is_malformed() {
        for text in ["[]", "\"body\"", "42", "null", "not valid json", ""] {
            let err = RawDocument::parse(text).unwrap_err();
            assert_eq!(err.to_string(), "JSON parse error in configuration");
        }
    }

    #[test]
    fn test_section_must_be_object() {
        let err = RawSection::from_value(Section::Path, json!([["id"]])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_key_list_rejects_non_strings() {
        let err = key_list(Section::Header, "include", json!(["X", 1])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().starts_with("invalid include list under header"));

        let err = key_list(Section::Header, "exclude", json!("X")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_key_list_keeps_order_and_duplicates() {
        let keys = key_list(Section::Cookie, "include", json!(["b", "a", "b"])).unwrap();
        assert_eq!(keys, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_content_type_must_be_string() {
        let raw = RawSection::from_value(Section::Body, json!({"content-type": 5})).unwrap();
        assert_eq!(raw.content_type().unwrap_err().kind(), ErrorKind::MalformedInput);
    }
}
