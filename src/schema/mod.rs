use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{Section, URLENCODED};

/// Schema 类型枚举
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SchemaKind {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "const")]
    Const { value: String },
    #[serde(rename = "array")]
    Array { items: Box<Schema> },
    #[serde(rename = "object")]
    Object {
        properties: BTreeMap<String, Schema>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
        #[serde(default = "Schema::allow_additional")]
        additional: bool,
    },
}

/// Schema 定义
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            name: None,
            kind,
            description: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn allow_additional() -> bool {
        true
    }
}

fn key_list(description: &str) -> Schema {
    Schema::new(SchemaKind::Array {
        items: Box::new(Schema::new(SchemaKind::String)),
    })
    .with_description(description)
}

fn section_schema(section: Section) -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert(
        "include".to_string(),
        key_list("allow-list of keys; cannot be combined with exclude"),
    );
    properties.insert(
        "exclude".to_string(),
        key_list("deny-list of keys; cannot be combined with include"),
    );

    let mut required = Vec::new();
    if section == Section::Body {
        properties.insert(
            "content-type".to_string(),
            Schema::new(SchemaKind::Const {
                value: URLENCODED.to_string(),
            }),
        );
        required.push("content-type".to_string());
    }

    Schema::new(SchemaKind::Object {
        properties,
        required,
        additional: true,
    })
    .with_name(section.key())
}

/// 过滤配置文档的结构描述，仅用于导出文档
pub fn filter_config_schema() -> Schema {
    let properties = Section::ALL
        .into_iter()
        .map(|section| (section.key().to_string(), section_schema(section)))
        .collect();

    Schema::new(SchemaKind::Object {
        properties,
        required: Vec::new(),
        additional: true,
    })
    .with_name("request-filter")
    .with_description("request parts to include in or exclude from inspection")
}
