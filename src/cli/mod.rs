use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

use crate::config::{Config, ConfigValidator};
use crate::schema::{filter_config_schema, Schema};

/// 从文件读取配置文本，未指定路径时读取标准输入
pub fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

pub fn validate_source(path: Option<&Path>) -> anyhow::Result<Config> {
    let source = match path {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    };
    let text = read_source(path).with_context(|| format!("failed to read `{source}`"))?;
    let config = ConfigValidator::parse(&text)
        .with_context(|| format!("invalid filter configuration in `{source}`"))?;
    Ok(config)
}

pub fn schema_export(pretty: bool) -> anyhow::Result<String> {
    let schema: Schema = filter_config_schema();
    let content = if pretty {
        serde_json::to_string_pretty(&schema)?
    } else {
        serde_json::to_string(&schema)?
    };
    Ok(content)
}
