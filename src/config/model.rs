use std::fmt;

use serde::{Deserialize, Serialize};

/// 唯一支持的 body 编码
pub const URLENCODED: &str = "application/x-www-form-urlencoded";

/// 成功解析后诊断信息的前缀
pub const CONTEXT_PREFIX: &str = "config parsed into context ->";

/// 请求中可配置过滤的部分
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Body,
    Path,
    Cookie,
    Header,
}

impl Section {
    /// 固定的处理顺序
    pub const ALL: [Section; 4] = [Section::Body, Section::Path, Section::Cookie, Section::Header];

    /// 配置 JSON 中的顶层字段名
    pub fn key(self) -> &'static str {
        match self {
            Section::Body => "body",
            Section::Path => "path",
            Section::Cookie => "cookie",
            Section::Header => "header",
        }
    }

    /// 诊断输出中使用的名称
    pub fn label(self) -> &'static str {
        match self {
            Section::Body => "body",
            Section::Path => "path",
            Section::Cookie => "cookies",
            Section::Header => "headers",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 单个部分的过滤规则
///
/// `include` 为 true 时 `keys` 是白名单，否则是黑名单。
/// `keys` 保留配置中的原始顺序，不去重。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub include: bool,
    #[serde(default)]
    pub keys: Vec<String>,
}

impl FieldFilter {
    pub fn include(keys: Vec<String>) -> Self {
        Self {
            include: true,
            keys,
        }
    }

    pub fn exclude(keys: Vec<String>) -> Self {
        Self {
            include: false,
            keys,
        }
    }

    pub fn mode(&self) -> &'static str {
        if self.include {
            "include"
        } else {
            "exclude"
        }
    }
}

impl Default for FieldFilter {
    fn default() -> Self {
        Self::include(Vec::new())
    }
}

/// 归一化后的过滤配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 仅在存在 body 配置时有值
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub body: FieldFilter,
    #[serde(default)]
    pub path: FieldFilter,
    #[serde(default)]
    pub cookie: FieldFilter,
    #[serde(default)]
    pub header: FieldFilter,
}

impl Config {
    pub fn filter(&self, section: Section) -> &FieldFilter {
        match section {
            Section::Body => &self.body,
            Section::Path => &self.path,
            Section::Cookie => &self.cookie,
            Section::Header => &self.header,
        }
    }

    pub fn filter_mut(&mut self, section: Section) -> &mut FieldFilter {
        match section {
            Section::Body => &mut self.body,
            Section::Path => &mut self.path,
            Section::Cookie => &mut self.cookie,
            Section::Header => &mut self.header,
        }
    }

    /// 带前缀的诊断信息，解析成功后写入日志
    pub fn diagnostic(&self) -> String {
        format!("{CONTEXT_PREFIX}{self}")
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_config(self))
    }
}

fn render_filter(filter: &FieldFilter) -> String {
    let mut rendered = format!("{}: ", filter.mode());
    for key in &filter.keys {
        rendered.push_str(key);
        rendered.push_str(", ");
    }
    rendered
}

/// 渲染配置用于诊断
///
/// 每个 key 后都跟 `", "`，包括最后一个，与历史日志格式保持一致。
pub fn render_config(config: &Config) -> String {
    let mut rendered = format!("config: {}", config.content_type);
    for section in [Section::Body, Section::Path, Section::Header, Section::Cookie] {
        rendered.push('\n');
        rendered.push_str(section.label());
        rendered.push(' ');
        rendered.push_str(&render_filter(config.filter(section)));
    }
    rendered
}
