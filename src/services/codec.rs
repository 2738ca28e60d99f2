//! 文本与 JSON 编解码适配
//!
//! 提供两组 marshal/unmarshal 钩子，并为 `Version` 实现 serde 的
//! `Serialize`/`Deserialize`（序列化为字符串），可直接嵌入 JSON、TOML 等文档。
//! 核心的解析与格式化逻辑位于 `parser` 与 `models::version`，与具体框架无关。

use crate::core::error::{Result, VersionError};
use crate::models::version::Version;
use crate::services::parser::{self, VersionParser};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

/// JSON 输入的最小长度：两个引号加至少一个字符
const MIN_JSON_LEN: usize = 3;

/// 编码为 JSON 字符串字面量，前缀中的引号、反斜杠等会被转义
pub fn encode_json(version: &Version) -> Vec<u8> {
    serde_json::Value::String(version.format())
        .to_string()
        .into_bytes()
}

/// 解码 JSON 字符串字面量
///
/// 首尾均为引号的合法 JSON 字符串先反转义再解析；否则直接去掉首尾各一个字节，
/// 不校验它们是否为引号。
pub fn decode_json(parser: &VersionParser, input: &[u8]) -> Result<Version> {
    let text = json_interior(input)?;
    parser.parse(&text)
}

fn json_interior(input: &[u8]) -> Result<Cow<'_, str>> {
    if input.len() < MIN_JSON_LEN {
        tracing::debug!(len = input.len(), "JSON 输入过短");
        return Err(VersionError::InputTooShort { len: input.len() });
    }

    let quoted = input[0] == b'"' && input[input.len() - 1] == b'"';
    if quoted {
        if let Ok(decoded) = serde_json::from_slice::<String>(input) {
            return Ok(Cow::Owned(decoded));
        }
    }

    let interior = &input[1..input.len() - 1];
    Ok(Cow::Borrowed(std::str::from_utf8(interior)?))
}

impl Version {
    /// JSON 字符串形式的字节
    pub fn to_json(&self) -> Vec<u8> {
        encode_json(self)
    }

    /// 从 JSON 字符串字面量解析
    pub fn from_json(input: &[u8]) -> Result<Self> {
        decode_json(&VersionParser::new(), input)
    }

    /// 文本 marshal 钩子
    pub fn marshal_text(&self) -> Vec<u8> {
        self.to_bytes()
    }

    /// 文本 unmarshal 钩子，失败时保持原值不变
    pub fn unmarshal_text(&mut self, input: &[u8]) -> Result<()> {
        *self = parser::parse_bytes(input)?;
        Ok(())
    }

    /// JSON marshal 钩子
    pub fn marshal_json(&self) -> Vec<u8> {
        self.to_json()
    }

    /// JSON unmarshal 钩子，失败时保持原值不变
    pub fn unmarshal_json(&mut self, input: &[u8]) -> Result<()> {
        *self = Self::from_json(input)?;
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parser::parse_text(&text).map_err(de::Error::custom)
    }
}
