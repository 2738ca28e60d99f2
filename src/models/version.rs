//! 三段式版本号数据模型
//!
//! `Version` 由任意前缀和 major/minor/patch 三个 16 位数字段组成，
//! 文本形式为 `{prefix}{major}.{minor}.{patch}`，例如 `v1.2.3`、`build-42.1.0`。

use crate::core::error::VersionError;
use crate::services::parser;
use std::fmt;
use std::str::FromStr;

/// 带前缀的三段式版本号
///
/// setter 原地修改并返回 `&mut Self`，支持链式调用：
///
/// ```ignore
/// let mut v = Version::new();
/// v.set_prefix("v").set_major(1).set_minor(2).set_patch(3);
/// assert_eq!(v.format(), "v1.2.3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    prefix: String,
    major: u16,
    minor: u16,
    patch: u16,
}

impl Version {
    /// 创建全零、无前缀的版本号
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(prefix: impl Into<String>, major: u16, minor: u16, patch: u16) -> Self {
        Self {
            prefix: prefix.into(),
            major,
            minor,
            patch,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn major(&self) -> u16 {
        self.major
    }

    pub fn minor(&self) -> u16 {
        self.minor
    }

    pub fn patch(&self) -> u16 {
        self.patch
    }

    /// 设置文本形式中使用的前缀
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    pub fn set_major(&mut self, major: u16) -> &mut Self {
        self.major = major;
        self
    }

    pub fn set_minor(&mut self, minor: u16) -> &mut Self {
        self.minor = minor;
        self
    }

    pub fn set_patch(&mut self, patch: u16) -> &mut Self {
        self.patch = patch;
        self
    }

    /// 格式化为 `{prefix}{major}.{minor}.{patch}`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// 文本形式的 UTF-8 字节
    pub fn to_bytes(&self) -> Vec<u8> {
        self.format().into_bytes()
    }

    /// 解析文本形式，超过三段时按默认策略忽略多余部分
    pub fn parse_text(input: &str) -> Result<Self, VersionError> {
        parser::parse_text(input)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_text(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parser::parse_text(value)
    }
}

impl TryFrom<&[u8]> for Version {
    type Error = VersionError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        parser::parse_bytes(value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
