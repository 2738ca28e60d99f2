//! 统一错误类型定义
//!
//! 使用 `thiserror` 定义版本号解析的所有错误类型，可直接转换为 `anyhow::Error`。

use std::fmt;
use thiserror::Error;

/// 版本号中的数字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Major,
    Minor,
    Patch,
}

impl Segment {
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Major => "major",
            Segment::Minor => "minor",
            Segment::Patch => "patch",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 版本号解析的统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// 点分段数不足三段
    #[error("版本号需要三个以点分隔的段，实际只有 {found} 段")]
    SegmentCount { found: usize },

    /// 严格模式下点分段数超过三段
    #[error("版本号只允许三个以点分隔的段，实际有 {found} 段")]
    TooManySegments { found: usize },

    /// 数字段不是合法的 16 位无符号十进制整数
    #[error("{segment} 段不是 0-65535 范围内的十进制整数: {value:?}")]
    NumericParse { segment: Segment, value: String },

    /// JSON 输入过短，无法包含引号和内容
    #[error("JSON 字符串过短: {len} 字节（至少需要 3 字节）")]
    InputTooShort { len: usize },

    /// 输入字节不是合法的 UTF-8
    #[error("输入不是合法的 UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// 便于与现有代码集成的类型别名
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    pub(crate) fn numeric(segment: Segment, value: impl Into<String>) -> Self {
        Self::NumericParse {
            segment,
            value: value.into(),
        }
    }
}
