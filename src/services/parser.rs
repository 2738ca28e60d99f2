use crate::core::error::{Result, Segment, VersionError};
use crate::models::config::{ParseOptions, SegmentPolicy};
use crate::models::version::Version;
use once_cell::sync::Lazy;
use regex::Regex;

/// 第一段末尾的 1-4 位数字即 major，其前面的全部内容为前缀。
///
/// 上限 4 位是已知限制：`10000.0.0` 会被拆成前缀 `1` 和 major `0`。
static MAJOR_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{1,4}$").expect("invalid major suffix regex"));

/// 版本号解析器
#[derive(Debug, Clone, Default)]
pub struct VersionParser {
    options: ParseOptions,
}

impl VersionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// 解析 `{prefix}{major}.{minor}.{patch}` 文本
    pub fn parse(&self, input: &str) -> Result<Version> {
        let segments: Vec<&str> = input.split('.').collect();
        if segments.len() < 3 {
            tracing::debug!(input = %input, found = segments.len(), "版本号段数不足");
            return Err(VersionError::SegmentCount {
                found: segments.len(),
            });
        }
        if segments.len() > 3 && self.options.segment_policy == SegmentPolicy::Strict {
            tracing::debug!(input = %input, found = segments.len(), "严格模式拒绝多余的段");
            return Err(VersionError::TooManySegments {
                found: segments.len(),
            });
        }

        let (prefix, major_text) = split_prefix(segments[0]);
        let major = parse_segment(Segment::Major, major_text)?;
        let minor = parse_segment(Segment::Minor, segments[1])?;
        let patch = parse_segment(Segment::Patch, segments[2])?;

        let version = Version::with(prefix, major, minor, patch);
        tracing::trace!(input = %input, version = %version, "版本号解析完成");
        Ok(version)
    }

    /// 解析 UTF-8 字节形式的文本
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Version> {
        self.parse(std::str::from_utf8(input)?)
    }
}

/// 使用默认配置解析文本
pub fn parse_text(input: &str) -> Result<Version> {
    VersionParser::new().parse(input)
}

/// 使用默认配置解析字节
pub fn parse_bytes(input: &[u8]) -> Result<Version> {
    VersionParser::new().parse_bytes(input)
}

/// 拆分第一段为 (前缀, major 文本)；末尾没有数字时 major 文本为空
fn split_prefix(first: &str) -> (&str, &str) {
    match MAJOR_SUFFIX_REGEX.find(first) {
        Some(m) => (&first[..m.start()], m.as_str()),
        None => (first, ""),
    }
}

/// 仅接受 ASCII 数字，拒绝空串、符号和超出 u16 的值
fn parse_segment(segment: Segment, text: &str) -> Result<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(segment = %segment, value = %text, "数字段格式无效");
        return Err(VersionError::numeric(segment, text));
    }
    text.parse::<u16>().map_err(|_| {
        tracing::debug!(segment = %segment, value = %text, "数字段超出范围");
        VersionError::numeric(segment, text)
    })
}
