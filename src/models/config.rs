use serde::{Deserialize, Serialize};
use std::path::Path;

/// 超过三段时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentPolicy {
    /// 忽略第三段之后的内容（兼容旧行为）
    #[default]
    Lenient,
    /// 拒绝超过三段的输入
    Strict,
}

/// 版本号解析配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    #[serde(default)]
    pub segment_policy: SegmentPolicy,
}

impl ParseOptions {
    /// 严格模式：只接受恰好三段
    pub fn strict() -> Self {
        Self {
            segment_policy: SegmentPolicy::Strict,
        }
    }

    /// 从 TOML 文本加载配置，缺省字段使用默认值
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("解析配置失败: {}", e))
    }

    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("读取配置文件失败: {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
    }
}

/// 日志级别枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 日志输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Console,
    File,
    Both,
}

/// 日志配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub output: LogOutput,
    /// 日志目录，未设置时使用 ~/.prefixver/logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_options_are_lenient() {
        assert_eq!(ParseOptions::default().segment_policy, SegmentPolicy::Lenient);
        assert_eq!(ParseOptions::strict().segment_policy, SegmentPolicy::Strict);
    }

    #[test]
    fn test_options_from_toml() {
        let opts = ParseOptions::from_toml_str(r#"segment_policy = "strict""#).unwrap();
        assert_eq!(opts, ParseOptions::strict());

        // 空文档使用默认值
        let opts = ParseOptions::from_toml_str("").unwrap();
        assert_eq!(opts, ParseOptions::default());

        assert!(ParseOptions::from_toml_str(r#"segment_policy = "loose""#).is_err());
    }

    #[test]
    fn test_options_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prefixver.toml");
        fs::write(&file_path, "segment_policy = \"lenient\"\n").unwrap();

        let opts = ParseOptions::from_toml_file(&file_path).unwrap();
        assert_eq!(opts.segment_policy, SegmentPolicy::Lenient);

        let missing = temp_dir.path().join("missing.toml");
        let err = ParseOptions::from_toml_file(&missing).unwrap_err();
        assert!(err.to_string().contains("读取配置文件失败"));
    }

    #[test]
    fn test_log_config_from_toml() {
        let config: LogConfig = toml::from_str(
            r#"
level = "debug"
format = "json"
output = "both"
file_path = "/tmp/prefixver-logs"
"#,
        )
        .unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.output, LogOutput::Both);
        assert_eq!(config.file_path.as_deref(), Some("/tmp/prefixver-logs"));

        let config: LogConfig = toml::from_str("").unwrap();
        assert_eq!(config, LogConfig::default());
    }
}
