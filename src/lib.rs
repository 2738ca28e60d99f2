//! 带前缀的三段式版本号
//!
//! `Version` 表示 `{prefix}{major}.{minor}.{patch}` 形式的版本号，例如 `v1.2.3`、
//! `build-42.1.0`。提供字段访问、链式 setter、文本/JSON 双向转换以及 serde 集成。

pub mod core;
pub mod models;
pub mod services;

pub use models::{LogConfig, LogFormat, LogLevel, LogOutput, ParseOptions, SegmentPolicy, Version};
pub use services::{parse_text, VersionParser};

// 重新导出常用类型
pub use self::core::{init_logger, update_log_level, Result, Segment, VersionError};
