use crate::models::config::{LogConfig, LogFormat, LogLevel, LogOutput};
use std::sync::OnceLock;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt,
    layer::{Layered, SubscriberExt},
    reload::{self, Handle},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// 全局日志级别 reload handle
static LOG_LEVEL_HANDLE: OnceLock<Handle<EnvFilter, Registry>> = OnceLock::new();

type FilteredRegistry = Layered<reload::Layer<EnvFilter, Registry>, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync + 'static>;

/// 初始化日志系统
///
/// 库本身只通过 `tracing` 宏输出日志，由调用方决定是否安装订阅者。
/// 日志级别可以通过 `update_log_level` 动态调整；格式和输出目标只在初始化时生效。
/// 重复初始化返回错误。
pub fn init_logger(config: &LogConfig) -> anyhow::Result<()> {
    if LOG_LEVEL_HANDLE.get().is_some() {
        anyhow::bail!("日志系统已初始化，不能重复初始化");
    }

    let filter = create_env_filter(config.level);
    let (filter_layer, reload_handle) = reload::Layer::new(filter);

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if matches!(config.output, LogOutput::Console | LogOutput::Both) {
        layers.push(create_console_layer(config.format));
    }
    if matches!(config.output, LogOutput::File | LogOutput::Both) {
        layers.push(create_file_layer(config.format, config.file_path.as_deref())?);
    }

    Registry::default()
        .with(filter_layer)
        .with(layers)
        .try_init()
        .map_err(|e| anyhow::anyhow!("安装日志订阅者失败: {}", e))?;

    // 订阅者安装成功后才记录 handle，失败的初始化可以重试
    if LOG_LEVEL_HANDLE.set(reload_handle).is_err() {
        anyhow::bail!("日志系统已初始化，不能重复初始化");
    }

    tracing::info!(
        level = config.level.as_str(),
        format = ?config.format,
        output = ?config.output,
        file_path = ?config.file_path,
        "日志系统初始化完成"
    );

    Ok(())
}

/// 创建环境过滤器
fn create_env_filter(level: LogLevel) -> EnvFilter {
    // 优先使用 RUST_LOG，例如 RUST_LOG=prefixver=trace
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prefixver={}", level.as_str())))
}

fn create_console_layer(format: LogFormat) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(cfg!(debug_assertions))
        .with_thread_ids(false);
    match format {
        LogFormat::Text => layer.with_ansi(true).boxed(),
        LogFormat::Json => layer.json().with_ansi(false).boxed(),
    }
}

fn create_file_layer(format: LogFormat, file_path: Option<&str>) -> anyhow::Result<BoxedLayer> {
    let log_dir = get_log_dir(file_path)?;
    let file_appender = rolling::daily(log_dir, "prefixver");
    let (non_blocking, guard) = non_blocking(file_appender);

    // guard 需要存活到进程结束，否则缓冲区不会被刷新
    Box::leak(Box::new(guard));

    let layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false);
    Ok(match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().with_thread_ids(true).boxed(),
    })
}

/// 获取日志目录
fn get_log_dir(file_path: Option<&str>) -> anyhow::Result<std::path::PathBuf> {
    let dir = match file_path {
        Some(path) => std::path::PathBuf::from(path),
        None => dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("无法获取用户主目录"))?
            .join(".prefixver")
            .join("logs"),
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 动态更新日志级别（热重载）
pub fn update_log_level(new_level: LogLevel) -> anyhow::Result<()> {
    let handle = LOG_LEVEL_HANDLE
        .get()
        .ok_or_else(|| anyhow::anyhow!("日志系统未初始化"))?;

    handle
        .reload(create_env_filter(new_level))
        .map_err(|e| anyhow::anyhow!("重载日志级别失败: {}", e))?;

    tracing::info!(new_level = new_level.as_str(), "日志级别已动态更新");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_log_dir_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("logs");
        let dir = get_log_dir(target.to_str()).unwrap();
        assert_eq!(dir, target);
        assert!(dir.is_dir());
    }

    // 全局订阅者只能安装一次，生命周期相关断言集中在同一个测试中
    #[test]
    fn test_logger_lifecycle() {
        assert!(update_log_level(LogLevel::Debug).is_err());

        let temp_dir = TempDir::new().unwrap();

        // 日志目录无法创建时初始化失败，且不影响之后的初始化
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let broken = LogConfig {
            output: LogOutput::File,
            file_path: blocker.join("logs").to_str().map(str::to_string),
            ..LogConfig::default()
        };
        assert!(init_logger(&broken).is_err());
        assert!(update_log_level(LogLevel::Debug).is_err());

        let config = LogConfig {
            level: LogLevel::Debug,
            format: LogFormat::Json,
            output: LogOutput::Both,
            file_path: temp_dir.path().to_str().map(str::to_string),
        };
        init_logger(&config).unwrap();

        let err = init_logger(&config).unwrap_err();
        assert!(err.to_string().contains("不能重复初始化"));

        update_log_level(LogLevel::Trace).unwrap();
        assert!(crate::services::parser::parse_text("1.2").is_err());
    }
}
