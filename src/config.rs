use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// 付款指令 CSV 导出路径
    pub csv_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing EnvFilter 语法，如 "info" 或 "utility_iou=debug"
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: OutputFormat::Text,
                csv_path: None,
            },
            log: LogConfig {
                filter: "warn".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> iou.toml (可选) -> IOU_ 前缀环境变量
    ///
    /// 设置文件名可用 IOU_SETTINGS 覆盖，环境变量层级用 "__" 分隔，
    /// 例如 IOU_LOG__FILTER=debug。
    pub fn load() -> Result<Self, ConfigError> {
        let settings_file = std::env::var("IOU_SETTINGS").unwrap_or_else(|_| "iou".to_string());

        Self::defaults()?
            .add_source(File::with_name(&settings_file).required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// IOU_ 前缀之后用 "__" 分隔层级
    fn environment() -> Environment {
        Environment::with_prefix("IOU").prefix_separator("_").separator("__")
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("output.format", "text")?
            .set_default("log.filter", defaults.log.filter)
    }
}
