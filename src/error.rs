use bigdecimal::BigDecimal;
use std::path::PathBuf;
use thiserror::Error;

/// 结算核心错误
#[derive(Debug, Error)]
pub enum SettleError {
    #[error("configuration contains no people; nothing to split")]
    EmptyConfiguration,

    #[error("invalid payment {amount} by {person} for {utility}: {reason}")]
    InvalidPayment {
        person: String,
        utility: String,
        amount: BigDecimal,
        reason: PaymentDefect,
    },
}

/// 付款金额不合法的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentDefect {
    #[error("amount is negative")]
    Negative,
    #[error("amount has more than two decimal places")]
    SubCent,
}

/// 配置文件读取错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("config file {0} could not be found")]
    ConfigNotFound(PathBuf),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{person}/{utility}: {value} is not a decimal amount")]
    Amount {
        person: String,
        utility: String,
        value: String,
    },
}

/// 报告输出错误
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 命令行层统一错误
#[derive(Debug, Error)]
pub enum IouError {
    #[error(transparent)]
    Settle(#[from] SettleError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("settings error: {0}")]
    Settings(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, IouError>;
