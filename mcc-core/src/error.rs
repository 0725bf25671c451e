//! 统一错误类型模块
//!
//! 定义应用中使用的所有错误类型，支持详细的错误上下文和链式错误追踪。

use std::path::Path;
use thiserror::Error;

/// 应用统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// Profile 名称包含非法字符
    #[error("无效的 Profile 名称: {0}")]
    InvalidName(String),

    /// Profile 已存在
    #[error("Profile 已存在: {0}")]
    AlreadyExists(String),

    /// Profile 不存在
    #[error("Profile 不存在: {0}")]
    NotFound(String),

    /// 受保护的 Profile，禁止删除
    #[error("受保护的 Profile，不可删除: {0}")]
    Forbidden(String),

    /// Profile 正在使用中
    #[error("Profile 正在使用中，请先切换到其他 Profile: {0}")]
    InUse(String),

    /// 同步源目录不可用
    #[error("同步源不可用: {0}")]
    SourceMissing(String),

    /// 当前供应商不支持该操作
    #[error("不支持的操作: {0}")]
    NotSupported(String),

    /// IO 错误（带路径上下文）
    #[error("IO 错误: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO 错误（带自定义上下文）
    #[error("{context}: {source}")]
    IoContext {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析错误
    #[error("JSON 解析错误: {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON 序列化错误
    #[error("JSON 序列化失败: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// 通用消息错误
    #[error("{0}")]
    Message(String),
}

impl AppError {
    /// 创建 IO 错误
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// 创建 JSON 解析错误
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::IoContext {
            context: "IO 操作失败".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonSerialize { source: err }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;
