//! Profile 元数据模块
//!
//! 每个 Profile 目录下可选的 `.mcc-profile.json` 记录该 Profile 使用的
//! 上游供应商和 API Key，用于在启动时计算额外的环境变量注入。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{write_json_file, PROFILE_META_FILE};
use crate::error::Result;

/// 原生供应商名称，不需要任何环境变量覆盖
pub const NATIVE_PROVIDER: &str = "claude";

/// Kimi Coding 的 Anthropic 兼容接口地址
const KIMI_BASE_URL: &str = "https://api.kimi.com/coding/";

/// Profile 元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMeta {
    /// 供应商名称（"claude" 表示原生）
    pub provider: String,
    /// 第三方供应商的 API Key
    #[serde(default)]
    pub api_key: String,
    /// 创建时间戳
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Default for ProfileMeta {
    fn default() -> Self {
        Self {
            provider: NATIVE_PROVIDER.to_string(),
            api_key: String::new(),
            created_at: None,
        }
    }
}

impl ProfileMeta {
    /// 创建新的元数据记录
    pub fn new(provider: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_key: api_key.into(),
            created_at: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// 从 Profile 目录加载元数据
    ///
    /// 永不失败：文件缺失返回原生默认值；内容损坏时记录警告后
    /// 同样回退到原生默认值（明确的回退策略，而非静默吞掉）。
    pub fn load(profile_dir: &Path) -> Self {
        let path = profile_dir.join(PROFILE_META_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str::<ProfileMeta>(&content) {
            Ok(mut meta) => {
                if meta.provider.is_empty() {
                    meta.provider = NATIVE_PROVIDER.to_string();
                }
                meta
            }
            Err(e) => {
                log::warn!("Profile 元数据损坏，回退到原生供应商: {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// 保存元数据到 Profile 目录（原子写入）
    pub fn save(&self, profile_dir: &Path) -> Result<()> {
        write_json_file(&profile_dir.join(PROFILE_META_FILE), self)
    }

    /// 是否为原生供应商（无需环境变量覆盖）
    pub fn is_native(&self) -> bool {
        self.provider.is_empty() || self.provider == NATIVE_PROVIDER
    }

    /// 计算启动时需要注入的环境变量
    ///
    /// 原生供应商返回空；未知供应商按原生处理并记录警告。
    pub fn provider_env(&self) -> Vec<(String, String)> {
        match self.provider.as_str() {
            "kimi" => vec![
                ("ANTHROPIC_BASE_URL".to_string(), KIMI_BASE_URL.to_string()),
                ("ANTHROPIC_API_KEY".to_string(), self.api_key.clone()),
            ],
            "" | NATIVE_PROVIDER => Vec::new(),
            other => {
                log::warn!("未知供应商 '{other}'，按原生供应商处理");
                Vec::new()
            }
        }
    }
}
