//! 注册表模块
//!
//! `config.json` 持久化记录当前 Profile 名称。注册表是"当前 Profile"
//! 的唯一权威来源，`current` 符号链接只是由它派生的文件系统投影。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{read_json_file, write_json_file, DEFAULT_PROFILE};
use crate::error::Result;

/// 注册表结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// 当前 Profile 名称
    pub current_profile: String,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            current_profile: DEFAULT_PROFILE.to_string(),
        }
    }
}

impl Registry {
    /// 从指定路径加载注册表
    ///
    /// 文件不存在时返回默认值（current = default），不视为错误。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        read_json_file(path)
    }

    /// 保存注册表到指定路径（原子写入）
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().unwrap();
        let registry = Registry::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(registry.current_profile, DEFAULT_PROFILE);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let registry = Registry {
            current_profile: "work".to_string(),
        };
        registry.save(&path).unwrap();

        let loaded = Registry::load(&path).unwrap();
        assert_eq!(loaded.current_profile, "work");
    }

    #[test]
    fn test_load_malformed_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Registry::load(&path).is_err());
    }
}
