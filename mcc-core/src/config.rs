//! 配置文件路径和读写模块
//!
//! 处理 mcc 数据目录的路径解析和 JSON 文件的原子读写操作。

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// mcc 数据目录名
pub const MCC_DIR_NAME: &str = ".mcc";

/// Profile 存储目录名
pub const PROFILES_DIR_NAME: &str = "profiles";

/// 当前 Profile 指针（符号链接）名
pub const CURRENT_LINK_NAME: &str = "current";

/// 注册表文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 默认 Profile 名称，初始化后始终存在且不可删除
pub const DEFAULT_PROFILE: &str = "default";

/// Profile 元数据文件名
pub const PROFILE_META_FILE: &str = ".mcc-profile.json";

/// Claude Code 读取配置目录的环境变量名
pub const CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Profile 名称中禁止出现的字符
pub const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// 获取用户主目录
///
/// 支持 MCC_HOME 环境变量覆盖（用于测试隔离）
pub fn get_home_dir() -> PathBuf {
    // 支持测试环境下的路径覆盖
    if let Ok(home) = std::env::var("MCC_HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    #[cfg(windows)]
    if let Ok(home) = std::env::var("HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    dirs::home_dir().unwrap_or_else(|| {
        log::warn!("无法获取用户主目录，回退到当前目录");
        PathBuf::from(".")
    })
}

/// 获取 mcc 数据目录路径
///
/// 默认: `~/.mcc`
pub fn get_mcc_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MCC_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    get_home_dir().join(MCC_DIR_NAME)
}

/// 获取 Claude Code 实时配置目录路径
///
/// 默认: `~/.claude`，作为 default Profile 的初始化来源和 sync 的同步源
pub fn get_claude_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MCC_CLAUDE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    get_home_dir().join(".claude")
}

/// 校验 Profile 名称
///
/// 名称不能为空，且不能包含路径分隔符和文件系统保留字符。
pub fn validate_profile_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::InvalidName("名称不能为空".to_string()));
    }
    if name.contains(FORBIDDEN_NAME_CHARS) {
        return Err(AppError::InvalidName(format!(
            "{name} (不能包含 / \\ : * ? \" < > | 字符)"
        )));
    }
    Ok(())
}

/// 读取 JSON 配置文件
pub fn read_json_file<T: for<'a> Deserialize<'a>>(path: &Path) -> Result<T, AppError> {
    if !path.exists() {
        return Err(AppError::Config(format!("文件不存在: {}", path.display())));
    }

    let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;

    serde_json::from_str(&content).map_err(|e| AppError::json(path, e))
}

/// 写入 JSON 配置文件（原子写入）
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), AppError> {
    let json =
        serde_json::to_string_pretty(data).map_err(|e| AppError::JsonSerialize { source: e })?;

    atomic_write(path, json.as_bytes())
}

/// 原子写入：写入临时文件后 rename 替换，避免半写状态
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }

    let parent = path
        .parent()
        .ok_or_else(|| AppError::Config("无效的路径".to_string()))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Config("无效的文件名".to_string()))?
        .to_string_lossy()
        .to_string();

    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    let mut tmp = parent.to_path_buf();
    tmp.push(format!("{file_name}.tmp.{ts}"));

    {
        let mut f = fs::File::create(&tmp).map_err(|e| AppError::io(&tmp, e))?;
        f.write_all(data).map_err(|e| AppError::io(&tmp, e))?;
        f.flush().map_err(|e| AppError::io(&tmp, e))?;
    }

    // Unix: 保留原文件权限
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(path) {
            let perm = meta.permissions().mode();
            let _ = fs::set_permissions(&tmp, fs::Permissions::from_mode(perm));
        }
    }

    // 原子替换
    fs::rename(&tmp, path).map_err(|e| AppError::IoContext {
        context: format!("原子替换失败: {} -> {}", tmp.display(), path.display()),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.json");

        let data = r#"{"key": "value"}"#;
        atomic_write(&path, data.as_bytes()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, data);
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.json");

        atomic_write(&path, b"old").unwrap();
        atomic_write(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_validate_profile_name() {
        assert!(validate_profile_name("work").is_ok());
        assert!(validate_profile_name("kimi-work_2").is_ok());

        assert!(validate_profile_name("").is_err());
        for bad in ["a/b", "a\\b", "a:b", "a*b", "a?b", "a\"b", "a<b", "a>b", "a|b"] {
            assert!(validate_profile_name(bad).is_err(), "应拒绝 {bad}");
        }
    }

    #[test]
    #[serial]
    fn test_home_dir_override() {
        std::env::set_var("MCC_HOME", "/tmp/mcc-test-home");
        assert_eq!(get_home_dir(), PathBuf::from("/tmp/mcc-test-home"));
        assert_eq!(get_mcc_dir(), PathBuf::from("/tmp/mcc-test-home/.mcc"));
        assert_eq!(
            get_claude_config_dir(),
            PathBuf::from("/tmp/mcc-test-home/.claude")
        );
        std::env::remove_var("MCC_HOME");
    }
}
