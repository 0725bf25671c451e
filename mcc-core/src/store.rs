//! Profile 存储模块
//!
//! `ProfileStore` 封装 mcc 数据目录的磁盘布局：枚举、定位 Profile 目录，
//! 读写注册表，维护 `current` 指针，以及每次调用前的幂等初始化。

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{
    get_claude_config_dir, get_mcc_dir, CONFIG_FILE_NAME, CURRENT_LINK_NAME, DEFAULT_PROFILE,
    PROFILES_DIR_NAME,
};
use crate::error::{AppError, Result};
use crate::fsops::copy_tree;
use crate::registry::Registry;

/// Profile 存储
pub struct ProfileStore {
    /// mcc 数据目录（默认 `~/.mcc`）
    mcc_dir: PathBuf,
    /// Claude Code 实时配置目录（默认 `~/.claude`）
    claude_dir: PathBuf,
}

impl ProfileStore {
    /// 打开默认位置的存储并完成初始化
    pub fn init() -> Result<Self> {
        let store = Self::at(get_mcc_dir(), get_claude_config_dir());
        store.bootstrap()?;
        Ok(store)
    }

    /// 在指定路径上打开存储（用于测试），不执行初始化
    pub fn at(mcc_dir: impl Into<PathBuf>, claude_dir: impl Into<PathBuf>) -> Self {
        Self {
            mcc_dir: mcc_dir.into(),
            claude_dir: claude_dir.into(),
        }
    }

    /// mcc 数据目录
    pub fn mcc_dir(&self) -> &Path {
        &self.mcc_dir
    }

    /// Claude Code 实时配置目录
    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    /// Profile 存储目录
    pub fn profiles_dir(&self) -> PathBuf {
        self.mcc_dir.join(PROFILES_DIR_NAME)
    }

    /// `current` 指针路径
    pub fn current_link(&self) -> PathBuf {
        self.mcc_dir.join(CURRENT_LINK_NAME)
    }

    /// 注册表文件路径
    pub fn config_path(&self) -> PathBuf {
        self.mcc_dir.join(CONFIG_FILE_NAME)
    }

    /// 指定 Profile 的实际目录路径（非指针路径）
    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(name)
    }

    /// 判断 Profile 是否存在
    pub fn exists(&self, name: &str) -> bool {
        self.profile_path(name).is_dir()
    }

    /// 列出所有 Profile 名称（字典序）
    ///
    /// 存储目录尚不存在时返回空列表，不视为错误。
    pub fn list(&self) -> Result<Vec<String>> {
        let profiles_dir = self.profiles_dir();
        let entries = match fs::read_dir(&profiles_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::io(&profiles_dir, e)),
        };

        let mut profiles = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AppError::io(&profiles_dir, e))?;
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                profiles.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    /// 加载注册表
    pub fn registry(&self) -> Result<Registry> {
        Registry::load(&self.config_path())
    }

    /// 保存注册表
    pub fn save_registry(&self, registry: &Registry) -> Result<()> {
        registry.save(&self.config_path())
    }

    /// 当前 Profile 名称（以注册表为准）
    pub fn current(&self) -> Result<String> {
        Ok(self.registry()?.current_profile)
    }

    /// 幂等初始化，每次调用前执行
    ///
    /// 确保存储目录、default Profile、注册表和 `current` 指针就绪。
    /// 指针缺失或悬空时按注册表记录修复（注册表是唯一权威，
    /// 指针只是它的文件系统投影）。
    pub fn bootstrap(&self) -> Result<()> {
        let profiles_dir = self.profiles_dir();
        fs::create_dir_all(&profiles_dir).map_err(|e| AppError::io(&profiles_dir, e))?;

        // default Profile 缺失时从实时配置目录克隆，没有则建空目录
        let default_dir = self.profile_path(DEFAULT_PROFILE);
        if !default_dir.is_dir() {
            if self.claude_dir.is_dir() {
                copy_tree(&self.claude_dir, &default_dir)?;
                log::info!(
                    "已从 {} 初始化 default Profile",
                    self.claude_dir.display()
                );
            } else {
                fs::create_dir_all(&default_dir).map_err(|e| AppError::io(&default_dir, e))?;
                log::info!("已创建空的 default Profile");
            }
        }

        // 注册表缺失时写入默认值
        let config_path = self.config_path();
        if !config_path.exists() {
            self.save_registry(&Registry::default())?;
        }

        // 指针缺失或悬空时按注册表修复
        let link = self.current_link();
        let link_present = fs::symlink_metadata(&link).is_ok();
        let link_dangling = link_present && !link.exists();
        if !link_present || link_dangling {
            let registry = self.registry()?;
            let name = if self.exists(&registry.current_profile) {
                registry.current_profile
            } else {
                DEFAULT_PROFILE.to_string()
            };
            self.repoint_current(&name)?;
            if link_dangling {
                log::warn!("current 指针悬空，已修复为 Profile: {name}");
            }
        }

        Ok(())
    }

    /// 原子重建 `current` 指针，使其指向指定 Profile 的实际目录
    ///
    /// 先在旁路创建临时链接再 rename 替换，切换过程中指针始终可解析。
    /// 返回指针的目标路径。
    pub fn repoint_current(&self, name: &str) -> Result<PathBuf> {
        let target = self.profile_path(name);
        let link = self.current_link();

        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = self.mcc_dir.join(format!("{CURRENT_LINK_NAME}.tmp.{ts}"));

        #[cfg(unix)]
        std::os::unix::fs::symlink(&target, &tmp).map_err(|e| AppError::io(&tmp, e))?;

        #[cfg(windows)]
        {
            std::os::windows::fs::symlink_dir(&target, &tmp).map_err(|e| AppError::io(&tmp, e))?;
            // Windows 的 rename 无法替换已存在的链接，先移除旧指针
            if fs::symlink_metadata(&link).is_ok() {
                let _ = fs::remove_dir(&link);
            }
        }

        fs::rename(&tmp, &link).map_err(|e| AppError::IoContext {
            context: format!("切换 current 指针失败: {}", link.display()),
            source: e,
        })?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store(root: &Path) -> ProfileStore {
        ProfileStore::at(root.join(".mcc"), root.join(".claude"))
    }

    #[test]
    fn test_bootstrap_creates_empty_default() {
        let root = tempdir().unwrap();
        let store = test_store(root.path());
        store.bootstrap().unwrap();

        assert!(store.exists(DEFAULT_PROFILE));
        assert!(store.config_path().is_file());
        assert_eq!(store.current().unwrap(), DEFAULT_PROFILE);
        assert_eq!(
            fs::read_link(store.current_link()).unwrap(),
            store.profile_path(DEFAULT_PROFILE)
        );
    }

    #[test]
    fn test_bootstrap_clones_claude_dir() {
        let root = tempdir().unwrap();
        let claude_dir = root.path().join(".claude");
        fs::create_dir_all(&claude_dir).unwrap();
        fs::write(claude_dir.join("settings.json"), "{}").unwrap();

        let store = test_store(root.path());
        store.bootstrap().unwrap();

        assert!(store
            .profile_path(DEFAULT_PROFILE)
            .join("settings.json")
            .is_file());
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let root = tempdir().unwrap();
        let store = test_store(root.path());
        store.bootstrap().unwrap();

        fs::write(
            store.profile_path(DEFAULT_PROFILE).join("settings.json"),
            "{}",
        )
        .unwrap();
        store.bootstrap().unwrap();

        // 第二次初始化不得清空已有内容
        assert!(store
            .profile_path(DEFAULT_PROFILE)
            .join("settings.json")
            .is_file());
    }

    #[test]
    fn test_bootstrap_repairs_dangling_link() {
        let root = tempdir().unwrap();
        let store = test_store(root.path());
        store.bootstrap().unwrap();

        // 手工把指针指向一个不存在的目录
        fs::remove_file(store.current_link()).unwrap();
        #[cfg(unix)]
        std::os::unix::fs::symlink(store.profile_path("ghost"), store.current_link()).unwrap();

        store.bootstrap().unwrap();
        assert_eq!(
            fs::read_link(store.current_link()).unwrap(),
            store.profile_path(DEFAULT_PROFILE)
        );
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let root = tempdir().unwrap();
        let store = test_store(root.path());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_is_sorted() {
        let root = tempdir().unwrap();
        let store = test_store(root.path());
        store.bootstrap().unwrap();

        fs::create_dir_all(store.profile_path("work")).unwrap();
        fs::create_dir_all(store.profile_path("abc")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["abc", "default", "work"]);
    }

    #[test]
    fn test_repoint_current_replaces_existing() {
        let root = tempdir().unwrap();
        let store = test_store(root.path());
        store.bootstrap().unwrap();
        fs::create_dir_all(store.profile_path("work")).unwrap();

        let target = store.repoint_current("work").unwrap();
        assert_eq!(target, store.profile_path("work"));
        assert_eq!(fs::read_link(store.current_link()).unwrap(), target);
    }
}
