//! Profile 业务服务模块
//!
//! 处理 Profile 的创建、删除、同步和 API Key 管理。

use std::fs;

use crate::config::{validate_profile_name, DEFAULT_PROFILE};
use crate::error::{AppError, Result};
use crate::fsops::{copy_settings, sync_filtered, CopyPolicy, SyncReport};
use crate::profile::{ProfileMeta, NATIVE_PROVIDER};
use crate::store::ProfileStore;

/// 列表展示用的 Profile 条目
#[derive(Debug, Clone)]
pub struct ProfileEntry {
    /// Profile 名称
    pub name: String,
    /// 供应商元数据
    pub meta: ProfileMeta,
    /// 是否为当前 Profile
    pub current: bool,
}

/// Profile 业务逻辑服务
pub struct ProfileService;

impl ProfileService {
    /// 列出所有 Profile 及其元数据
    pub fn list(store: &ProfileStore) -> Result<Vec<ProfileEntry>> {
        let current = store.current()?;
        let mut entries = Vec::new();
        for name in store.list()? {
            let meta = ProfileMeta::load(&store.profile_path(&name));
            let is_current = name == current;
            entries.push(ProfileEntry {
                name,
                meta,
                current: is_current,
            });
        }
        Ok(entries)
    }

    /// 创建新 Profile
    ///
    /// 从 default Profile 白名单复制设置文件播种；播种失败时回退为
    /// 空目录。指定非原生供应商时写入元数据记录。
    pub fn create(
        store: &ProfileStore,
        name: &str,
        provider: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<()> {
        if store.exists(name) {
            return Err(AppError::AlreadyExists(name.to_string()));
        }
        validate_profile_name(name)?;

        let profile_dir = store.profile_path(name);
        let default_dir = store.profile_path(DEFAULT_PROFILE);
        if let Err(e) = copy_settings(&default_dir, &profile_dir) {
            log::debug!("从 default 播种失败，创建空 Profile: {e}");
            fs::create_dir_all(&profile_dir).map_err(|e| AppError::io(&profile_dir, e))?;
        }

        if let Some(provider) = provider {
            if !provider.is_empty() && provider != NATIVE_PROVIDER {
                let meta = ProfileMeta::new(provider, api_key.unwrap_or_default());
                meta.save(&profile_dir)?;
            }
        }

        Ok(())
    }

    /// 删除 Profile
    ///
    /// default Profile 和当前正在使用的 Profile 不可删除。
    pub fn delete(store: &ProfileStore, name: &str) -> Result<()> {
        if name == DEFAULT_PROFILE {
            return Err(AppError::Forbidden(name.to_string()));
        }
        if !store.exists(name) {
            return Err(AppError::NotFound(name.to_string()));
        }
        if store.current()? == name {
            return Err(AppError::InUse(name.to_string()));
        }

        let profile_dir = store.profile_path(name);
        fs::remove_dir_all(&profile_dir).map_err(|e| AppError::io(&profile_dir, e))?;
        Ok(())
    }

    /// 把实时配置目录同步到指定 Profile
    ///
    /// 增量覆盖，不删除 Profile 中已有文件；凭证文件始终排除。
    pub fn sync(store: &ProfileStore, name: &str) -> Result<SyncReport> {
        if !store.exists(name) {
            return Err(AppError::NotFound(name.to_string()));
        }

        let claude_dir = store.claude_dir();
        if !claude_dir.exists() {
            return Err(AppError::SourceMissing(format!(
                "{} 不存在，无可同步内容",
                claude_dir.display()
            )));
        }
        if !claude_dir.is_dir() {
            return Err(AppError::SourceMissing(format!(
                "{} 不是目录",
                claude_dir.display()
            )));
        }
        let mut entries = fs::read_dir(claude_dir).map_err(|e| AppError::io(claude_dir, e))?;
        if entries.next().is_none() {
            return Err(AppError::SourceMissing(format!(
                "{} 为空，无可同步内容",
                claude_dir.display()
            )));
        }

        sync_filtered(claude_dir, &store.profile_path(name), CopyPolicy::FailFast)
    }

    /// 更新指定 Profile 的 API Key
    pub fn set_api_key(store: &ProfileStore, name: &str, api_key: &str) -> Result<()> {
        if !store.exists(name) {
            return Err(AppError::NotFound(name.to_string()));
        }

        let profile_dir = store.profile_path(name);
        let mut meta = ProfileMeta::load(&profile_dir);
        if meta.is_native() {
            return Err(AppError::NotSupported(format!(
                "Profile '{name}' 使用原生 claude 供应商，无需 API Key"
            )));
        }

        meta.api_key = api_key.to_string();
        meta.save(&profile_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::switch::SwitchService;
    use std::path::Path;
    use tempfile::tempdir;

    fn ready_store(root: &Path) -> ProfileStore {
        let store = ProfileStore::at(root.join(".mcc"), root.join(".claude"));
        store.bootstrap().unwrap();
        store
    }

    #[test]
    fn test_create_then_exists_and_list() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        ProfileService::create(&store, "work", None, None).unwrap();

        assert!(store.exists("work"));
        assert_eq!(store.list().unwrap(), vec!["default", "work"]);
    }

    #[test]
    fn test_create_twice_fails_and_keeps_state() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        ProfileService::create(&store, "work", None, None).unwrap();
        fs::write(store.profile_path("work").join("marker.json"), "{}").unwrap();

        let err = ProfileService::create(&store, "work", None, None).unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
        // 失败的调用不得改动已有 Profile
        assert!(store.profile_path("work").join("marker.json").is_file());
    }

    #[test]
    fn test_create_rejects_invalid_name() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        let err = ProfileService::create(&store, "a/b", None, None).unwrap_err();
        assert!(matches!(err, AppError::InvalidName(_)));
        assert!(store.list().unwrap().len() == 1);
    }

    #[test]
    fn test_create_seeds_settings_from_default() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        let default_dir = store.profile_path(DEFAULT_PROFILE);
        fs::write(default_dir.join("settings.json"), "{}").unwrap();
        fs::write(default_dir.join(".credentials.json"), "secret").unwrap();

        ProfileService::create(&store, "work", None, None).unwrap();

        let work_dir = store.profile_path("work");
        assert!(work_dir.join("settings.json").is_file());
        assert!(!work_dir.join(".credentials.json").exists());
    }

    #[test]
    fn test_create_with_provider_writes_meta() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        ProfileService::create(&store, "kimi-work", Some("kimi"), Some("sk-k")).unwrap();

        let meta = ProfileMeta::load(&store.profile_path("kimi-work"));
        assert_eq!(meta.provider, "kimi");
        assert_eq!(meta.api_key, "sk-k");
    }

    #[test]
    fn test_create_native_provider_writes_no_meta() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        ProfileService::create(&store, "work", Some("claude"), None).unwrap();

        assert!(!store
            .profile_path("work")
            .join(crate::config::PROFILE_META_FILE)
            .exists());
    }

    #[test]
    fn test_delete_default_is_forbidden() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        let err = ProfileService::delete(&store, DEFAULT_PROFILE).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert!(store.exists(DEFAULT_PROFILE));
    }

    #[test]
    fn test_delete_nonexistent_fails() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        let err = ProfileService::delete(&store, "ghost").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_delete_current_requires_switch_away() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        ProfileService::create(&store, "work", None, None).unwrap();
        SwitchService::switch(&store, "work").unwrap();

        let err = ProfileService::delete(&store, "work").unwrap_err();
        assert!(matches!(err, AppError::InUse(_)));

        SwitchService::switch(&store, DEFAULT_PROFILE).unwrap();
        ProfileService::delete(&store, "work").unwrap();
        assert!(!store.exists("work"));
    }

    #[test]
    fn test_sync_reports_counts() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        let claude_dir = root.path().join(".claude");
        fs::create_dir_all(&claude_dir).unwrap();
        fs::write(claude_dir.join("settings.json"), "{}").unwrap();
        fs::write(claude_dir.join("credentials.json"), "secret").unwrap();

        let report = ProfileService::sync(&store, DEFAULT_PROFILE).unwrap();
        assert_eq!(report.copied, 1);
        assert_eq!(report.skipped, 1);
        assert!(store
            .profile_path(DEFAULT_PROFILE)
            .join("settings.json")
            .is_file());
    }

    #[test]
    fn test_sync_missing_source_fails() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        let err = ProfileService::sync(&store, DEFAULT_PROFILE).unwrap_err();
        assert!(matches!(err, AppError::SourceMissing(_)));
    }

    #[test]
    fn test_sync_empty_source_fails() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());
        fs::create_dir_all(root.path().join(".claude")).unwrap();

        let err = ProfileService::sync(&store, DEFAULT_PROFILE).unwrap_err();
        assert!(matches!(err, AppError::SourceMissing(_)));
    }

    #[test]
    fn test_sync_nonexistent_profile_fails() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        let err = ProfileService::sync(&store, "ghost").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_set_api_key_native_not_supported() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        ProfileService::create(&store, "work", None, None).unwrap();
        let err = ProfileService::set_api_key(&store, "work", "sk-x").unwrap_err();
        assert!(matches!(err, AppError::NotSupported(_)));
    }

    #[test]
    fn test_set_api_key_updates_meta() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());

        ProfileService::create(&store, "kimi-work", Some("kimi"), Some("sk-old")).unwrap();
        ProfileService::set_api_key(&store, "kimi-work", "sk-new").unwrap();

        let meta = ProfileMeta::load(&store.profile_path("kimi-work"));
        assert_eq!(meta.api_key, "sk-new");
    }

    #[test]
    fn test_list_marks_current() {
        let root = tempdir().unwrap();
        let store = ready_store(root.path());
        ProfileService::create(&store, "work", Some("kimi"), Some("sk-k")).unwrap();

        let entries = ProfileService::list(&store).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].current); // default
        assert!(!entries[1].current);
        assert_eq!(entries[1].meta.provider, "kimi");
    }
}
