//! Profile 切换服务模块
//!
//! 切换是"当前 Profile"变更的唯一入口：原子重建 `current` 指针，
//! 再把注册表更新为新名称。

use std::path::PathBuf;

use crate::error::{AppError, Result};
use crate::profile::ProfileMeta;
use crate::store::ProfileStore;

/// 切换结果
///
/// `profile_dir` 是 Profile 的实际目录而非 `current` 指针，启动外部工具时
/// 直接导出实际目录，避免并发实例经由共享指针互相串扰。
#[derive(Debug, Clone)]
pub struct SwitchOutcome {
    /// Profile 实际目录路径
    pub profile_dir: PathBuf,
    /// 该 Profile 的供应商元数据
    pub meta: ProfileMeta,
}

/// Profile 切换服务
pub struct SwitchService;

impl SwitchService {
    /// 切换到指定 Profile
    pub fn switch(store: &ProfileStore, name: &str) -> Result<SwitchOutcome> {
        if !store.exists(name) {
            return Err(AppError::NotFound(name.to_string()));
        }

        let profile_dir = store.repoint_current(name)?;

        let mut registry = store.registry()?;
        registry.current_profile = name.to_string();
        store.save_registry(&registry)?;

        let meta = ProfileMeta::load(&profile_dir);
        Ok(SwitchOutcome { profile_dir, meta })
    }

    /// 当前 Profile 名称（以注册表为准）
    pub fn current(store: &ProfileStore) -> Result<String> {
        store.current()
    }
}
