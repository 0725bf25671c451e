//! 环境变量检测服务模块
//!
//! 检查 `CLAUDE_CONFIG_DIR` 是否指向 `current` 指针。仅作只读检测，
//! 用于在 status 和启动提示中给出 shell 配置建议。

use std::path::Path;

use crate::config::CONFIG_DIR_ENV;
use crate::store::ProfileStore;

/// 环境变量检测结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvStatus {
    /// 已正确指向 current 指针
    Ok,
    /// 未设置
    NotSet,
    /// 指向了其他位置
    Mismatch {
        /// 实际设置的值
        actual: String,
    },
}

/// 环境检测服务
pub struct EnvCheckerService;

impl EnvCheckerService {
    /// 检查 CLAUDE_CONFIG_DIR 的配置状态
    pub fn check(store: &ProfileStore) -> EnvStatus {
        let expected = store.current_link();
        match std::env::var(CONFIG_DIR_ENV) {
            Err(_) => EnvStatus::NotSet,
            Ok(value) if value.trim().is_empty() => EnvStatus::NotSet,
            Ok(value) => {
                if Path::new(&value) == expected {
                    EnvStatus::Ok
                } else {
                    EnvStatus::Mismatch { actual: value }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_check_states() {
        let root = tempdir().unwrap();
        let store = ProfileStore::at(root.path().join(".mcc"), root.path().join(".claude"));

        std::env::remove_var(CONFIG_DIR_ENV);
        assert_eq!(EnvCheckerService::check(&store), EnvStatus::NotSet);

        std::env::set_var(CONFIG_DIR_ENV, store.current_link());
        assert_eq!(EnvCheckerService::check(&store), EnvStatus::Ok);

        std::env::set_var(CONFIG_DIR_ENV, "/somewhere/else");
        assert_eq!(
            EnvCheckerService::check(&store),
            EnvStatus::Mismatch {
                actual: "/somewhere/else".to_string()
            }
        );

        std::env::remove_var(CONFIG_DIR_ENV);
    }
}
