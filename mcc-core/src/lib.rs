//! MCC Core Library
//!
//! 核心业务逻辑库，提供 Claude Code 多账号 Profile 的存储、切换与同步功能。
//! 此库不涉及 CLI 参数解析和进程启动，可在 CLI 或其他前端中复用。
//!
//! # 架构设计
//!
//! ```text
//! mcc-core/
//! ├── lib.rs           - 公共 API 导出
//! ├── config.rs        - 磁盘布局常量、路径解析和原子读写
//! ├── error.rs         - 统一错误类型
//! ├── fsops.rs         - 文件系统复制引擎（全量/白名单/过滤同步）
//! ├── registry.rs      - 注册表（config.json，当前 Profile 的权威记录）
//! ├── profile.rs       - Profile 元数据（供应商与 API Key）
//! ├── store.rs         - Profile 存储与 current 指针维护
//! └── services/        - 业务逻辑服务层
//!     ├── mod.rs
//!     ├── profile.rs
//!     ├── switch.rs
//!     └── env_checker.rs
//! ```
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use mcc_core::{ProfileService, ProfileStore, SwitchService};
//!
//! fn main() -> mcc_core::Result<()> {
//!     // 打开存储并完成幂等初始化
//!     let store = ProfileStore::init()?;
//!
//!     // 创建一个 Kimi Profile
//!     ProfileService::create(&store, "kimi-work", Some("kimi"), Some("sk-xxx"))?;
//!
//!     // 切换到该 Profile
//!     let outcome = SwitchService::switch(&store, "kimi-work")?;
//!     println!("当前 Profile 目录: {}", outcome.profile_dir.display());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fsops;
pub mod profile;
pub mod registry;
pub mod services;
pub mod store;

// 公共类型导出
pub use config::{
    get_claude_config_dir, get_home_dir, get_mcc_dir, validate_profile_name, CONFIG_DIR_ENV,
    DEFAULT_PROFILE,
};
pub use error::{AppError, Result};
pub use fsops::{CopyPolicy, SyncReport};
pub use profile::{ProfileMeta, NATIVE_PROVIDER};
pub use registry::Registry;
pub use services::{
    EnvCheckerService, EnvStatus, ProfileEntry, ProfileService, SwitchOutcome, SwitchService,
};
pub use store::ProfileStore;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用名称
pub const APP_NAME: &str = "mcc";
