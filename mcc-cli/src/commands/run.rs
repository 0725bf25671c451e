//! run 命令实现
//!
//! 切换 Profile 并启动 claude。

use anyhow::Result;
use mcc_core::{ProfileStore, SwitchService, DEFAULT_PROFILE};

use crate::launch::launch_claude;
use crate::output::{print_error, print_info, print_success, OutputContext};

/// 切换到指定 Profile 并启动 claude
pub fn run(_ctx: &OutputContext, name: Option<&str>) -> Result<()> {
    let name = name.unwrap_or(DEFAULT_PROFILE);
    let store = ProfileStore::init()?;

    if !store.exists(name) {
        print_error(&format!("Profile '{name}' 不存在"));
        print_info(&format!("可用 'mcc new {name}' 创建"));
        anyhow::bail!("Profile 不存在: {name}");
    }

    let outcome = SwitchService::switch(&store, name)?;
    print_success(&format!("已切换到 Profile: {name}"));

    if outcome.meta.is_native() {
        print_info("正在启动 claude...");
    } else {
        print_info(&format!(
            "正在启动 claude (供应商: {})...",
            outcome.meta.provider
        ));
    }

    launch_claude(&outcome.profile_dir, &outcome.meta.provider_env())
}
