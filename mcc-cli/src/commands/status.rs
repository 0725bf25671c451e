//! status 命令实现

use anyhow::Result;
use mcc_core::{
    EnvCheckerService, EnvStatus, ProfileService, ProfileStore, SwitchService, CONFIG_DIR_ENV,
};

use crate::output::{
    format_status, mask_api_key, print_profiles, print_success, print_warning, OutputContext,
    ProfileRow,
};

/// 显示当前状态和所有 Profile
pub fn show_status(ctx: &OutputContext) -> Result<()> {
    let store = ProfileStore::init()?;
    let current = SwitchService::current(&store)?;
    let entries = ProfileService::list(&store)?;

    let rows: Vec<ProfileRow> = entries
        .into_iter()
        .map(|entry| ProfileRow {
            name: entry.name,
            status: format_status(entry.current),
            provider: entry.meta.provider.clone(),
            api_key: mask_api_key(&entry.meta.api_key),
        })
        .collect();

    // JSON/YAML 模式只输出结构化数据
    if ctx.format != crate::cli::OutputFormat::Table {
        print_profiles(ctx, rows);
        return Ok(());
    }

    println!("Claude Code 多账号管理 (mcc)");
    println!();
    println!("当前 Profile: {current}");
    println!();
    print_profiles(ctx, rows);

    println!();
    match EnvCheckerService::check(&store) {
        EnvStatus::Ok => print_success(&format!("{CONFIG_DIR_ENV} 配置正确")),
        EnvStatus::NotSet => {
            print_warning(&format!("{CONFIG_DIR_ENV} 未设置"));
            println!(
                "  在 shell 配置中添加: export {CONFIG_DIR_ENV}=\"{}\"",
                store.current_link().display()
            );
        }
        EnvStatus::Mismatch { actual } => {
            print_warning(&format!("{CONFIG_DIR_ENV} 指向了其他位置"));
            println!("  当前值: {actual}");
            println!("  期望值: {}", store.current_link().display());
        }
    }

    Ok(())
}
