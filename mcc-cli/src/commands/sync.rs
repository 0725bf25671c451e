//! sync 命令实现
//!
//! 把 ~/.claude 中的设置同步到 Profile，凭证文件始终排除。

use anyhow::Result;
use mcc_core::{ProfileService, ProfileStore, SwitchService};

use crate::output::{print_success, print_warning, OutputContext};

/// 同步实时配置到指定 Profile（省略名称时同步到当前 Profile）
pub fn sync(_ctx: &OutputContext, name: Option<&str>) -> Result<()> {
    let store = ProfileStore::init()?;

    let name = match name {
        Some(name) => name.to_string(),
        None => SwitchService::current(&store)?,
    };

    let report = ProfileService::sync(&store, &name)?;

    if report.copied == 0 {
        print_warning(&format!(
            "{} 中没有可同步的设置文件",
            store.claude_dir().display()
        ));
        if report.skipped > 0 {
            println!("  (已跳过 {} 个凭证文件)", report.skipped);
        }
        return Ok(());
    }

    print_success(&format!(
        "已同步 {} 个文件到 Profile: {}",
        report.copied, name
    ));
    if report.skipped > 0 {
        println!("  (出于安全考虑已跳过 {} 个凭证文件)", report.skipped);
    }
    Ok(())
}
