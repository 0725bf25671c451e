//! mcc CLI
//!
//! Claude Code 多账号管理工具：维护多套相互隔离的配置 Profile，
//! 切换后直接启动 claude。
//!
//! # 使用示例
//!
//! ```bash
//! # 切换到 default Profile 并启动 claude
//! mcc
//!
//! # 创建并使用一个工作 Profile
//! mcc new work
//! mcc run work
//!
//! # 查看当前状态
//! mcc status
//! ```

mod cli;
mod commands;
mod launch;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use commands::execute;
use mcc_core::{EnvCheckerService, EnvStatus, ProfileStore, CONFIG_DIR_ENV};

fn main() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    // 首次使用提示：CLAUDE_CONFIG_DIR 未正确指向 current 指针时
    // 输出 shell 配置建议（写到 stderr，不影响 -o json 输出）
    setup_hint();

    // 没有子命令：切换到 default 并启动 claude
    if cli.command.is_none() {
        let ctx = output::OutputContext::new(cli.format, cli.no_color);
        return commands::run::run(&ctx, None);
    }

    // 执行命令
    execute(cli)
}

/// 检查 CLAUDE_CONFIG_DIR 并在需要时输出配置提示
fn setup_hint() {
    let store = ProfileStore::at(mcc_core::get_mcc_dir(), mcc_core::get_claude_config_dir());
    if EnvCheckerService::check(&store) != EnvStatus::Ok {
        eprintln!(
            "{} 把下面一行加入 ~/.zshrc 或 ~/.bashrc 后重新打开终端:",
            "⚠".yellow().bold()
        );
        eprintln!(
            "   export {CONFIG_DIR_ENV}=\"{}\"",
            store.current_link().display()
        );
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        super::Cli::command().debug_assert();
    }
}
