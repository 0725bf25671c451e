//! 命令执行模块
//!
//! 实现各个 CLI 子命令的具体逻辑。

pub mod list;
pub mod profile;
pub mod run;
pub mod status;
pub mod sync;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::output::OutputContext;

/// 执行 CLI 命令
pub fn execute(cli: Cli) -> Result<()> {
    let ctx = OutputContext::new(cli.format, cli.no_color);

    // command 是 Option，main.rs 中已经处理了 None 的情况
    let command = cli
        .command
        .expect("command should be Some when execute is called");

    match command {
        Commands::Run { name } => run::run(&ctx, name.as_deref()),
        Commands::New {
            name,
            provider,
            api_key,
        } => profile::new(&ctx, &name, provider.as_deref(), api_key.as_deref()),
        Commands::Delete { name, yes } => profile::delete(&ctx, &name, yes),
        Commands::Sync { name } => sync::sync(&ctx, name.as_deref()),
        Commands::Status => status::show_status(&ctx),
        Commands::List => list::list_profiles(&ctx),
        Commands::SetKey { name, api_key } => profile::set_key(&ctx, &name, &api_key),
        Commands::Version => {
            println!("mcc {}", mcc_core::VERSION);
            Ok(())
        }
    }
}
