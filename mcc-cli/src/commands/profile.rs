//! Profile 操作命令实现
//!
//! new、delete、set-key 三个子命令。

use anyhow::{bail, Result};
use mcc_core::{ProfileService, ProfileStore, NATIVE_PROVIDER};
use std::io::{self, Write};

use crate::output::{print_error, print_info, print_success, OutputContext};

/// 创建新 Profile
pub fn new(
    _ctx: &OutputContext,
    name: &str,
    provider: Option<&str>,
    api_key: Option<&str>,
) -> Result<()> {
    // 非原生供应商必须提供 API Key
    if let Some(provider) = provider {
        if !provider.is_empty() && provider != NATIVE_PROVIDER && api_key.is_none() {
            print_error(&format!("供应商 '{provider}' 需要提供 API Key"));
            print_info(&format!("用法: mcc new {name} {provider} <api-key>"));
            bail!("缺少 API Key");
        }
    }

    let store = ProfileStore::init()?;
    ProfileService::create(&store, name, provider, api_key)?;

    print_success(&format!("已创建 Profile: {name}"));
    if let Some(provider) = provider {
        if !provider.is_empty() && provider != NATIVE_PROVIDER {
            print_info(&format!("供应商: {provider}"));
        }
    }
    println!();
    println!("使用该 Profile:");
    println!("  mcc run {name}");
    Ok(())
}

/// 删除 Profile
pub fn delete(_ctx: &OutputContext, name: &str, yes: bool) -> Result<()> {
    let store = ProfileStore::init()?;

    if !yes {
        print!("确认删除 Profile '{name}' 吗? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
            print_info("已取消");
            return Ok(());
        }
    }

    ProfileService::delete(&store, name)?;
    print_success(&format!("已删除 Profile: {name}"));
    Ok(())
}

/// 更新 Profile 的 API Key
pub fn set_key(_ctx: &OutputContext, name: &str, api_key: &str) -> Result<()> {
    let store = ProfileStore::init()?;
    ProfileService::set_api_key(&store, name, api_key)?;
    print_success(&format!("已更新 Profile 的 API Key: {name}"));
    Ok(())
}
