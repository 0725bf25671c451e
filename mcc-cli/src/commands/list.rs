//! list 命令实现

use anyhow::Result;
use mcc_core::{ProfileService, ProfileStore};

use crate::output::{format_status, mask_api_key, print_profiles, OutputContext, ProfileRow};

/// 列出所有 Profile
pub fn list_profiles(ctx: &OutputContext) -> Result<()> {
    let store = ProfileStore::init()?;
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

    print_profiles(ctx, rows);
    Ok(())
}
