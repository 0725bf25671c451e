//! 文件系统复制引擎模块
//!
//! 提供三种复制原语：完整递归复制、白名单复制（新建 Profile 播种）、
//! 黑名单过滤同步（排除凭证文件）。

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

/// 凭证文件名模式（大小写不敏感的子串匹配），同步时永不复制
pub const CREDENTIAL_PATTERNS: &[&str] = &[
    ".credentials.json",
    "credentials.json",
    "auth.json",
    ".auth",
];

/// 同步时整体跳过的目录名
pub const SKIP_DIRS: &[&str] = &[".git"];

/// 新建 Profile 时从 default 播种的设置文件白名单
pub const SETTINGS_ALLOWLIST: &[&str] = &["settings.json", "settings.local.json"];

/// 单文件失败时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPolicy {
    /// 首个错误即中止
    FailFast,
    /// 跳过失败的文件并计入 skipped
    BestEffort,
}

/// 过滤同步的结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// 已复制的文件数
    pub copied: usize,
    /// 被排除或跳过的文件数
    pub skipped: usize,
}

/// 判断文件名是否命中凭证模式
fn is_credential_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    CREDENTIAL_PATTERNS
        .iter()
        .any(|pattern| lower.contains(&pattern.to_lowercase()))
}

/// 判断目录是否应整体跳过
fn is_skip_dir(name: &str) -> bool {
    SKIP_DIRS.iter().any(|dir| name == *dir)
}

/// 递归复制目录树
///
/// 保留相对路径和文件权限位。任何读写失败立即中止，
/// 已复制的部分不回滚。
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| AppError::io(dst, e))?;

    let entries = fs::read_dir(src).map_err(|e| AppError::io(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(src, e))?;
        let file_type = entry.file_type().map_err(|e| AppError::io(entry.path(), e))?;
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_tree(&entry.path(), &dst_path)?;
        } else if file_type.is_file() {
            // fs::copy 保留权限位
            fs::copy(entry.path(), &dst_path).map_err(|e| AppError::io(entry.path(), e))?;
        }
    }
    Ok(())
}

/// 白名单复制设置文件
///
/// 仅复制 [`SETTINGS_ALLOWLIST`] 中的文件，用于从 default Profile
/// 播种新 Profile。单文件读取失败时跳过该文件继续（尽力而为），
/// 写入失败则中止。
pub fn copy_settings(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| AppError::io(dst, e))?;

    for filename in SETTINGS_ALLOWLIST {
        let src_path = src.join(filename);
        if !src_path.is_file() {
            continue;
        }

        let data = match fs::read(&src_path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("跳过无法读取的设置文件 {}: {}", src_path.display(), e);
                continue;
            }
        };

        let dst_path = dst.join(filename);
        fs::write(&dst_path, data).map_err(|e| AppError::io(&dst_path, e))?;
    }
    Ok(())
}

/// 过滤同步：递归复制 `src` 到 `dst`，排除凭证文件和 `.git` 目录
///
/// 命中 [`CREDENTIAL_PATTERNS`] 的文件计入 skipped；其余文件复制并计入
/// copied。目录结构不可读时始终中止；单文件读写失败按 `policy` 处理。
pub fn sync_filtered(src: &Path, dst: &Path, policy: CopyPolicy) -> Result<SyncReport> {
    let mut report = SyncReport::default();
    sync_dir(src, dst, policy, &mut report)?;
    Ok(report)
}

fn sync_dir(src: &Path, dst: &Path, policy: CopyPolicy, report: &mut SyncReport) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| AppError::io(dst, e))?;

    let entries = fs::read_dir(src).map_err(|e| AppError::io(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(src, e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        let file_type = entry.file_type().map_err(|e| AppError::io(entry.path(), e))?;

        if file_type.is_dir() {
            if is_skip_dir(&name) || is_credential_file(&name) {
                continue;
            }
            sync_dir(&entry.path(), &dst.join(&name), policy, report)?;
            continue;
        }

        if !file_type.is_file() {
            continue;
        }

        if is_credential_file(&name) {
            report.skipped += 1;
            continue;
        }

        match fs::copy(entry.path(), dst.join(&name)) {
            Ok(_) => report.copied += 1,
            Err(e) => match policy {
                CopyPolicy::FailFast => return Err(AppError::io(entry.path(), e)),
                CopyPolicy::BestEffort => {
                    log::warn!("跳过复制失败的文件 {}: {}", entry.path().display(), e);
                    report.skipped += 1;
                }
            },
        }
    }
    Ok(())
}
