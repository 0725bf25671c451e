//! claude 启动封装模块
//!
//! 定位 PATH 中的 claude 可执行文件，注入 Profile 目录和供应商环境变量，
//! 然后把终端控制权交给它：Unix 下替换当前进程，Windows 下阻塞等待。

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use mcc_core::CONFIG_DIR_ENV;

/// 启动 claude
///
/// `profile_dir` 必须是 Profile 的实际目录（非 current 指针），
/// 并发实例才能各自使用自己的 Profile。成功时 Unix 下不返回。
pub fn launch_claude(profile_dir: &Path, extra_env: &[(String, String)]) -> Result<()> {
    let claude_path = match find_in_path("claude") {
        Some(path) => path,
        None => bail!("在 PATH 中找不到 claude，请先安装 Claude Code CLI"),
    };
    log::debug!("claude 可执行文件: {}", claude_path.display());

    let mut cmd = Command::new(&claude_path);
    cmd.env(CONFIG_DIR_ENV, profile_dir);
    for (key, value) in extra_env {
        cmd.env(key, value);
    }

    exec(cmd)
}

/// 在 PATH 中查找可执行文件
fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        for candidate in candidates(&dir, name) {
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

/// Windows: claude 通常由 npm 安装为 .cmd 脚本
#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    ["exe", "cmd", "bat"]
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .chain(std::iter::once(dir.join(name)))
        .collect()
}

/// Unix: 用 exec 替换当前进程，stdio 随之继承。只有失败才会返回。
#[cfg(unix)]
fn exec(mut cmd: Command) -> Result<()> {
    use std::os::unix::process::CommandExt;

    let err = cmd.exec();
    bail!("启动 claude 失败: {err}");
}

/// Windows: 生成子进程并等待，按其退出码退出。
#[cfg(windows)]
fn exec(mut cmd: Command) -> Result<()> {
    let status = cmd.status()?;
    std::process::exit(status.code().unwrap_or(0));
}
