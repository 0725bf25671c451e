//! CLI 参数定义模块
//!
//! 使用 clap 定义命令行接口结构。

use clap::{Parser, Subcommand, ValueEnum};

/// mcc - Claude Code 多账号管理工具
///
/// 维护多套相互隔离的 Claude Code 配置 Profile，并在启动前切换。
#[derive(Parser, Debug)]
#[command(
    name = "mcc",
    version,
    author,
    about = "🔄 Claude Code 多账号管理工具 - 隔离多套凭证配置并一键切换启动",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════╗
║                mcc - Claude Code 多账号管理工具                      ║
╚══════════════════════════════════════════════════════════════════════╝

为 Claude Code 维护多套相互隔离的配置 Profile（不同账号或不同 API
供应商），切换后直接启动 claude。凭证文件永不参与同步。

🚀 快速开始:
   mcc                    切换到 default 并启动 claude
   mcc run <名称>         切换到指定 Profile 并启动
   mcc new <名称>         创建新 Profile
   mcc status             查看当前状态

📖 详细帮助:
   mcc <命令> --help      查看命令详情
"#,
    after_help = r#"💡 提示: 直接运行 mcc 不带参数会切换到 default Profile 并启动 claude"#
)]
pub struct Cli {
    /// 输出格式
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value = "table",
        global = true,
        help = "输出格式 (table, json, yaml)"
    )]
    pub format: OutputFormat,

    /// 禁用彩色输出
    #[arg(long, global = true, help = "禁用彩色输出")]
    pub no_color: bool,

    /// 显示详细日志
    #[arg(short, long, global = true, help = "显示详细日志")]
    pub verbose: bool,

    /// 子命令
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 表格格式（默认）
    Table,
    /// JSON 格式
    Json,
    /// YAML 格式
    Yaml,
}

/// 子命令定义
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🚀 切换到指定 Profile 并启动 claude
    #[command(
        long_about = "切换到指定 Profile 并启动 claude。\n\n示例:\n  mcc run           切换到 default 并启动\n  mcc run work      切换到 'work' 并启动"
    )]
    Run {
        /// Profile 名称（省略时使用 default）
        name: Option<String>,
    },

    /// ➕ 创建新 Profile
    #[command(
        visible_aliases = ["create", "add"],
        long_about = r#"创建新 Profile，从 default Profile 复制设置文件（凭证除外）。

示例:
  mcc new work                     创建标准 claude Profile
  mcc new kimi-work kimi sk-xxx    创建使用 Kimi 供应商的 Profile

供应商:
  claude (默认)  标准 Claude Code，使用 Anthropic 账号
  kimi           Kimi Coding（claude CLI + Kimi API）"#
    )]
    New {
        /// Profile 名称
        name: String,

        /// 供应商（claude 或 kimi）
        provider: Option<String>,

        /// 第三方供应商的 API Key
        api_key: Option<String>,
    },

    /// ❌ 删除 Profile
    #[command(
        visible_aliases = ["rm", "remove"],
        long_about = "删除指定 Profile。default 和当前正在使用的 Profile 不可删除。\n\n示例:\n  mcc delete work      删除 'work'（需确认）\n  mcc delete work -y   跳过确认直接删除"
    )]
    Delete {
        /// 要删除的 Profile 名称
        name: String,

        /// 跳过确认直接删除
        #[arg(short = 'y', long, help = "跳过确认")]
        yes: bool,
    },

    /// 🔁 把 ~/.claude 同步到 Profile（凭证除外）
    #[command(
        long_about = "把实时配置目录 ~/.claude 中的设置同步到指定 Profile，\n凭证文件和 .git 目录始终排除。只增量覆盖，不删除已有文件。\n\n示例:\n  mcc sync          同步到当前 Profile\n  mcc sync work     同步到 'work'"
    )]
    Sync {
        /// Profile 名称（省略时使用当前 Profile）
        name: Option<String>,
    },

    /// 📊 显示当前状态和所有 Profile
    #[command(
        visible_alias = "st",
        long_about = "显示当前 Profile、所有 Profile 列表以及 CLAUDE_CONFIG_DIR\n环境变量的配置状态。"
    )]
    Status,

    /// 📋 列出所有 Profile
    #[command(
        visible_alias = "ls",
        long_about = "列出所有 Profile。\n\n示例:\n  mcc list            表格输出\n  mcc list -o json    JSON 输出"
    )]
    List,

    /// 🔑 更新 Profile 的 API Key
    #[command(
        name = "set-key",
        long_about = "更新指定 Profile 的 API Key。\n仅对非原生供应商的 Profile 有效。\n\n示例:\n  mcc set-key kimi-work sk-new"
    )]
    SetKey {
        /// Profile 名称
        name: String,

        /// 新的 API Key
        api_key: String,
    },

    /// ℹ️ 显示版本信息
    Version,
}
