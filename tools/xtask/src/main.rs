//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-runtime`: 运行 morph-runtime 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率
//! - `preset-dump`: 以 JSON 输出动画预设表（供宿主/文档核对参数）

use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};
use morph_runtime::AnimationType;

#[derive(Parser)]
#[command(name = "xtask", about = "morph-runtime 开发辅助工具")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// 运行 fmt、clippy、test
    CheckAll,
    /// 运行 morph-runtime 覆盖率（HTML 报告）
    CovRuntime,
    /// 运行 workspace 覆盖率（排除 tool crates）
    CovWorkspace,
    /// 以 JSON 输出动画预设表
    PresetDump,
}

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    let status = cmd.status();
    match status {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.task {
        Task::CheckAll => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        Task::CovRuntime => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "morph-runtime", "--all-features", "--html"]);
            run(
                "cargo llvm-cov -p morph-runtime --all-features --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        Task::CovWorkspace => {
            ensure_cargo_llvm_cov_available()?;

            // 排除 tool crates，避免稀释覆盖率信号
            let mut cov = Command::new("cargo");
            cov.args([
                "llvm-cov",
                "--workspace",
                "--exclude",
                "xtask",
                "--all-features",
                "--html",
            ]);
            run(
                "cargo llvm-cov --workspace --exclude xtask --all-features --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        Task::PresetDump => preset_dump()?,
    }

    Ok(())
}

fn preset_dump() -> anyhow::Result<()> {
    let mut table = Vec::new();
    for animation in AnimationType::ALL {
        let preset = animation.preset();
        table.push(serde_json::json!({
            "name": animation.name(),
            "duration": preset.duration,
            "stagger": preset.stagger,
            "ease": preset.ease.name(),
            "from": preset.from,
        }));
    }
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
