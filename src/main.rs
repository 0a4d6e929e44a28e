//! Kit Uploader - Test Project Uploader
//!
//! テストプロジェクトのアーカイブを Katalon Analytics にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use env_logger::{Env, Target};

use kit_uploader::adapter::config::Config;
use kit_uploader::driver::{Args, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let args = Args::parse();

    // Environment defaults; CLI flags are applied by the workflow
    let config = Config::from_env();

    let workflow = UploadWorkflow::new(config)?;

    // Failures are logged by the workflow; the exit status does not reflect them
    workflow.run(args).await;

    Ok(())
}
