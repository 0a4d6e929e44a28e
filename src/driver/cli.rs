//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapter::config::ConfigOverrides;

/// テストプロジェクトをKatalon Analyticsにアップロードする CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "kit-uploader")]
#[command(about = "Upload test projects to Katalon Analytics", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upload a test project archive
    Upload(UploadArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct UploadArgs {
    /// Path of the archive to upload
    pub path: PathBuf,

    /// Katalon Analytics URL
    #[arg(short = 's', long, value_name = "VALUE")]
    pub server_url: Option<String>,

    /// Email
    #[arg(short = 'u', long, value_name = "VALUE")]
    pub username: Option<String>,

    /// Password
    #[arg(short = 'p', long, value_name = "VALUE")]
    pub password: Option<String>,

    /// Katalon Project Id
    #[arg(short = 'P', long, value_name = "VALUE")]
    pub project: Option<String>,
}

impl UploadArgs {
    /// 環境変数の設定に重ねる上書き値
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            server_url: self.server_url.clone(),
            email: self.username.clone(),
            apikey: self.password.clone(),
            project_id: self.project.clone(),
        }
    }
}
