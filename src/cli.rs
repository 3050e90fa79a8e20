// src/cli.rs
use std::{num::NonZeroUsize, path::PathBuf, str::FromStr};

use clap::{ArgAction, Parser};
use mailtally_domain::{DEFAULT_COLUMN, DEFAULT_SOURCE, SortOrder};

use crate::options::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "mailtally", version, about = "顧客CSVのメールドメイン別集計ツール")]
pub struct Args {
    /// 入力CSVファイル（1行目はヘッダとして読み飛ばす）
    #[arg(default_value = DEFAULT_SOURCE)]
    pub path: PathBuf,

    /// メール列の位置（0始まり）
    #[arg(short, long, default_value_t = DEFAULT_COLUMN)]
    pub column: usize,

    /// 件数の並び順 (asc | desc)
    #[arg(long, default_value = "desc", value_parser = SortOrder::from_str)]
    pub order: SortOrder,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 上位N件のみ表示（1以上）
    #[arg(long)]
    pub top: Option<NonZeroUsize>,

    /// "user@" や "@example.com" のように片側が空の値を無効とする
    #[arg(long)]
    pub strict_emails: bool,

    /// 列を保持せず1行ずつ集計する
    #[arg(long)]
    pub streaming: bool,

    /// ログを詳細化 (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
