use clap::Parser;
use std::path::PathBuf;

/// PNGファイル名から固定のサムネイル用サフィックスを取り除いてリネームするツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 処理対象のディレクトリのパス (省略時はカレントディレクトリ)
    pub directory: Option<PathBuf>,
}
