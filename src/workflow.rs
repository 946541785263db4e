//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! リネーム処理の具体的なフローを実装します。

use crate::cli::Args;
use crate::domain::directory_path::DirectoryPath;
use crate::domain::rename_rule::RenameRule;
use crate::error::AppError;
use std::env;
use std::fs;

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: すべての処理が正常に完了した場合。
/// * `Err(AppError)`: ディレクトリの検証・列挙、またはリネームに失敗した場合。
pub fn run(args: Args) -> Result<(), AppError> {
    // 1. 処理対象ディレクトリの決定
    // 引数が指定されていればそれを使用し、なければカレントディレクトリとする。
    let directory = match args.directory {
        Some(path) => path,
        None => env::current_dir()?,
    };

    // 2. バナー行を出力
    // 元スクリプトと同様、ディレクトリの検証より前に出力する。
    println!("Verarbeite Dateien in: {}", directory.display());

    // 3. 入力ディレクトリの検証
    // DirectoryPath::new を使うことで、パスが存在し、かつディレクトリであることが保証される。
    let input_dir = DirectoryPath::new(&directory)?;

    // 4. リネームパスを一度だけ実行
    rename_png_files(&input_dir, &RenameRule::default())
}

/// ディレクトリ直下のエントリを列挙し、規則に一致した名前をリネームします。
///
/// エントリの種別（ファイルかディレクトリか）は区別しない。名前だけで判定するため、
/// 規則に一致する名前を持つサブディレクトリも同様にリネームされる。
/// 最初のエラーで処理を中断し、それまでに完了したリネームはそのまま残る。
fn rename_png_files(input_dir: &DirectoryPath, rule: &RenameRule) -> Result<(), AppError> {
    for entry_result in input_dir.entries()? {
        let entry = entry_result?;
        let file_name_os = entry.file_name();

        // 規則はASCII文字列のため、UTF-8に変換できないファイル名はマッチし得ない
        let file_name = match file_name_os.to_str() {
            Some(name) => name,
            None => continue,
        };

        // 規則に一致しない名前は何も出力せずスキップする
        if let Some(new_name) = rule.apply(file_name) {
            let old_path = input_dir.as_path().join(file_name);
            let new_path = input_dir.as_path().join(&new_name);
            fs::rename(&old_path, &new_path)?;
            println!("Umbenannt: {} -> {}", file_name, new_name);
        }
    }

    Ok(())
}
