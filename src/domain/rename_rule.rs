/// リネーム規則を表現する構造体。
///
/// ファイル名の末尾にある固定サフィックスを置換文字列に差し替える。
/// サフィックスはファイル名の「末尾」にのみマッチし、途中に同じ文字列が
/// 現れてもマッチしない。
#[derive(Debug)]
pub struct RenameRule {
    /// 取り除く対象のサフィックス（`.png` を含む）
    suffix: String,
    /// サフィックスの代わりに付与する文字列
    replacement: String,
}

/// 元のファイル名に付与されているサムネイル用サフィックス
const TARGET_SUFFIX: &str = "-300x169-1-400x250.png";
/// 置換後の拡張子
const REPLACEMENT: &str = ".png";

impl RenameRule {
    // コンストラクタ: サフィックスと置換文字列を受け取る
    pub fn new(suffix: &str, replacement: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            replacement: replacement.to_string(),
        }
    }

    /// ファイル名に規則を適用し、リネーム後の名前を返す。
    ///
    /// # 戻り値
    /// * `Some(new_name)`: `.png` ファイルで、かつ末尾がサフィックスに一致した場合。
    /// * `None`: `.png` ファイルではない、またはサフィックスに一致しなかった場合。
    pub fn apply(&self, file_name: &str) -> Option<String> {
        // `.png` で終わらないファイルは対象外
        if !file_name.ends_with(".png") {
            return None;
        }

        // strip_suffix は末尾一致のみを判定するため、
        // ファイル名の途中にサフィックスと同じ文字列があってもマッチしない
        let prefix = file_name.strip_suffix(self.suffix.as_str())?;
        Some(format!("{}{}", prefix, self.replacement))
    }
}

impl Default for RenameRule {
    // 既定の規則: `-300x169-1-400x250.png` を `.png` に置換する
    fn default() -> Self {
        Self::new(TARGET_SUFFIX, REPLACEMENT)
    }
}
