use clap::Parser;
use std::path::PathBuf;

/// 3行×4列のキューブマップ合成画像から6枚の面画像を切り出し、
/// ZIPアーカイブにまとめるツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 入力となる合成画像のパス
    #[arg(required = true, value_name = "filename.jpg|png")]
    pub input: PathBuf,
}
