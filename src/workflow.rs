//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 合成画像から面画像とZIPアーカイブを生成する処理フローを実装します。

use crate::cli::Args;
use cubemap_cut::domain::archive::face_archive::FaceArchive;
use cubemap_cut::domain::cubemap::Cubemap;
use cubemap_cut::domain::face_layout;
use cubemap_cut::domain::input_source::image_file_path::ImageFilePath;
use cubemap_cut::error::AppError;
use std::path::{Path, PathBuf};

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: 面画像6枚とZIPアーカイブの生成に成功した場合。
/// * `Err(AppError)`: 入力の検証・デコード・書き込みのいずれかに失敗した場合。
pub fn run(args: Args) -> Result<(), AppError> {
    // 入力パスの検証
    // ImageFilePath::new を使うことで、パスが存在し、かつファイルであることが保証される。
    let input = ImageFilePath::new(&args.input)?;

    // 出力先はカレントディレクトリ（面画像もアーカイブもここに書く）
    let output_dir = std::env::current_dir()?;
    execute(&input, &output_dir)
}

/// 検証済みの入力から面画像とアーカイブを生成します。
///
/// 出力先を引数に取るのは、テストから一時ディレクトリを指定できるようにするため。
fn execute(input: &ImageFilePath, output_dir: &Path) -> Result<(), AppError> {
    // 1. 合成画像の読み込みと検証
    // ここで失敗した場合はファイルを1つも書かずに終了する。
    let cubemap = Cubemap::load(input.as_path())?;
    println!(
        "入力画像: {} ({}x{}, cube_size = {})",
        input,
        cubemap.width(),
        cubemap.height(),
        cubemap.cube_size()
    );

    // 2. レイアウト表を行優先で走査し、各面を切り出して保存
    let mut saved_files: Vec<(String, PathBuf)> = Vec::new();
    for placement in face_layout::placements() {
        let sx = cubemap.cube_size() * placement.col;
        let sy = cubemap.cube_size() * placement.row;
        println!("  面 '{}' を切り出し中: (x {}, y {})", placement.face, sx, sy);

        let face = cubemap.extract(&placement);
        // 面画像の保存失敗は致命的エラーとして即座に伝播させる。
        // 既に保存済みの面画像の後始末は行わない（部分的失敗の回復はしない）。
        let path = face.save_to_dir(output_dir)?;
        saved_files.push((face.file_name(), path));
    }

    // 3. アーカイブ名を入力のベース名から決めて、面画像をまとめる
    let archive_path = output_dir.join(format!("{}.zip", input.file_stem()));
    println!("ZIPアーカイブを作成中: {}", archive_path.display());
    let archive = FaceArchive::create(&archive_path, &saved_files)?;

    println!(
        "完了: {} 枚の面画像と {} を生成しました。",
        archive.entry_count(),
        archive.path().display()
    );
    Ok(())
}
