use crate::domain::archive::face_archive::ArchiveError;
use crate::domain::cubemap::CubemapError;
use crate::domain::face_image::FaceSaveError;
use crate::domain::input_source::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー: {0}")]
    Path(#[from] PathError),

    #[error("入力画像のエラー: {0}")]
    Cubemap(#[from] CubemapError),

    #[error("面画像の保存エラー: {0}")]
    FaceSave(#[from] FaceSaveError),

    #[error("アーカイブのエラー: {0}")]
    Archive(#[from] ArchiveError),
}

impl AppError {
    /// エラーの種類を区別する終了コードを返す。
    ///
    /// 1: 入力の問題（パス不正、デコード失敗、寸法不正）
    /// 3: 書き込みの問題（面画像の保存、アーカイブ作成）
    /// ※ 2 は引数不足時に clap が使用する。
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Path(_) | AppError::Cubemap(_) => 1,
            AppError::Io(_) | AppError::FaceSave(_) | AppError::Archive(_) => 3,
        }
    }
}
