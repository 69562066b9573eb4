use crate::domain::face_layout::Face;
use image::RgbImage;
use std::fmt;
use std::path::{Path, PathBuf};

// 出力は入力の拡張子にかかわらずJPEG固定
const FILE_EXTENSION: &str = "jpg";

/// 切り出し（と回転）が済んだ1つの面の画像。
///
/// `Cubemap::extract` を通じてのみ生成され、生成された時点で回転は
/// 適用済み。以後ピクセルが変更されることはない。
#[derive(Debug)]
pub struct FaceImage {
    face: Face,
    pixels: RgbImage,
}

/// 面画像のファイル保存時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum FaceSaveError {
    /// JPEGのエンコードまたはディスクへの書き込みに失敗した場合。
    WriteFailed { file_name: String, reason: String },
}

impl FaceImage {
    pub(crate) fn new(face: Face, pixels: RgbImage) -> Self {
        Self { face, pixels }
    }

    /// 面名から決まる出力ファイル名（例: `top.jpg`）を返す。
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.face.name(), FILE_EXTENSION)
    }

    /// 指定されたディレクトリにJPEGとして保存し、書き込んだパスを返す。
    ///
    /// 同名のファイルが存在する場合は上書きする。
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, FaceSaveError> {
        let path = dir.join(self.file_name());
        // 拡張子 .jpg からJPEGエンコーダーが選択される
        self.pixels.save(&path).map_err(|e| FaceSaveError::WriteFailed {
            file_name: self.file_name(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }

    // --- ゲッターメソッド ---

    pub fn face(&self) -> Face {
        self.face
    }
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

impl fmt::Display for FaceSaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceSaveError::WriteFailed { file_name, reason } => {
                write!(f, "'{}' の保存に失敗しました: {}", file_name, reason)
            }
        }
    }
}

impl std::error::Error for FaceSaveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::tempdir;

    #[test]
    fn file_name_uses_fixed_jpg_extension() {
        let face = FaceImage::new(Face::Top, RgbImage::new(2, 2));
        assert_eq!(face.file_name(), "top.jpg");

        let face = FaceImage::new(Face::Back, RgbImage::new(2, 2));
        assert_eq!(face.file_name(), "back.jpg");
    }

    /// 保存したファイルがJPEGとしてデコードでき、寸法が保たれることをテスト
    #[test]
    fn save_to_dir_writes_decodable_jpeg() {
        let dir = tempdir().expect("Failed to create temp directory");
        let face = FaceImage::new(Face::Front, RgbImage::new(16, 16));

        let path = face.save_to_dir(dir.path()).expect("save should succeed");
        assert_eq!(path, dir.path().join("front.jpg"));

        // JPEGは非可逆圧縮のため、寸法のみを検証する
        let reloaded = image::open(&path).expect("saved file should decode");
        assert_eq!(reloaded.width(), 16);
        assert_eq!(reloaded.height(), 16);
    }

    /// 書き込めないパスへの保存がWriteFailedになることをテスト
    #[test]
    fn save_to_nonexistent_dir_returns_error() {
        let face = FaceImage::new(Face::Left, RgbImage::new(2, 2));
        let res = face.save_to_dir(Path::new("no_such_directory_for_faces"));

        assert!(res.is_err());
        if let Err(FaceSaveError::WriteFailed { file_name, .. }) = res {
            assert_eq!(file_name, "left.jpg");
        } else {
            panic!("Expected WriteFailed error");
        }
    }
}
