use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};

/// 入力となるキューブマップ画像ファイルへのパスを表現し、その妥当性を保証する構造体。
#[derive(Debug)]
pub struct ImageFilePath(PathBuf);

impl ImageFilePath {
    // --- Public Methods ---

    /// 新しい `ImageFilePath` インスタンスを生成する。
    ///
    /// パスが存在し、かつ通常のファイルであることを検証する。
    /// 拡張子の検証はここでは行わない。画像として読めるかどうかは
    /// デコーダーが最終的に判定するため、パス層では形式を限定しない。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // 存在し、かつファイルであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はファイルではありません。",
                path.display()
            )));
        }

        Ok(Self(path.to_path_buf()))
    }

    /// 内部の `Path` への参照を返す。
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// 拡張子を除いたファイル名（ベース名）を返す。
    ///
    /// ZIPアーカイブのファイル名 (`<ベース名>.zip`) を決めるために使う。
    /// ファイル名がUTF-8でない場合などに備えて "untitled" をフォールバックとする。
    pub fn file_stem(&self) -> &str {
        self.0
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for ImageFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// テストモジュール
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    /// 実在するファイルでImageFilePathが作成できるかテスト
    #[test]
    fn test_new_with_existing_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file_path = dir.path().join("pano.jpg");
        File::create(&file_path).expect("Failed to create file");

        let result = ImageFilePath::new(&file_path);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_path(), file_path.as_path());
    }

    /// 存在しないパスでエラーが返されるかテスト
    #[test]
    fn test_new_nonexistent_path_returns_error() {
        let result = ImageFilePath::new("this_image_should_not_exist.png");

        assert!(result.is_err());
        if let Err(PathError::InvalidPath(msg)) = result {
            assert!(msg.contains("は存在しません"));
        } else {
            panic!("Expected InvalidPath error for nonexistent file");
        }
    }

    /// ディレクトリパスでエラーが返されるかテスト
    #[test]
    fn test_new_directory_returns_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let result = ImageFilePath::new(dir.path());

        assert!(result.is_err());
        if let Err(PathError::InvalidPath(msg)) = result {
            assert!(msg.contains("はファイルではありません"));
        } else {
            panic!("Expected InvalidPath error for directory");
        }
    }

    /// file_stem()が拡張子を除いたベース名を返すかテスト
    #[test]
    fn test_file_stem_strips_extension() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file_path = dir.path().join("pano.jpg");
        fs::write(&file_path, b"dummy").expect("Failed to create file");

        let image_path = ImageFilePath::new(&file_path).unwrap();
        assert_eq!(image_path.file_stem(), "pano");
    }

    /// 拡張子のないファイル名でもfile_stem()が機能するかテスト
    #[test]
    fn test_file_stem_without_extension() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file_path = dir.path().join("panorama");
        fs::write(&file_path, b"dummy").expect("Failed to create file");

        let image_path = ImageFilePath::new(&file_path).unwrap();
        assert_eq!(image_path.file_stem(), "panorama");
    }
}
