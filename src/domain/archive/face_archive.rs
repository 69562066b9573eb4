use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 作成済みのZIPアーカイブを表す構造体。
///
/// `create` を通じてのみ生成され、生成された時点でアーカイブは
/// ディスクにフラッシュ済みであることが保証される。
#[derive(Debug)]
pub struct FaceArchive {
    path: PathBuf,
    entry_count: usize,
}

/// アーカイブ作成時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum ArchiveError {
    /// アーカイブファイル自体を作成できない場合。
    CreateFailed { path: String, reason: String },
    /// 個々のエントリの書き込みに失敗した場合。
    EntryWriteFailed { name: String, reason: String },
    /// セントラルディレクトリの書き出し（finish）に失敗した場合。
    FinishFailed(String),
}

impl FaceArchive {
    /// 面画像ファイルをまとめたZIPアーカイブを作成する。
    ///
    /// エントリは無圧縮（Stored）で格納され、エントリ名には各面の
    /// ファイル名をそのまま使う。元のファイルはアーカイブ後も
    /// 削除せずディスクに残す。
    ///
    /// # 引数
    /// * `archive_path`: 作成するZIPファイルのパス。
    /// * `entries`: (エントリ名, 取り込むファイルのパス) の組のスライス。
    ///
    /// # 戻り値
    /// * `Ok(FaceArchive)`: すべてのエントリを書き込み、フラッシュできた場合。
    /// * `Err(ArchiveError)`: 作成・書き込み・フラッシュのいずれかに失敗した場合。
    pub fn create(
        archive_path: &Path,
        entries: &[(String, PathBuf)],
    ) -> Result<Self, ArchiveError> {
        let file = File::create(archive_path).map_err(|e| ArchiveError::CreateFailed {
            path: archive_path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut zip = ZipWriter::new(file);

        for (name, path) in entries {
            Self::write_entry(&mut zip, name, path)?;
        }

        // finish() がセントラルディレクトリを書き出してディスクに確定させる。
        // 途中でエラーになった場合はZipWriterのDropが後始末を行い、
        // 不完全なアーカイブファイルはそのまま放棄される。
        zip.finish()
            .map_err(|e| ArchiveError::FinishFailed(e.to_string()))?;

        Ok(Self {
            path: archive_path.to_path_buf(),
            entry_count: entries.len(),
        })
    }

    /// 1つのファイルをアーカイブのエントリとして書き込むヘルパー関数。
    ///
    /// `self` に依存しないため、関連関数として定義。
    fn write_entry(
        zip: &mut ZipWriter<File>,
        name: &str,
        path: &Path,
    ) -> Result<(), ArchiveError> {
        let entry_failed = |e: &dyn fmt::Display| ArchiveError::EntryWriteFailed {
            name: name.to_string(),
            reason: e.to_string(),
        };

        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(name, options).map_err(|e| entry_failed(&e))?;

        let mut source = File::open(path).map_err(|e| entry_failed(&e))?;
        io::copy(&mut source, zip).map_err(|e| entry_failed(&e))?;
        Ok(())
    }

    // --- ゲッターメソッド ---

    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::CreateFailed { path, reason } => {
                write!(f, "アーカイブ '{}' を作成できません: {}", path, reason)
            }
            ArchiveError::EntryWriteFailed { name, reason } => {
                write!(f, "エントリ '{}' の書き込みに失敗しました: {}", name, reason)
            }
            ArchiveError::FinishFailed(reason) => {
                write!(f, "アーカイブの書き出しに失敗しました: {}", reason)
            }
        }
    }
}

impl std::error::Error for ArchiveError {}
