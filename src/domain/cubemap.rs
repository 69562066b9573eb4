// use宣言：必要なクレートやモジュールをスコープに取り込む

use crate::domain::face_image::FaceImage;
use crate::domain::face_layout::{FacePlacement, Rotation};
use image::{imageops, DynamicImage, ImageReader};
use std::fmt;
use std::path::Path;

// --- 定数 ---

/// デコードを許可する最大ピクセル数。
///
/// 展開爆弾（小さいファイルが巨大なビットマップに展開される入力）への
/// ガードとして、ヘッダーから得た寸法がこの値を超える画像は
/// デコード前に拒否する。
pub const MAX_IMAGE_PIXELS: u64 = 200_500_000;

// --- 構造体定義 ---

/// 検証済みのキューブマップ合成画像。
///
/// `load` / `from_image` コンストラクタを通じてのみインスタンス化でき、
/// その際に以下の点が保証されます。
/// - 総ピクセル数が `MAX_IMAGE_PIXELS` を超えないこと
/// - 幅が4で割り切れること（`cube_size = width / 4` は整数）
/// - 高さがちょうど `3 * cube_size` であること（3行×4列のグリッドが
///   画像に過不足なく収まり、切り出される面がすべて正方形になる）
#[derive(Debug)]
pub struct Cubemap {
    image: DynamicImage,
    cube_size: u32,
}

// --- エラー定義 ---

/// `Cubemap` の読み込み・検証時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum CubemapError {
    /// 入力ファイルが開けない、または画像としてデコードできない場合。
    Decode(String),
    /// 総ピクセル数が `MAX_IMAGE_PIXELS` を超える場合。
    TooManyPixels { width: u32, height: u32 },
    /// 幅が4で割り切れない場合。
    WidthNotDivisible { width: u32 },
    /// 高さが `3 * cube_size` と一致しない場合。
    HeightMismatch { expected: u32, actual: u32 },
}

// --- 実装ブロック ---

impl Cubemap {
    /// 指定されたパスの画像を読み込み、検証済みの `Cubemap` を生成する。
    ///
    /// デコード前にヘッダーだけを読んで寸法を取得し、ピクセル数の上限と
    /// グリッド形状を検証する。巨大な画像を丸ごとメモリに展開してから
    /// 拒否するのでは遅いため、この順序は入れ替えられない。
    ///
    /// # 引数
    /// * `path`: 入力画像ファイルへのパス。
    ///
    /// # 戻り値
    /// * `Ok(Cubemap)`: 読み込みと検証に成功した場合。
    /// * `Err(CubemapError)`: デコード不能、または寸法が不正な場合。
    pub fn load(path: &Path) -> Result<Self, CubemapError> {
        // ヘッダーのみを読んで寸法を取得（本体のデコードはまだ行わない）
        let reader = ImageReader::open(path)
            .map_err(|e| CubemapError::Decode(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| CubemapError::Decode(e.to_string()))?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| CubemapError::Decode(e.to_string()))?;

        Self::validate_dimensions(width, height)?;

        // 検証を通過したので本体をデコードする
        let image = ImageReader::open(path)
            .map_err(|e| CubemapError::Decode(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| CubemapError::Decode(e.to_string()))?
            .decode()
            .map_err(|e| CubemapError::Decode(e.to_string()))?;

        Ok(Self {
            cube_size: width / 4,
            image,
        })
    }

    /// デコード済みの画像から `Cubemap` を生成する（検証は `load` と同一）。
    pub fn from_image(image: DynamicImage) -> Result<Self, CubemapError> {
        let width = image.width();
        Self::validate_dimensions(width, image.height())?;
        Ok(Self {
            cube_size: width / 4,
            image,
        })
    }

    /// 寸法の検証を行うヘルパー関数。
    fn validate_dimensions(width: u32, height: u32) -> Result<(), CubemapError> {
        if (width as u64) * (height as u64) > MAX_IMAGE_PIXELS {
            return Err(CubemapError::TooManyPixels { width, height });
        }
        if width % 4 != 0 {
            return Err(CubemapError::WidthNotDivisible { width });
        }
        let cube_size = width / 4;
        if height != cube_size * 3 {
            return Err(CubemapError::HeightMismatch {
                expected: cube_size * 3,
                actual: height,
            });
        }
        Ok(())
    }

    /// レイアウト上の1セルを切り出し、面に応じた回転を適用して返す。
    ///
    /// 切り出し矩形は `(col * cube_size, row * cube_size)` を左上とする
    /// `cube_size × cube_size` の正方形。上面は反時計回りに90度、
    /// 下面は時計回りに90度回転させ、他の面はそのまま返す。
    /// JPEGはアルファチャンネルを持てないため、ここでRGB8に変換する。
    pub fn extract(&self, placement: &FacePlacement) -> FaceImage {
        let sx = self.cube_size * placement.col;
        let sy = self.cube_size * placement.row;
        let cropped = self
            .image
            .crop_imm(sx, sy, self.cube_size, self.cube_size)
            .to_rgb8();

        let pixels = match placement.face.rotation() {
            Rotation::None => cropped,
            Rotation::QuarterTurnCcw => imageops::rotate270(&cropped),
            Rotation::QuarterTurnCw => imageops::rotate90(&cropped),
        };

        FaceImage::new(placement.face, pixels)
    }

    // --- ゲッターメソッド ---

    pub fn width(&self) -> u32 {
        self.image.width()
    }
    pub fn height(&self) -> u32 {
        self.image.height()
    }
    pub fn cube_size(&self) -> u32 {
        self.cube_size
    }
}

// --- トレイト実装 ---

impl fmt::Display for CubemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubemapError::Decode(msg) => {
                write!(f, "画像をデコードできません: {}", msg)
            }
            CubemapError::TooManyPixels { width, height } => {
                write!(
                    f,
                    "画像が大きすぎます: {}x{} は上限 {} ピクセルを超えています。",
                    width, height, MAX_IMAGE_PIXELS
                )
            }
            CubemapError::WidthNotDivisible { width } => {
                write!(
                    f,
                    "幅 {} が4で割り切れないため、面のサイズを決定できません。",
                    width
                )
            }
            CubemapError::HeightMismatch { expected, actual } => {
                write!(
                    f,
                    "高さが不正です: 3行レイアウトには {} が必要ですが、実際は {} です。",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for CubemapError {}

// --- テストモジュール ---
