//! キューブマップの 3行×4列 レイアウトを定義するモジュール。
//!
//! 合成画像のどのセルがどの面に対応するかは固定のレイアウト表
//! (`FACE_LAYOUT`) で表現する。12セルのうち6セルだけが面を持ち、
//! 残りは空セルとしてスキップされる。

use std::fmt;

/// キューブの6面を表す列挙型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

/// 面の切り出し後に適用する回転。
///
/// 上面は反時計回りに90度、下面は時計回りに90度回転させる。
/// それ以外の面は回転しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    QuarterTurnCcw,
    QuarterTurnCw,
}

impl Face {
    /// 出力ファイル名やアーカイブエントリ名に使う小文字の面名を返す。
    pub fn name(&self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Left => "left",
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Bottom => "bottom",
        }
    }

    /// この面に適用する回転を返す。
    pub fn rotation(&self) -> Rotation {
        match self {
            Face::Top => Rotation::QuarterTurnCcw,
            Face::Bottom => Rotation::QuarterTurnCw,
            _ => Rotation::None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 3行×4列の固定レイアウト表。`None` は空セル。
///
/// ```text
/// [  -  ,  top  ,   -  ,  -  ]
/// [ left, front , right, back ]
/// [  -  , bottom,   -  ,  -  ]
/// ```
pub const FACE_LAYOUT: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::Top), None, None],
    [
        Some(Face::Left),
        Some(Face::Front),
        Some(Face::Right),
        Some(Face::Back),
    ],
    [None, Some(Face::Bottom), None, None],
];

/// レイアウト上の1つの面とそのグリッド位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePlacement {
    pub face: Face,
    pub row: u32,
    pub col: u32,
}

/// レイアウト表を行優先（行0..3、列0..4）で走査し、面を持つセルだけを返す。
///
/// 返される順序は top, left, front, right, back, bottom で固定。
pub fn placements() -> impl Iterator<Item = FacePlacement> {
    FACE_LAYOUT.iter().enumerate().flat_map(|(row, cells)| {
        cells.iter().enumerate().filter_map(move |(col, cell)| {
            cell.map(|face| FacePlacement {
                face,
                row: row as u32,
                col: col as u32,
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// placements()が6つの面を行優先の順序で返すかテスト
    #[test]
    fn test_placements_row_major_order() {
        let placements: Vec<FacePlacement> = placements().collect();

        assert_eq!(placements.len(), 6);
        // 行優先の順序とグリッド座標を検証
        let expected = [
            (Face::Top, 0, 1),
            (Face::Left, 1, 0),
            (Face::Front, 1, 1),
            (Face::Right, 1, 2),
            (Face::Back, 1, 3),
            (Face::Bottom, 2, 1),
        ];
        for (placement, (face, row, col)) in placements.iter().zip(expected.iter()) {
            assert_eq!(placement.face, *face);
            assert_eq!(placement.row, *row);
            assert_eq!(placement.col, *col);
        }
    }

    /// 面名が小文字の固定文字列であるかテスト
    #[test]
    fn test_face_names() {
        assert_eq!(Face::Top.name(), "top");
        assert_eq!(Face::Left.name(), "left");
        assert_eq!(Face::Front.name(), "front");
        assert_eq!(Face::Right.name(), "right");
        assert_eq!(Face::Back.name(), "back");
        assert_eq!(Face::Bottom.name(), "bottom");
    }

    /// 上面と下面だけが回転を持つかテスト
    #[test]
    fn test_only_top_and_bottom_rotate() {
        assert_eq!(Face::Top.rotation(), Rotation::QuarterTurnCcw);
        assert_eq!(Face::Bottom.rotation(), Rotation::QuarterTurnCw);
        for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
            assert_eq!(face.rotation(), Rotation::None);
        }
    }

    /// レイアウト表の空セルが6つであるかテスト
    #[test]
    fn test_layout_has_six_empty_cells() {
        let empty_count = FACE_LAYOUT
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count();
        assert_eq!(empty_count, 6);
    }
}
