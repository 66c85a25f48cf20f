#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

impl ClipType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ClipType::Intersection),
            1 => Some(ClipType::Union),
            2 => Some(ClipType::Difference),
            3 => Some(ClipType::Xor),
            _ => None,
        }
    }

    /// Merges the per-operand occupancy of one quadrant.
    #[inline]
    pub fn combine(self, clip: bool, subject: bool) -> bool {
        match self {
            ClipType::Intersection | ClipType::Difference => clip && subject,
            ClipType::Union => clip || subject,
            ClipType::Xor => clip ^ subject,
        }
    }

    /// `exists` is `above + 2 * below` per operand, indexed by `PolyType`.
    pub fn is_contributing(
        self,
        exists: [u8; 2],
        parity: [bool; 2],
        horiz: [HorizontalState; 2],
    ) -> bool {
        let subject = PolyType::Subject as usize;
        let clip = PolyType::Clip as usize;
        let has_clip = exists[clip] != 0;
        let has_subject = exists[subject] != 0;
        let in_clip = parity[clip];
        let in_subject = parity[subject];
        let clip_horizontal = horiz[clip] != HorizontalState::None;
        let subject_horizontal = horiz[subject] != HorizontalState::None;

        match self {
            ClipType::Intersection | ClipType::Difference => {
                (has_clip && (in_subject || subject_horizontal))
                    || (has_subject && (in_clip || clip_horizontal))
                    || (has_clip && has_subject && in_clip == in_subject)
            }
            ClipType::Union => {
                (has_clip && (!in_subject || subject_horizontal))
                    || (has_subject && (!in_clip || clip_horizontal))
                    || (has_clip && has_subject && in_clip == in_subject)
            }
            ClipType::Xor => has_clip || has_subject,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

impl PolyType {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn other(self) -> Self {
        match self {
            PolyType::Subject => PolyType::Clip,
            PolyType::Clip => PolyType::Subject,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum BundleState {
    Unbundled = 0,
    BundleHead = 1,
    BundleTail = 2,
}

/// Horizontal edge state of one operand while walking a scanbeam boundary.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum HorizontalState {
    None = 0,
    Bottom = 1,
    Top = 2,
}

use HorizontalState::{Bottom as BH, None as NH, Top as TH};

// Columns: [above, below, crossing] x [outside, inside].
const NEXT_HORIZONTAL_STATE: [[HorizontalState; 6]; 3] = [
    [BH, TH, TH, BH, NH, NH],
    [NH, NH, NH, NH, TH, TH],
    [NH, NH, NH, NH, BH, BH],
];

impl HorizontalState {
    /// `exists` must be non-zero.
    #[inline]
    pub fn next(self, exists: u8, parity: bool) -> Self {
        let column = (((exists as usize) - 1) << 1) + parity as usize;

        NEXT_HORIZONTAL_STATE[self as usize][column]
    }
}

/// Vertex class built from quadrant occupancy as
/// `tr | tl << 1 | br << 2 | bl << 3`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum VertexType {
    Empty = 0,
    ExternalMaximum = 1,
    ExternalLeftIntermediate = 2,
    TopEdge = 3,
    ExternalRightIntermediate = 4,
    RightEdge = 5,
    InternalMaximumAndMinimum = 6,
    InternalMinimum = 7,
    ExternalMinimum = 8,
    ExternalMaximumAndMinimum = 9,
    LeftEdge = 10,
    InternalLeftIntermediate = 11,
    BottomEdge = 12,
    InternalRightIntermediate = 13,
    InternalMaximum = 14,
    Full = 15,
}

const VERTEX_TYPES: [VertexType; 16] = [
    VertexType::Empty,
    VertexType::ExternalMaximum,
    VertexType::ExternalLeftIntermediate,
    VertexType::TopEdge,
    VertexType::ExternalRightIntermediate,
    VertexType::RightEdge,
    VertexType::InternalMaximumAndMinimum,
    VertexType::InternalMinimum,
    VertexType::ExternalMinimum,
    VertexType::ExternalMaximumAndMinimum,
    VertexType::LeftEdge,
    VertexType::InternalLeftIntermediate,
    VertexType::BottomEdge,
    VertexType::InternalRightIntermediate,
    VertexType::InternalMaximum,
    VertexType::Full,
];

impl VertexType {
    #[inline]
    pub fn from_quadrants(tr: bool, tl: bool, br: bool, bl: bool) -> Self {
        let class = (tr as usize) | ((tl as usize) << 1) | ((br as usize) << 2) | ((bl as usize) << 3);

        VERTEX_TYPES[class]
    }
}
