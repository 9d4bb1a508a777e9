use serde::Deserialize;
use serde::Serialize;

/// Stroke or serve type of a single shot.
///
/// Codes 0–14 are rally strokes (0 is the empty placeholder) and codes
/// 15–18 are serves. The two partitions never overlap: a serve scenario only
/// ever starts from [`Action::serves`], an end-game scenario only from
/// [`Action::strokes`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum Action {
    #[default]
    Zero = 0,
    Drive = 1,
    Counter = 2,
    Smash = 3,
    Twist = 4,
    FastDrive = 5,
    FastPush = 6,
    Flip = 7,
    LongPush = 8,
    Knock = 9,
    Rub = 10,
    DropShot = 11,
    Chop = 12,
    Block = 13,
    Lob = 14,
    Traditional = 15,
    Hook = 16,
    Reverse = 17,
    Squat = 18,
}

impl Action {
    /// All nineteen codes in ascending order.
    pub const fn all() -> [Self; 19] {
        [
            Self::Zero,
            Self::Drive,
            Self::Counter,
            Self::Smash,
            Self::Twist,
            Self::FastDrive,
            Self::FastPush,
            Self::Flip,
            Self::LongPush,
            Self::Knock,
            Self::Rub,
            Self::DropShot,
            Self::Chop,
            Self::Block,
            Self::Lob,
            Self::Traditional,
            Self::Hook,
            Self::Reverse,
            Self::Squat,
        ]
    }
    /// Rally strokes, codes 0–14.
    pub const fn strokes() -> [Self; 15] {
        [
            Self::Zero,
            Self::Drive,
            Self::Counter,
            Self::Smash,
            Self::Twist,
            Self::FastDrive,
            Self::FastPush,
            Self::Flip,
            Self::LongPush,
            Self::Knock,
            Self::Rub,
            Self::DropShot,
            Self::Chop,
            Self::Block,
            Self::Lob,
        ]
    }
    /// Serves, codes 15–18.
    pub const fn serves() -> [Self; 4] {
        [Self::Traditional, Self::Hook, Self::Reverse, Self::Squat]
    }
    pub const fn code(&self) -> u8 {
        *self as u8
    }
    pub const fn is_serve(&self) -> bool {
        self.code() >= Self::Traditional.code()
    }
    /// Bilingual display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Zero => "無(Zero)",
            Self::Drive => "拉球(Drive)",
            Self::Counter => "反拉(Counter)",
            Self::Smash => "殺球(Smash)",
            Self::Twist => "擰球(Twist)",
            Self::FastDrive => "快帶(Fast drive)",
            Self::FastPush => "推擠(Fast push)",
            Self::Flip => "挑撥(Flip)",
            Self::LongPush => "拱球(Long push)",
            Self::Knock => "磕球(Fast push)",
            Self::Rub => "搓球(Long push)",
            Self::DropShot => "擺短(Drop shot)",
            Self::Chop => "削球(Chop)",
            Self::Block => "擋球(Block)",
            Self::Lob => "放高球(Lob)",
            Self::Traditional => "傳統(Traditional serve)",
            Self::Hook => "勾手(Hook serve)",
            Self::Reverse => "逆旋轉(Reverse serve)",
            Self::Squat => "下蹲式(Squat serve)",
        }
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Action {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| format!("invalid action code: {}", n))
    }
}
impl From<Action> for u8 {
    fn from(a: Action) -> u8 {
        a.code()
    }
}

/// tables may store codes as floats
impl TryFrom<f64> for Action {
    type Error = String;
    fn try_from(x: f64) -> Result<Self, Self::Error> {
        crate::integral(x).and_then(Self::try_from)
    }
}

/// str isomorphism, by numeric code
impl TryFrom<&str> for Action {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| format!("invalid action str: {}", s))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for action in Action::all() {
            assert_eq!(action, Action::try_from(u8::from(action)).unwrap());
        }
        assert!(Action::try_from(19u8).is_err());
    }

    #[test]
    fn partitions_are_disjoint_and_exhaustive() {
        let strokes = Action::strokes();
        let serves = Action::serves();
        assert!(strokes.iter().all(|a| !a.is_serve()));
        assert!(serves.iter().all(|a| a.is_serve()));
        assert_eq!(strokes.len() + serves.len(), Action::all().len());
        assert_eq!(
            serves.iter().map(Action::code).collect::<Vec<_>>(),
            vec![15, 16, 17, 18]
        );
        assert_eq!(
            strokes.iter().map(Action::code).collect::<Vec<_>>(),
            (0..=14).collect::<Vec<_>>()
        );
    }

    #[test]
    fn float_codes() {
        assert_eq!(Action::try_from(13.0), Ok(Action::Block));
        assert!(Action::try_from(13.5).is_err());
        assert!(Action::try_from(-1.0).is_err());
        assert!(Action::try_from(42.0).is_err());
    }

    #[test]
    fn parses_codes() {
        assert_eq!(Action::try_from(" 15 "), Ok(Action::Traditional));
        assert!(Action::try_from("drive").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Action::Block.label(), "擋球(Block)");
        assert_eq!(Action::Traditional.to_string(), "傳統(Traditional serve)");
    }

    #[test]
    fn serde_as_code() {
        assert_eq!(serde_json::to_string(&Action::Flip).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Action>("16").unwrap(), Action::Hook);
        assert!(serde_json::from_str::<Action>("99").is_err());
    }
}
