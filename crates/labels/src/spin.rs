use serde::Deserialize;
use serde::Serialize;

/// Spin carried by a shot. Only meaningful in spin-tracking scenarios.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum Spin {
    #[default]
    Zero = 0,
    Top = 1,
    Back = 2,
    Flat = 3,
    SideTop = 4,
    SideBack = 5,
}

impl Spin {
    pub const fn all() -> [Self; 6] {
        [
            Self::Zero,
            Self::Top,
            Self::Back,
            Self::Flat,
            Self::SideTop,
            Self::SideBack,
        ]
    }
    pub const fn code(&self) -> u8 {
        *self as u8
    }
    /// Bilingual display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Zero => "無(Zero)",
            Self::Top => "上旋(Top)",
            Self::Back => "下旋(Back)",
            Self::Flat => "不旋(No spin)",
            Self::SideTop => "側上旋(Side top)",
            Self::SideBack => "側下旋(Side back)",
        }
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Spin {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| format!("invalid spin code: {}", n))
    }
}
impl From<Spin> for u8 {
    fn from(s: Spin) -> u8 {
        s.code()
    }
}

impl TryFrom<f64> for Spin {
    type Error = String;
    fn try_from(x: f64) -> Result<Self, Self::Error> {
        crate::integral(x).and_then(Self::try_from)
    }
}

/// str isomorphism, by numeric code
impl TryFrom<&str> for Spin {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| format!("invalid spin str: {}", s))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Spin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for spin in Spin::all() {
            assert_eq!(spin, Spin::try_from(u8::from(spin)).unwrap());
        }
        assert!(Spin::try_from(6u8).is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Spin::Back.label(), "下旋(Back)");
        assert_eq!(Spin::SideBack.to_string(), "側下旋(Side back)");
    }

    #[test]
    fn float_codes() {
        assert_eq!(Spin::try_from(2.0), Ok(Spin::Back));
        assert!(Spin::try_from(2.5).is_err());
    }
}
