use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length in PDF points (1/72 of an inch). All layout arithmetic happens in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

/// A length in inches, convertible into [Pt]
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(Pt::from(In(0.5)), Pt(36.0));
    }

    #[test]
    fn points_sum_and_scale() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(3.5)].into_iter().sum();
        assert_eq!(total, Pt(7.0));
        assert_eq!(Pt(24.0) * 1.5, Pt(36.0));
        assert_eq!(Pt(72.0) / 2.0, Pt(36.0));
        assert_eq!(Pt(10.0) - Pt(4.0), Pt(6.0));
    }
}
