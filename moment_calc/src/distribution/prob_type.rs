use std::fmt::Debug;
use std::iter::Sum;

use num::{Float, FromPrimitive, ToPrimitive};

use crate::PROB_TOLERANCE;

// The minimum collection of traits required of the probability type for the Distribution and NumDistribution traits
pub trait Prob: Float + FromPrimitive + Sum + Debug {}
impl<T: Float + FromPrimitive + Sum + Debug> Prob for T {}

pub fn tolerance<P: Prob>() -> P {
    P::from_f64(PROB_TOLERANCE).unwrap_or_else(P::epsilon)
}

// keys that can't be represented as P become NaN, which then poisons every moment
pub fn convert_key<K: ToPrimitive, P: Prob>(k: &K) -> P {
    k.to_f64().and_then(P::from_f64).unwrap_or_else(P::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_matches_constant() {
        assert_eq!(PROB_TOLERANCE, tolerance::<f64>());
        assert_eq!(PROB_TOLERANCE as f32, tolerance::<f32>());
    }

    #[test]
    fn test_convert_key() {
        assert_eq!(3.0, convert_key::<isize, f64>(&3));
        assert_eq!(-2.5, convert_key::<f64, f64>(&-2.5));
        assert!(convert_key::<f64, f64>(&f64::NAN).is_nan());
    }
}
