use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

use itertools::Itertools;
use num::ToPrimitive;

use crate::distribution::prob_type::{convert_key, Prob};
use crate::distribution::Distribution;
use crate::num_distribution::NumDistribution;
use crate::outcome::Outcome;
use crate::DistError;

/// A distribution that was checked once when it was built.
///
/// The moments still go through [`NumDistribution`], which checks again on
/// every call.
#[derive(PartialEq, Clone, Debug)]
pub struct MapDist<K: Ord + Clone, P: Prob> {
    lower_bound: K,
    upper_bound: K,
    pdf_map: BTreeMap<K, P>,
}

pub type MD64 = MapDist<Outcome, f64>;
pub type Die64 = MapDist<isize, f64>;

impl<K: Ord + Clone, P: Prob> MapDist<K, P> {
    pub fn backing_map(&self) -> &BTreeMap<K, P> {
        &self.pdf_map
    }

    pub fn get_lb(&self) -> &K {
        &self.lower_bound
    }

    pub fn get_ub(&self) -> &K {
        &self.upper_bound
    }

    pub fn from_map(m: BTreeMap<K, P>) -> Result<Self, DistError> {
        let (lb, ub) = match (m.first_key_value(), m.last_key_value()) {
            (Some((lb, _)), Some((ub, _))) => (lb.clone(), ub.clone()),
            _ => return Err(DistError::Empty),
        };
        m.validate()?;
        Ok(Self {
            lower_bound: lb,
            upper_bound: ub,
            pdf_map: m,
        })
    }

    // repeated keys accumulate
    pub fn from_pairs<I>(pairs: I) -> Result<Self, DistError>
    where
        I: IntoIterator<Item = (K, P)>,
    {
        let mut pdf_map: BTreeMap<K, P> = BTreeMap::new();
        for (k, p) in pairs {
            pdf_map.entry(k)
                .and_modify(|old| *old = *old + p)
                .or_insert(p);
        }
        MapDist::from_map(pdf_map)
    }

    pub fn new_constant(k: K) -> Self {
        Self {
            lower_bound: k.clone(),
            upper_bound: k.clone(),
            pdf_map: BTreeMap::from([(k, P::one())]),
        }
    }

    pub fn map_keys<L, F>(&self, f: F) -> Result<MapDist<L, P>, DistError>
    where
        L: Ord + Clone,
        F: Fn(&K) -> L,
    {
        MapDist::from_pairs(self.pdf_map.iter().map(|(k, p)| (f(k), *p)))
    }

    pub fn independent_trials<L>(&self, other: &MapDist<L, P>) -> Result<MapDist<(K, L), P>, DistError>
    where
        L: Ord + Clone,
    {
        let pdf_map: BTreeMap<(K, L), P> = itertools::iproduct!(self.pdf_map.iter(), other.pdf_map.iter())
            .map(|((k, p), (l, q))| ((k.clone(), l.clone()), *p * *q))
            .collect();
        MapDist::from_map(pdf_map)
    }

    /// Distribution of the sum of `n` independent copies of `self`.
    pub fn sum_of(&self, n: usize) -> Result<Self, DistError>
    where
        K: Add<K, Output = K>,
    {
        if n == 0 {
            return Err(DistError::InvalidBounds);
        }
        let mut total = self.clone();
        for _ in 1..n {
            total = total
                .independent_trials(self)?
                .map_keys(|(a, b)| a.clone() + b.clone())?;
        }
        Ok(total)
    }
}

impl<P: Prob> MapDist<isize, P> {
    pub fn new_uniform(lb: isize, ub: isize) -> Result<Self, DistError> {
        if lb > ub {
            return Err(DistError::InvalidBounds);
        }
        let count = ub.checked_sub(lb)
            .and_then(|d| d.checked_add(1))
            .and_then(P::from_isize)
            .ok_or(DistError::InvalidBounds)?;
        let p = P::one() / count;
        MapDist::from_map((lb..=ub).map(|k| (k, p)).collect())
    }

    pub fn new_dice(sides: isize) -> Result<Self, DistError> {
        if sides < 1 {
            return Err(DistError::InvalidBounds);
        }
        MapDist::new_uniform(1, sides)
    }
}

impl<K: Ord + Clone, P: Prob> Distribution<K, P> for MapDist<K, P> {
    fn fold_outcomes<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &K, P) -> A
    {
        self.pdf_map.fold_outcomes(init, f)
    }

    fn pdf_ref(&self, k: &K) -> P {
        self.pdf_map.pdf_ref(k)
    }

    fn len(&self) -> usize {
        self.pdf_map.len()
    }
}

impl<K, P> NumDistribution<K, P> for MapDist<K, P>
where
    K: Ord + Clone + ToPrimitive,
    P: Prob,
{
    fn convert(&self, k: &K) -> P {
        convert_key(k)
    }
}

// {1: 0.16666666666666666, 2: 0.16666666666666666, ...}
impl<K, P> Display for MapDist<K, P>
where
    K: Ord + Clone + Display,
    P: Prob + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let body = self.pdf_map.iter().map(|(k, p)| format!("{}: {}", k, p)).join(", ");
        write!(f, "{{{}}}", body)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use approx::assert_abs_diff_eq;

    use crate::distribution::Distribution;
    use crate::map_dist::{Die64, MapDist, MD64};
    use crate::num_distribution::NumDistribution;
    use crate::outcome::Outcome;
    use crate::DistError;

    #[test]
    fn test_new_dice() {
        let d6: Die64 = MapDist::new_dice(6).unwrap();
        assert_eq!(&1, d6.get_lb());
        assert_eq!(&6, d6.get_ub());
        assert_eq!(6, Distribution::len(&d6));
        assert_abs_diff_eq!(1.0 / 6.0, d6.pdf_ref(&4), epsilon = 1e-15);
        assert_eq!(0.0, d6.pdf_ref(&7));
        assert_abs_diff_eq!(3.5, d6.expected_value().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_bad_bounds() {
        assert_eq!(Err(DistError::InvalidBounds), Die64::new_dice(0));
        assert_eq!(Err(DistError::InvalidBounds), Die64::new_uniform(3, 2));
        assert_eq!(Err(DistError::InvalidBounds), Die64::new_uniform(isize::MIN, isize::MAX));
        assert_eq!(Err(DistError::InvalidBounds), Die64::new_uniform(-1, isize::MAX));
        assert_eq!(Err(DistError::InvalidBounds), Die64::new_dice(6).unwrap().sum_of(0));
    }

    #[test]
    fn test_from_map_errors() {
        let empty: BTreeMap<isize, f64> = BTreeMap::new();
        assert_eq!(Err(DistError::Empty), MapDist::from_map(empty));

        let short = BTreeMap::from([(1, 0.3), (2, 0.3)]);
        match MapDist::from_map(short) {
            Err(DistError::InvalidDistribution(sum)) => assert_abs_diff_eq!(0.6, sum, epsilon = 1e-12),
            other => panic!("expected InvalidDistribution, got {:?}", other),
        }
    }

    #[test]
    fn test_from_pairs_accumulates() {
        let rv: MD64 = MapDist::from_pairs([
            (Outcome(1.0), 0.25),
            (Outcome(2.0), 0.5),
            (Outcome(1.0), 0.25),
        ]).unwrap();
        assert_eq!(2, Distribution::len(&rv));
        assert_eq!(0.5, rv.pdf_ref(&Outcome(1.0)));
        assert_abs_diff_eq!(1.5, rv.expected_value().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_constant() {
        let rv: MapDist<isize, f64> = MapDist::new_constant(5);
        assert_eq!(&5, rv.get_lb());
        assert_eq!(&5, rv.get_ub());
        assert_eq!(5.0, rv.expected_value().unwrap());
        assert_eq!(0.0, rv.variance().unwrap());
        assert_eq!(0.0, rv.skewness().unwrap());
        assert_eq!(0.0, rv.kurtosis().unwrap());
    }

    #[test]
    fn test_2d6() {
        let d6: Die64 = MapDist::new_dice(6).unwrap();
        let two_d6 = d6.sum_of(2).unwrap();
        assert_eq!(&2, two_d6.get_lb());
        assert_eq!(&12, two_d6.get_ub());
        assert_eq!(11, Distribution::len(&two_d6));
        for x in 2..=12isize {
            let expected = (6 - (7 - x).abs()) as f64 / 36.0;
            assert_abs_diff_eq!(expected, two_d6.pdf_ref(&x), epsilon = 1e-12);
        }
        assert_abs_diff_eq!(7.0, two_d6.expected_value().unwrap(), epsilon = 1e-12);
        assert_abs_diff_eq!(35.0 / 6.0, two_d6.variance().unwrap(), epsilon = 1e-9);
        assert_abs_diff_eq!(0.0, two_d6.skewness().unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn test_independent_trials() {
        let coin: Die64 = MapDist::new_uniform(0, 1).unwrap();
        let d4: Die64 = MapDist::new_dice(4).unwrap();
        let joint = coin.independent_trials(&d4).unwrap();
        assert_eq!(8, Distribution::len(&joint));
        assert_eq!(&(0, 1), joint.get_lb());
        assert_eq!(&(1, 4), joint.get_ub());
        assert_abs_diff_eq!(0.125, joint.pdf_ref(&(1, 3)), epsilon = 1e-15);

        let max_of_two = d4.independent_trials(&d4).unwrap().map_keys(|(a, b)| *a.max(b)).unwrap();
        assert_abs_diff_eq!(7.0 / 16.0, max_of_two.pdf_ref(&4), epsilon = 1e-15);
    }

    #[test]
    fn test_map_keys_scales() {
        let d6: Die64 = MapDist::new_dice(6).unwrap();
        let scaled = d6.map_keys(|k| Outcome::from(*k) * -2.0).unwrap();
        assert_eq!(&Outcome(-12.0), scaled.get_lb());
        assert_abs_diff_eq!(-7.0, scaled.expected_value().unwrap(), epsilon = 1e-12);
        assert_abs_diff_eq!(4.0 * d6.variance().unwrap(), scaled.variance().unwrap(), epsilon = 1e-9);
        assert_abs_diff_eq!(d6.kurtosis().unwrap(), scaled.kurtosis().unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        let coin: Die64 = MapDist::new_uniform(0, 1).unwrap();
        assert_eq!("{0: 0.5, 1: 0.5}", coin.to_string());
        let rv: MD64 = MapDist::from_pairs([(Outcome(-1.5), 0.25), (Outcome(2.0), 0.75)]).unwrap();
        assert_eq!("{-1.5: 0.25, 2: 0.75}", rv.to_string());
    }

    #[test]
    fn test_backing_map() {
        let d4: Die64 = MapDist::new_dice(4).unwrap();
        let m: BTreeMap<isize, f64> = d4.backing_map().clone();
        assert_eq!(BTreeMap::from([(1, 0.25), (2, 0.25), (3, 0.25), (4, 0.25)]), m);
        assert_eq!(MapDist::from_map(m).unwrap(), d4);
    }
}
