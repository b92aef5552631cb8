use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use num::ToPrimitive;
use tracing::trace;

use crate::calculator::MomentSummary;
use crate::distribution::prob_type::{convert_key, Prob};
use crate::distribution::Distribution;
use crate::DistError;

/// Moments of a distribution whose outcomes are numbers.
///
/// Every moment validates the distribution first and fails with
/// [`DistError::InvalidDistribution`] if the probabilities do not sum to one.
/// The check is repeated on every call, so a map edited between calls is
/// always looked at again.
pub trait NumDistribution<K, P: Prob>: Distribution<K, P> {
    fn convert(&self, k: &K) -> P;

    fn expected_value(&self) -> Result<P, DistError> {
        self.validate()?;
        Ok(self.general_expected_value(|k| self.convert(k)))
    }

    // E[X^2] - E[X]^2, prone to cancellation when the values are large and the spread is small
    fn variance(&self) -> Result<P, DistError> {
        self.validate()?;
        let ev = self.expected_value()?;
        let sq_ev = self.general_expected_value(|k| num::pow(self.convert(k), 2));
        Ok(sq_ev - num::pow(ev, 2))
    }

    /// NaN when cancellation has pushed the variance below zero.
    fn standard_deviation(&self) -> Result<P, DistError> {
        self.validate()?;
        Ok(self.variance()?.sqrt())
    }

    fn raw_moment(&self, n: usize) -> Result<P, DistError> {
        self.validate()?;
        Ok(self.general_expected_value(|k| num::pow(self.convert(k), n)))
    }

    fn central_moment(&self, n: usize) -> Result<P, DistError> {
        self.validate()?;
        let mu = self.expected_value()?;
        Ok(self.general_expected_value(|k| num::pow(self.convert(k) - mu, n)))
    }

    /// Third standardized moment, or zero for a degenerate distribution.
    fn skewness(&self) -> Result<P, DistError> {
        self.validate()?;
        let sigma = self.standard_deviation()?;
        if sigma == P::zero() {
            trace!("zero standard deviation, skewness is 0");
            return Ok(P::zero());
        }
        let third_moment = self.central_moment(3)?;
        Ok(third_moment / num::pow(sigma, 3))
    }

    /// Fourth standardized moment, or zero for a degenerate distribution.
    ///
    /// This is the plain ratio E[(X-μ)⁴]/σ⁴; no 3 is subtracted, so a normal
    /// distribution would come out near 3 rather than 0.
    fn kurtosis(&self) -> Result<P, DistError> {
        self.validate()?;
        let sigma = self.standard_deviation()?;
        if sigma == P::zero() {
            trace!("zero standard deviation, kurtosis is 0");
            return Ok(P::zero());
        }
        let fourth_moment = self.central_moment(4)?;
        Ok(fourth_moment / num::pow(sigma, 4))
    }

    fn summary(&self) -> Result<MomentSummary<P>, DistError>
    where
        Self: Sized
    {
        MomentSummary::from_dist::<K, Self>(self)
    }
}

impl<K, P> NumDistribution<K, P> for BTreeMap<K, P>
where
    K: Ord + ToPrimitive,
    P: Prob,
{
    fn convert(&self, k: &K) -> P {
        convert_key(k)
    }
}

impl<K, P, S> NumDistribution<K, P> for HashMap<K, P, S>
where
    K: Hash + Eq + ToPrimitive,
    P: Prob,
    S: BuildHasher,
{
    fn convert(&self, k: &K) -> P {
        convert_key(k)
    }
}
