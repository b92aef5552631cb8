use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use tracing::debug;

use crate::distribution::prob_type::{tolerance, Prob};
use crate::DistError;

pub mod prob_type;

/// A finite mapping from outcome to probability.
///
/// Nothing here assumes the probabilities are valid. Callers that need a
/// proper distribution go through [`Distribution::validate`], which every
/// moment in [`crate::NumDistribution`] does on entry.
pub trait Distribution<K, P: Prob> {
    fn fold_outcomes<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &K, P) -> A;
    fn pdf_ref(&self, k: &K) -> P;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn total_probability(&self) -> P {
        self.fold_outcomes(P::zero(), |acc, _, p| acc + p)
    }

    fn validate(&self) -> Result<(), DistError> {
        let total = self.total_probability();
        let diff = (total - P::one()).abs();
        // NaN totals are rejected as well
        if diff.is_nan() || diff > tolerance::<P>() {
            let sum = total.to_f64().unwrap_or(f64::NAN);
            debug!(sum, outcomes = self.len(), "distribution failed validation");
            return Err(DistError::InvalidDistribution(sum));
        }
        Ok(())
    }

    fn general_expected_value<F>(&self, f: F) -> P
    where
        F: Fn(&K) -> P
    {
        self.fold_outcomes(P::zero(), |result, k, p| result + p * f(k))
    }
}

impl<K: Ord, P: Prob> Distribution<K, P> for BTreeMap<K, P> {
    fn fold_outcomes<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, P) -> A
    {
        self.iter().fold(init, |acc, (k, p)| f(acc, k, *p))
    }

    fn pdf_ref(&self, k: &K) -> P {
        self.get(k).copied().unwrap_or_else(P::zero)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, P, S> Distribution<K, P> for HashMap<K, P, S>
where
    K: Hash + Eq,
    P: Prob,
    S: BuildHasher,
{
    fn fold_outcomes<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, P) -> A
    {
        self.iter().fold(init, |acc, (k, p)| f(acc, k, *p))
    }

    fn pdf_ref(&self, k: &K) -> P {
        self.get(k).copied().unwrap_or_else(P::zero)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}
