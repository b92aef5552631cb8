use std::fmt::Display;

use serde::Serialize;

use crate::distribution::prob_type::Prob;
use crate::distribution::Distribution;
use crate::num_distribution::NumDistribution;
use crate::DistError;

pub const REPORT_TITLE: &str = "Expected Value and Variance Calculator";

pub fn validate<K, P: Prob>(dist: &impl Distribution<K, P>) -> Result<(), DistError> {
    dist.validate()
}

pub fn expected_value<K, P: Prob>(dist: &impl NumDistribution<K, P>) -> Result<P, DistError> {
    dist.expected_value()
}

pub fn variance<K, P: Prob>(dist: &impl NumDistribution<K, P>) -> Result<P, DistError> {
    dist.variance()
}

pub fn standard_deviation<K, P: Prob>(dist: &impl NumDistribution<K, P>) -> Result<P, DistError> {
    dist.standard_deviation()
}

pub fn skewness<K, P: Prob>(dist: &impl NumDistribution<K, P>) -> Result<P, DistError> {
    dist.skewness()
}

pub fn kurtosis<K, P: Prob>(dist: &impl NumDistribution<K, P>) -> Result<P, DistError> {
    dist.kurtosis()
}

/// The five statistics of one distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MomentSummary<P> {
    pub expected_value: P,
    pub variance: P,
    pub standard_deviation: P,
    pub skewness: P,
    pub kurtosis: P,
}

impl<P: Prob> MomentSummary<P> {
    pub fn from_dist<K, D: NumDistribution<K, P>>(dist: &D) -> Result<Self, DistError> {
        Ok(Self {
            expected_value: dist.expected_value()?,
            variance: dist.variance()?,
            standard_deviation: dist.standard_deviation()?,
            skewness: dist.skewness()?,
            kurtosis: dist.kurtosis()?,
        })
    }
}

pub fn report<D, P>(dist: &D, summary: &MomentSummary<P>, precision: usize) -> String
where
    D: Display,
    P: Prob + Display,
{
    format!(
        "{title}\n{rule}\n\nResults:\n\
         Distribution: {dist}\n\
         Expected Value: {ev:.prec$}\n\
         Variance: {var:.prec$}\n\
         Standard Deviation: {sd:.prec$}\n\
         Skewness (3rd moment): {skew:.prec$}\n\
         Kurtosis (4th moment): {kurt:.prec$}\n",
        title = REPORT_TITLE,
        rule = "=".repeat(50),
        dist = dist,
        ev = summary.expected_value,
        var = summary.variance,
        sd = summary.standard_deviation,
        skew = summary.skewness,
        kurt = summary.kurtosis,
        prec = precision,
    )
}
