//! Aggregate statistics over annotated posts

use crate::config::ExchangeRates;
use salario_domain::{AnnotatedPost, Currency, SalaryType};
use std::collections::HashMap;

/// Aggregates for one salary type, expressed in the local currency
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryStats {
    /// Salary type the mean was computed over
    pub salary_type: SalaryType,

    /// Posts carrying an amount, any type
    pub with_amount: usize,

    /// Posts carrying an amount, per currency
    pub by_currency: HashMap<Currency, usize>,

    /// Posts of `salary_type` that entered the mean
    pub sample_size: usize,

    /// Posts of `salary_type` left out for lack of an exchange rate
    pub unconverted: usize,

    /// Mean amount in pesos
    pub mean_local: Option<f64>,

    /// Mean amount in dollars, when a dollar rate is known
    pub mean_usd: Option<f64>,
}

impl SalaryStats {
    /// Compute statistics for `salary_type`
    ///
    /// Amounts are converted to pesos with `rates`; records whose currency has
    /// no rate are counted in `unconverted` and left out of the mean.
    pub fn compute(records: &[AnnotatedPost], salary_type: SalaryType, rates: &ExchangeRates) -> Self {
        let mut by_currency = HashMap::new();
        let mut with_amount = 0;
        let mut sum = 0.0;
        let mut sample_size = 0;
        let mut unconverted = 0;

        for record in records.iter().map(|r| &r.record) {
            let (Some(amount), Some(currency)) = (record.amount, record.currency) else {
                continue;
            };
            with_amount += 1;
            *by_currency.entry(currency).or_insert(0) += 1;

            if record.salary_type != Some(salary_type) {
                continue;
            }
            match rates.to_local(amount, currency) {
                Some(local) => {
                    sum += local;
                    sample_size += 1;
                }
                None => unconverted += 1,
            }
        }

        let mean_local = (sample_size > 0).then(|| sum / sample_size as f64);
        let mean_usd = mean_local.zip(rates.usd).map(|(mean, usd)| mean / usd);

        Self {
            salary_type,
            with_amount,
            by_currency,
            sample_size,
            unconverted,
            mean_local,
            mean_usd,
        }
    }

    /// Posts with an amount in `currency`
    pub fn count_in(&self, currency: Currency) -> usize {
        self.by_currency.get(&currency).copied().unwrap_or(0)
    }
}
