//! Rate table types.
//!
//! This module contains the strongly-typed rate table structures that are
//! deserialized from YAML configuration files and validated on
//! construction. A [`RateTable`] is immutable once built; a new effective
//! period requires a new instance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::max_major_amount;

/// Metadata identifying a rate table.
///
/// Names the jurisdiction and effective period the table applies to, plus
/// a pointer to the source the rates were transcribed from.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableMetadata {
    /// ISO country code of the jurisdiction (e.g., "NG").
    pub jurisdiction: String,
    /// The human-readable name of the rate table.
    pub name: String,
    /// The version label of the table (e.g., "2025-01").
    pub version: String,
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// URL to the official source of the rates.
    pub source_url: String,
}

/// A single marginal income tax band.
///
/// Bands are ordered by `upper_bound`; the final band is open-ended
/// (`upper_bound: None`). A flat tax is the degenerate case of a single
/// open-ended band.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBand {
    /// Upper bound of the band in major currency units, exclusive of the
    /// bands above it. `None` marks the top band.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to income falling inside this band.
    pub rate: Decimal,
}

/// An ordered income tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxSchedule {
    /// Reference to the governing statute.
    pub reference: String,
    /// The marginal bands, lowest first.
    pub bands: Vec<TaxBand>,
}

impl TaxSchedule {
    /// Builds a single-band schedule reproducing a flat-rate tax.
    ///
    /// A one-band schedule computes exactly `gross x rate`, so existing
    /// flat-rate tables keep their behaviour under the banded model.
    pub fn flat(rate: Decimal, reference: &str) -> Self {
        TaxSchedule {
            reference: reference.to_string(),
            bands: vec![TaxBand {
                upper_bound: None,
                rate,
            }],
        }
    }

    /// The highest marginal rate in the schedule.
    ///
    /// The effective tax rate never exceeds this, which is what the
    /// combined-exposure check in [`RateTable::new`] relies on.
    pub fn top_marginal_rate(&self) -> Decimal {
        self.bands
            .iter()
            .map(|band| band.rate)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

/// A statutory rate together with the statute that mandates it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateEntry {
    /// Fraction of gross salary, in `[0, 1]`.
    pub rate: Decimal,
    /// Reference to the governing statute.
    pub reference: String,
}

/// The percentage-of-gross statutory rates of a jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatutoryRates {
    /// Employee share of the pension contribution (deducted from gross).
    pub employee_pension: RateEntry,
    /// Employer share of the pension contribution.
    pub employer_pension: RateEntry,
    /// National housing fund contribution (employer side).
    pub housing_fund: RateEntry,
    /// Industrial training levy (employer side).
    pub training_levy: RateEntry,
    /// Employee compensation fund contribution (employer side).
    pub industrial_fund: RateEntry,
}

/// A flat fee charged once per pay period.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixedFee {
    /// The fee amount in major currency units.
    pub amount: Decimal,
    /// Reference to the agreement clause that sets the fee.
    pub reference: String,
}

/// Service fees charged by the employer-of-record platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceFeeSchedule {
    /// Percentage-based employer-of-record service fee.
    pub service_fee: RateEntry,
    /// Percentage-based platform fee.
    pub platform_fee: RateEntry,
    /// Flat compliance management fee per pay period.
    pub fixed_compliance_fee: FixedFee,
}

/// The file shape of a rate table configuration.
///
/// This is the raw, unvalidated form deserialized from YAML; pass it to
/// [`RateTable::from_config`] to obtain a validated table.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableConfig {
    /// Table identity and effective period.
    pub metadata: RateTableMetadata,
    /// The income tax schedule.
    pub income_tax: TaxSchedule,
    /// Percentage-of-gross statutory rates.
    pub statutory_rates: StatutoryRates,
    /// Employer-of-record service fees.
    pub service_fees: ServiceFeeSchedule,
}

/// A validated, immutable rate table for one jurisdiction and effective
/// period.
///
/// Construction checks every rate for domain validity and fails with an
/// error naming the offending field; once a `RateTable` exists, the
/// calculator can trust every value in it. No mutating operations are
/// exposed.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{RateTable, TaxSchedule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = TaxSchedule::flat(Decimal::from_str("1.5").unwrap(), "PITA 2011 s.37");
/// // A 150% tax rate is rejected before any calculation is possible.
/// assert!(RateTable::new(
///     payroll_engine::config::RateTableMetadata {
///         jurisdiction: "NG".to_string(),
///         name: "test".to_string(),
///         version: "v1".to_string(),
///         effective_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///         source_url: "https://example.com".to_string(),
///     },
///     schedule,
///     payroll_engine::config::StatutoryRates {
///         employee_pension: payroll_engine::config::RateEntry {
///             rate: Decimal::from_str("0.08").unwrap(),
///             reference: "PRA 2014 s.4(1)".to_string(),
///         },
///         employer_pension: payroll_engine::config::RateEntry {
///             rate: Decimal::from_str("0.10").unwrap(),
///             reference: "PRA 2014 s.4(1)".to_string(),
///         },
///         housing_fund: payroll_engine::config::RateEntry {
///             rate: Decimal::from_str("0.025").unwrap(),
///             reference: "NHF Act s.4".to_string(),
///         },
///         training_levy: payroll_engine::config::RateEntry {
///             rate: Decimal::from_str("0.01").unwrap(),
///             reference: "ITF Act s.6(1)".to_string(),
///         },
///         industrial_fund: payroll_engine::config::RateEntry {
///             rate: Decimal::from_str("0.01").unwrap(),
///             reference: "ECA 2010 s.33".to_string(),
///         },
///     },
///     payroll_engine::config::ServiceFeeSchedule {
///         service_fee: payroll_engine::config::RateEntry {
///             rate: Decimal::from_str("0.08").unwrap(),
///             reference: "MSA cl. 6.1".to_string(),
///         },
///         platform_fee: payroll_engine::config::RateEntry {
///             rate: Decimal::from_str("0.02").unwrap(),
///             reference: "MSA cl. 6.2".to_string(),
///         },
///         fixed_compliance_fee: payroll_engine::config::FixedFee {
///             amount: Decimal::from_str("15000").unwrap(),
///             reference: "MSA cl. 6.3".to_string(),
///         },
///     },
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    /// Table identity and effective period.
    metadata: RateTableMetadata,
    /// The income tax schedule.
    income_tax: TaxSchedule,
    /// Percentage-of-gross statutory rates.
    statutory_rates: StatutoryRates,
    /// Employer-of-record service fees.
    service_fees: ServiceFeeSchedule,
}

impl RateTable {
    /// Creates a validated rate table from its component parts.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRate`] when any rate lies outside `[0, 1]`,
    ///   naming the offending field.
    /// - [`EngineError::InvalidConfiguration`] when the tax bands are
    ///   empty, mis-ordered, or not terminated by an open-ended band; when
    ///   the fixed compliance fee is negative or above
    ///   [`max_major_amount`]; or when the top marginal tax rate plus the
    ///   employee pension rate exceeds 1, or equals 1 with both lines
    ///   nonzero (either of which would allow deductions to exceed gross
    ///   salary).
    pub fn new(
        metadata: RateTableMetadata,
        income_tax: TaxSchedule,
        statutory_rates: StatutoryRates,
        service_fees: ServiceFeeSchedule,
    ) -> EngineResult<Self> {
        Self::validate_tax_schedule(&income_tax)?;

        Self::validate_rate("employee_pension", &statutory_rates.employee_pension)?;
        Self::validate_rate("employer_pension", &statutory_rates.employer_pension)?;
        Self::validate_rate("housing_fund", &statutory_rates.housing_fund)?;
        Self::validate_rate("training_levy", &statutory_rates.training_levy)?;
        Self::validate_rate("industrial_fund", &statutory_rates.industrial_fund)?;

        Self::validate_rate("service_fee", &service_fees.service_fee)?;
        Self::validate_rate("platform_fee", &service_fees.platform_fee)?;

        if service_fees.fixed_compliance_fee.amount < Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                field: "fixed_compliance_fee".to_string(),
                message: format!(
                    "must be non-negative, got {}",
                    service_fees.fixed_compliance_fee.amount
                ),
            });
        }
        if service_fees.fixed_compliance_fee.amount > max_major_amount() {
            return Err(EngineError::InvalidConfiguration {
                field: "fixed_compliance_fee".to_string(),
                message: format!(
                    "{} exceeds the maximum supported amount of {}",
                    service_fees.fixed_compliance_fee.amount,
                    max_major_amount()
                ),
            });
        }

        // An exposure of exactly 1 is safe only when one of the two
        // deduction lines is zero: a lone line computes gross x 1 exactly,
        // while two nonzero lines round independently and can both round a
        // half-kobo upward, pushing total deductions past gross.
        let top_tax = income_tax.top_marginal_rate();
        let employee_pension = statutory_rates.employee_pension.rate;
        let exposure = top_tax + employee_pension;
        if exposure > Decimal::ONE
            || (exposure == Decimal::ONE && !top_tax.is_zero() && !employee_pension.is_zero())
        {
            return Err(EngineError::InvalidConfiguration {
                field: "statutory_rates".to_string(),
                message: format!(
                    "combined employee-side deduction rates reach {}, which could push deductions past gross salary",
                    exposure
                ),
            });
        }

        Ok(Self {
            metadata,
            income_tax,
            statutory_rates,
            service_fees,
        })
    }

    /// Creates a validated rate table from a deserialized configuration.
    pub fn from_config(config: RateTableConfig) -> EngineResult<Self> {
        Self::new(
            config.metadata,
            config.income_tax,
            config.statutory_rates,
            config.service_fees,
        )
    }

    fn validate_rate(field: &str, entry: &RateEntry) -> EngineResult<()> {
        if entry.rate < Decimal::ZERO || entry.rate > Decimal::ONE {
            return Err(EngineError::InvalidRate {
                field: field.to_string(),
                value: entry.rate,
            });
        }
        Ok(())
    }

    fn validate_tax_schedule(schedule: &TaxSchedule) -> EngineResult<()> {
        if schedule.bands.is_empty() {
            return Err(EngineError::InvalidConfiguration {
                field: "income_tax".to_string(),
                message: "tax schedule must contain at least one band".to_string(),
            });
        }

        let mut previous_upper: Option<Decimal> = None;
        let last_index = schedule.bands.len() - 1;
        for (index, band) in schedule.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(EngineError::InvalidRate {
                    field: "income_tax".to_string(),
                    value: band.rate,
                });
            }

            match band.upper_bound {
                Some(upper) => {
                    if index == last_index {
                        return Err(EngineError::InvalidConfiguration {
                            field: "income_tax".to_string(),
                            message: "the final tax band must be open-ended".to_string(),
                        });
                    }
                    if upper <= Decimal::ZERO {
                        return Err(EngineError::InvalidConfiguration {
                            field: "income_tax".to_string(),
                            message: format!("band upper bound {} must be positive", upper),
                        });
                    }
                    if let Some(previous) = previous_upper
                        && upper <= previous
                    {
                        return Err(EngineError::InvalidConfiguration {
                            field: "income_tax".to_string(),
                            message: format!(
                                "band upper bounds must be strictly increasing ({} follows {})",
                                upper, previous
                            ),
                        });
                    }
                    previous_upper = Some(upper);
                }
                None => {
                    if index != last_index {
                        return Err(EngineError::InvalidConfiguration {
                            field: "income_tax".to_string(),
                            message: "only the final tax band may be open-ended".to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        &self.metadata
    }

    /// Returns the jurisdiction code.
    pub fn jurisdiction(&self) -> &str {
        &self.metadata.jurisdiction
    }

    /// Returns the date from which this table applies.
    pub fn effective_date(&self) -> NaiveDate {
        self.metadata.effective_date
    }

    /// Returns the income tax schedule.
    pub fn income_tax(&self) -> &TaxSchedule {
        &self.income_tax
    }

    /// Returns the percentage-of-gross statutory rates.
    pub fn statutory_rates(&self) -> &StatutoryRates {
        &self.statutory_rates
    }

    /// Returns the service fee schedule.
    pub fn service_fees(&self) -> &ServiceFeeSchedule {
        &self.service_fees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(rate: &str) -> RateEntry {
        RateEntry {
            rate: dec(rate),
            reference: "test".to_string(),
        }
    }

    fn metadata() -> RateTableMetadata {
        RateTableMetadata {
            jurisdiction: "NG".to_string(),
            name: "Nigeria statutory payroll rates".to_string(),
            version: "2025-01".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            source_url: "https://example.com".to_string(),
        }
    }

    fn statutory_rates() -> StatutoryRates {
        StatutoryRates {
            employee_pension: entry("0.08"),
            employer_pension: entry("0.10"),
            housing_fund: entry("0.025"),
            training_levy: entry("0.01"),
            industrial_fund: entry("0.01"),
        }
    }

    fn service_fees() -> ServiceFeeSchedule {
        ServiceFeeSchedule {
            service_fee: entry("0.08"),
            platform_fee: entry("0.02"),
            fixed_compliance_fee: FixedFee {
                amount: dec("15000"),
                reference: "MSA cl. 6.3".to_string(),
            },
        }
    }

    fn flat_schedule(rate: &str) -> TaxSchedule {
        TaxSchedule::flat(dec(rate), "PITA 2011 s.37")
    }

    /// RT-001: a well-formed table constructs
    #[test]
    fn test_valid_table_constructs() {
        let table = RateTable::new(
            metadata(),
            flat_schedule("0.24"),
            statutory_rates(),
            service_fees(),
        );
        assert!(table.is_ok());

        let table = table.unwrap();
        assert_eq!(table.jurisdiction(), "NG");
        assert_eq!(
            table.effective_date(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(table.statutory_rates().employee_pension.rate, dec("0.08"));
        assert_eq!(table.service_fees().fixed_compliance_fee.amount, dec("15000"));
    }

    /// RT-002: income tax rate of 1.5 is rejected at construction
    #[test]
    fn test_out_of_range_tax_rate_rejected() {
        let result = RateTable::new(
            metadata(),
            flat_schedule("1.5"),
            statutory_rates(),
            service_fees(),
        );

        match result.unwrap_err() {
            EngineError::InvalidRate { field, value } => {
                assert_eq!(field, "income_tax");
                assert_eq!(value, dec("1.5"));
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    /// RT-003: negative statutory rate names the offending field
    #[test]
    fn test_negative_rate_names_field() {
        let mut rates = statutory_rates();
        rates.housing_fund = entry("-0.01");

        let result = RateTable::new(metadata(), flat_schedule("0.24"), rates, service_fees());

        match result.unwrap_err() {
            EngineError::InvalidRate { field, value } => {
                assert_eq!(field, "housing_fund");
                assert_eq!(value, dec("-0.01"));
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    /// RT-004: negative fixed fee rejected
    #[test]
    fn test_negative_fixed_fee_rejected() {
        let mut fees = service_fees();
        fees.fixed_compliance_fee.amount = dec("-1");

        let result = RateTable::new(metadata(), flat_schedule("0.24"), statutory_rates(), fees);

        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, .. } => {
                assert_eq!(field, "fixed_compliance_fee");
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-005: zero fixed fee is valid
    #[test]
    fn test_zero_fixed_fee_is_valid() {
        let mut fees = service_fees();
        fees.fixed_compliance_fee.amount = Decimal::ZERO;

        assert!(RateTable::new(metadata(), flat_schedule("0.24"), statutory_rates(), fees).is_ok());
    }

    /// RT-006: boundary rates 0 and 1 are accepted
    #[test]
    fn test_boundary_rates_accepted() {
        let mut rates = statutory_rates();
        rates.employee_pension = entry("0");
        rates.housing_fund = entry("1");

        assert!(
            RateTable::new(metadata(), flat_schedule("1"), rates, service_fees()).is_ok()
        );
    }

    /// RT-007: empty band list rejected
    #[test]
    fn test_empty_tax_schedule_rejected() {
        let schedule = TaxSchedule {
            reference: "PITA 2011 s.37".to_string(),
            bands: vec![],
        };

        let result = RateTable::new(metadata(), schedule, statutory_rates(), service_fees());
        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, message } => {
                assert_eq!(field, "income_tax");
                assert!(message.contains("at least one band"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-008: final band must be open-ended
    #[test]
    fn test_bounded_final_band_rejected() {
        let schedule = TaxSchedule {
            reference: "PITA 2011 s.37".to_string(),
            bands: vec![
                TaxBand {
                    upper_bound: Some(dec("300000")),
                    rate: dec("0.07"),
                },
                TaxBand {
                    upper_bound: Some(dec("600000")),
                    rate: dec("0.11"),
                },
            ],
        };

        let result = RateTable::new(metadata(), schedule, statutory_rates(), service_fees());
        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, message } => {
                assert_eq!(field, "income_tax");
                assert!(message.contains("open-ended"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-009: mis-ordered band bounds rejected
    #[test]
    fn test_misordered_bands_rejected() {
        let schedule = TaxSchedule {
            reference: "PITA 2011 s.37".to_string(),
            bands: vec![
                TaxBand {
                    upper_bound: Some(dec("600000")),
                    rate: dec("0.07"),
                },
                TaxBand {
                    upper_bound: Some(dec("300000")),
                    rate: dec("0.11"),
                },
                TaxBand {
                    upper_bound: None,
                    rate: dec("0.15"),
                },
            ],
        };

        let result = RateTable::new(metadata(), schedule, statutory_rates(), service_fees());
        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, message } => {
                assert_eq!(field, "income_tax");
                assert!(message.contains("strictly increasing"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-010: an open-ended band before the end is rejected
    #[test]
    fn test_interior_open_band_rejected() {
        let schedule = TaxSchedule {
            reference: "PITA 2011 s.37".to_string(),
            bands: vec![
                TaxBand {
                    upper_bound: None,
                    rate: dec("0.07"),
                },
                TaxBand {
                    upper_bound: None,
                    rate: dec("0.11"),
                },
            ],
        };

        let result = RateTable::new(metadata(), schedule, statutory_rates(), service_fees());
        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, message } => {
                assert_eq!(field, "income_tax");
                assert!(message.contains("only the final"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-011: combined employee-side exposure above 1 rejected
    #[test]
    fn test_excessive_combined_deductions_rejected() {
        let mut rates = statutory_rates();
        rates.employee_pension = entry("0.30");

        let result = RateTable::new(metadata(), flat_schedule("0.80"), rates, service_fees());
        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, message } => {
                assert_eq!(field, "statutory_rates");
                assert!(message.contains("past gross salary"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-013: exposure of exactly 1 with two nonzero deduction lines is
    /// rejected; independent half-even rounding could overdraw gross
    #[test]
    fn test_exposure_of_exactly_one_rejected_when_both_lines_nonzero() {
        let mut rates = statutory_rates();
        rates.employee_pension = entry("0.7");

        let result = RateTable::new(metadata(), flat_schedule("0.3"), rates, service_fees());
        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, .. } => {
                assert_eq!(field, "statutory_rates");
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-014: exposure of exactly 1 carried by a single line stays valid,
    /// since one line computes gross x 1 without a rounding partner
    #[test]
    fn test_exposure_of_exactly_one_accepted_with_single_line() {
        let mut rates = statutory_rates();
        rates.employee_pension = entry("0");
        assert!(
            RateTable::new(metadata(), flat_schedule("1"), rates, service_fees()).is_ok()
        );

        let mut rates = statutory_rates();
        rates.employee_pension = entry("1");
        assert!(
            RateTable::new(metadata(), flat_schedule("0"), rates, service_fees()).is_ok()
        );
    }

    /// RT-015: a fixed fee above the supported maximum is rejected before
    /// it can overflow minor-unit arithmetic
    #[test]
    fn test_excessive_fixed_fee_rejected() {
        let mut fees = service_fees();
        fees.fixed_compliance_fee.amount = dec("100000000000000000000");

        let result = RateTable::new(metadata(), flat_schedule("0.24"), statutory_rates(), fees);
        match result.unwrap_err() {
            EngineError::InvalidConfiguration { field, message } => {
                assert_eq!(field, "fixed_compliance_fee");
                assert!(message.contains("maximum supported"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// RT-016: a fixed fee at the supported maximum still constructs
    #[test]
    fn test_fixed_fee_at_maximum_accepted() {
        let mut fees = service_fees();
        fees.fixed_compliance_fee.amount = crate::models::max_major_amount();

        assert!(RateTable::new(metadata(), flat_schedule("0.24"), statutory_rates(), fees).is_ok());
    }

    /// RT-012: top marginal rate spans all bands
    #[test]
    fn test_top_marginal_rate() {
        let schedule = TaxSchedule {
            reference: "PITA 2011 s.37".to_string(),
            bands: vec![
                TaxBand {
                    upper_bound: Some(dec("300000")),
                    rate: dec("0.07"),
                },
                TaxBand {
                    upper_bound: None,
                    rate: dec("0.24"),
                },
            ],
        };
        assert_eq!(schedule.top_marginal_rate(), dec("0.24"));
        assert_eq!(flat_schedule("0.24").top_marginal_rate(), dec("0.24"));
    }

    #[test]
    fn test_config_deserializes_from_yaml() {
        let yaml = r#"
metadata:
  jurisdiction: NG
  name: Nigeria statutory payroll rates
  version: "2025-01"
  effective_date: 2025-01-01
  source_url: https://example.com
income_tax:
  reference: PITA 2011 s.37
  bands:
    - rate: "0.24"
statutory_rates:
  employee_pension: { rate: "0.08", reference: PRA 2014 s.4(1) }
  employer_pension: { rate: "0.10", reference: PRA 2014 s.4(1) }
  housing_fund: { rate: "0.025", reference: NHF Act s.4 }
  training_levy: { rate: "0.01", reference: ITF Act s.6(1) }
  industrial_fund: { rate: "0.01", reference: ECA 2010 s.33 }
service_fees:
  service_fee: { rate: "0.08", reference: MSA cl. 6.1 }
  platform_fee: { rate: "0.02", reference: MSA cl. 6.2 }
  fixed_compliance_fee: { amount: "15000", reference: MSA cl. 6.3 }
"#;

        let config: RateTableConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.metadata.jurisdiction, "NG");
        assert_eq!(config.income_tax.bands.len(), 1);
        assert_eq!(config.income_tax.bands[0].upper_bound, None);
        assert_eq!(config.statutory_rates.housing_fund.rate, dec("0.025"));

        let table = RateTable::from_config(config).unwrap();
        assert_eq!(table.income_tax().top_marginal_rate(), dec("0.24"));
    }
}
