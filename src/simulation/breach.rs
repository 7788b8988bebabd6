use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const DAYS_PER_MONTH: f64 = 30.0;
const HOURS_PER_DAY: f64 = 8.0;
/// INR per sensitive record.
const COST_PER_RECORD: f64 = 20.0;
const RECOVERY_BUSINESS_SHARE: f64 = 0.6;
const RECOVERY_RANSOM_SHARE: f64 = 0.4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachInputs {
    pub employees: u64,
    /// Average monthly salary in INR.
    pub avg_monthly_salary: f64,
    pub downtime_hours: u64,
    pub data_records: u64,
    pub ransom_expected: f64,
}

impl Default for BreachInputs {
    fn default() -> Self {
        Self {
            employees: 50,
            avg_monthly_salary: 40_000.0,
            downtime_hours: 24,
            data_records: 10_000,
            ransom_expected: 2_000_000.0,
        }
    }
}

impl BreachInputs {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.employees < 1 {
            anyhow::bail!("number of employees must be at least 1");
        }
        if !self.avg_monthly_salary.is_finite() || self.avg_monthly_salary < 1000.0 {
            anyhow::bail!("average monthly salary must be at least 1000");
        }
        if self.downtime_hours < 1 {
            anyhow::bail!("downtime must be at least 1 hour");
        }
        if !self.ransom_expected.is_finite() || self.ransom_expected < 0.0 {
            anyhow::bail!("expected ransom must be a finite, non-negative amount");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachEstimate {
    pub business_interruption: f64,
    pub data_breach_handling: f64,
    pub recovery: f64,
    pub ransom: f64,
    pub total: f64,
}

pub fn estimate(inputs: &BreachInputs) -> anyhow::Result<BreachEstimate> {
    inputs.validate()?;

    let hourly_wage = inputs.avg_monthly_salary / DAYS_PER_MONTH / HOURS_PER_DAY;
    let business_interruption =
        inputs.employees as f64 * hourly_wage * inputs.downtime_hours as f64;
    let data_breach_handling = inputs.data_records as f64 * COST_PER_RECORD;
    let recovery = business_interruption * RECOVERY_BUSINESS_SHARE
        + RECOVERY_RANSOM_SHARE * inputs.ransom_expected;
    let total =
        business_interruption + data_breach_handling + recovery + inputs.ransom_expected;

    Ok(BreachEstimate {
        business_interruption,
        data_breach_handling,
        recovery,
        ransom: inputs.ransom_expected,
        total,
    })
}

/// Whole rupees with thousands separators, e.g. `₹1,234,567`.
pub fn format_inr(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

pub fn breakdown_lines(estimate: &BreachEstimate) -> Vec<String> {
    vec![
        format!(
            "- Business interruption: {}",
            format_inr(estimate.business_interruption)
        ),
        format!(
            "- Data breach handling: {}",
            format_inr(estimate.data_breach_handling)
        ),
        format!(
            "- Recovery (forensics/restoration): {}",
            format_inr(estimate.recovery)
        ),
        format!("- Ransom (expected): {}", format_inr(estimate.ransom)),
        format!("Total estimated impact: {}", format_inr(estimate.total)),
    ]
}

/// Plain-text report suitable for saving as `breach_estimate.txt`.
pub fn summary(inputs: &BreachInputs, estimate: &BreachEstimate, now: NaiveDateTime) -> String {
    format!(
        "Breach Cost Estimate\n\
         Date: {}\n\
         \n\
         Employees: {}\n\
         Avg salary: {}\n\
         Downtime (hrs): {}\n\
         Sensitive records: {}\n\
         Ransom expected: {}\n\
         \n\
         Business interruption: {}\n\
         Data breach handling: {}\n\
         Recovery costs: {}\n\
         Total estimated: {}\n",
        now.format("%Y-%m-%dT%H:%M:%S%.f"),
        inputs.employees,
        inputs.avg_monthly_salary,
        inputs.downtime_hours,
        inputs.data_records,
        inputs.ransom_expected,
        estimate.business_interruption.trunc() as i64,
        estimate.data_breach_handling.trunc() as i64,
        estimate.recovery.trunc() as i64,
        estimate.total.trunc() as i64,
    )
}
