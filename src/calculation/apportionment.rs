//! Exact proportional apportionment (largest-remainder method).
//!
//! A total is split across weighted claimants at cent granularity. Each
//! claimant first receives the floor of its ideal share; the cents left over
//! go one at a time to the claimants with the largest fractional remainders,
//! earlier claimants winning ties. The shares always add up to the total.
//!
//! All arithmetic is integer. With `S` the weight sum, the ideal share of
//! claimant `i` is `T * w_i / S` cents, so its floor is `T * w_i div S` and
//! its remainder is `T * w_i mod S`. Every remainder shares the denominator
//! `S`, which makes comparing the numerators an exact comparison.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, MonetaryAmount};

/// Intermediate figures of a cent distribution, kept for auditing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentDistribution {
    /// The amount distributed, in cents.
    pub total_cents: i64,
    /// Sum of all weights.
    pub weight_sum: u64,
    /// Floor of each ideal share, in cents.
    pub floors: Vec<i64>,
    /// Numerator of each fractional remainder over `weight_sum`.
    pub remainders: Vec<u64>,
    /// Cents left after the floors, always below the claimant count.
    pub leftover_cents: i64,
    /// Indices that received one extra cent, in award order.
    pub awarded: Vec<usize>,
    /// Final cents per claimant, in input order.
    pub cents: Vec<i64>,
}

/// The result of an apportionment, including the shares and audit step.
#[derive(Debug, Clone)]
pub struct ApportionmentResult {
    /// One share per weight, in input order.
    pub shares: Vec<MonetaryAmount>,
    /// The figures behind the shares.
    pub distribution: CentDistribution,
    /// The audit step recording this apportionment.
    pub audit_step: AuditStep,
}

fn weight_sum(weights: &[u32]) -> EngineResult<u64> {
    if weights.is_empty() {
        return Err(EngineError::NoWeights);
    }
    let sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if sum == 0 {
        return Err(EngineError::NonPositiveWeightSum);
    }
    Ok(sum)
}

/// Distributes `total_cents` across `weights` with zero residual.
///
/// # Errors
///
/// - `NoWeights` if `weights` is empty
/// - `NonPositiveWeightSum` if every weight is zero
/// - `NegativeAmount` if `total_cents` is negative
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::distribute_cents;
///
/// let distribution = distribute_cents(100, &[1, 1, 1]).unwrap();
/// assert_eq!(distribution.cents, vec![34, 33, 33]);
/// assert_eq!(distribution.leftover_cents, 1);
/// assert_eq!(distribution.awarded, vec![0]);
/// ```
pub fn distribute_cents(total_cents: i64, weights: &[u32]) -> EngineResult<CentDistribution> {
    let weight_sum = weight_sum(weights)?;
    if total_cents < 0 {
        return Err(EngineError::NegativeAmount {
            value: Decimal::new(total_cents, 2),
        });
    }

    let total = i128::from(total_cents);
    let divisor = i128::from(weight_sum);

    let mut floors = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for &weight in weights {
        let scaled = total * i128::from(weight);
        // Both fit: the floor never exceeds the total, the remainder stays below the weight sum
        floors.push((scaled / divisor) as i64);
        remainders.push((scaled % divisor) as u64);
    }

    let leftover_cents = total_cents - floors.iter().sum::<i64>();

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
    order.truncate(leftover_cents as usize);
    let awarded = order;

    let mut cents = floors.clone();
    for &index in &awarded {
        cents[index] += 1;
    }

    Ok(CentDistribution {
        total_cents,
        weight_sum,
        floors,
        remainders,
        leftover_cents,
        awarded,
        cents,
    })
}

/// Apportions `total` across `weights`, returning one share per weight.
///
/// The total is first quantized to cents with round half up; the shares add
/// up to exactly that quantized total.
///
/// # Errors
///
/// - `NoWeights` if `weights` is empty
/// - `NonPositiveWeightSum` if every weight is zero
/// - `NegativeAmount` if `total` is negative
/// - `AmountOutOfRange` if `total` has too many cents to count
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::apportion;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shares = apportion(Decimal::from_str("5632494.99").unwrap(), &[1, 2, 117]).unwrap();
/// let cents: Vec<i64> = shares.iter().map(|s| s.cents()).collect();
/// assert_eq!(cents, vec![4_693_746, 9_387_492, 549_168_261]);
/// ```
pub fn apportion(total: Decimal, weights: &[u32]) -> EngineResult<Vec<MonetaryAmount>> {
    weight_sum(weights)?;
    let total = MonetaryAmount::from_decimal(total)?;
    let distribution = distribute_cents(total.cents(), weights)?;
    Ok(to_shares(&distribution))
}

fn to_shares(distribution: &CentDistribution) -> Vec<MonetaryAmount> {
    distribution
        .cents
        .iter()
        .map(|&c| MonetaryAmount::from_cents(c))
        .collect()
}

/// Apportions an already-quantized amount and records an audit step.
///
/// # Arguments
///
/// * `available` - The amount to distribute
/// * `weights` - One weight per claimant
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_apportionment(
    available: MonetaryAmount,
    weights: &[u32],
    step_number: u32,
) -> EngineResult<ApportionmentResult> {
    let distribution = distribute_cents(available.cents(), weights)?;
    let shares = to_shares(&distribution);

    let reasoning = if distribution.leftover_cents == 0 {
        format!(
            "{} cents split across {} claimants by weight (sum {}); floors were exact",
            distribution.total_cents,
            weights.len(),
            distribution.weight_sum
        )
    } else {
        format!(
            "{} cents split across {} claimants by weight (sum {}); {} leftover cent(s) \
             awarded to the largest remainders, ties by input order",
            distribution.total_cents,
            weights.len(),
            distribution.weight_sum,
            distribution.leftover_cents
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "largest_remainder_apportionment".to_string(),
        rule_name: "Largest Remainder Apportionment".to_string(),
        input: serde_json::json!({
            "total_cents": distribution.total_cents,
            "weights": weights,
            "weight_sum": distribution.weight_sum
        }),
        output: serde_json::json!({
            "floors": distribution.floors,
            "remainders": distribution.remainders,
            "leftover_cents": distribution.leftover_cents,
            "awarded_indices": distribution.awarded,
            "cents": distribution.cents
        }),
        reasoning,
    };

    Ok(ApportionmentResult {
        shares,
        distribution,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn cents(shares: &[MonetaryAmount]) -> Vec<i64> {
        shares.iter().map(|s| s.cents()).collect()
    }

    #[test]
    fn test_precatorio_scenario() {
        let distribution = distribute_cents(563_249_499, &[1, 2, 117]).unwrap();

        assert_eq!(distribution.floors, vec![4_693_745, 9_387_491, 549_168_261]);
        assert_eq!(distribution.remainders, vec![99, 78, 63]);
        assert_eq!(distribution.leftover_cents, 2);
        assert_eq!(distribution.awarded, vec![0, 1]);
        assert_eq!(distribution.cents, vec![4_693_746, 9_387_492, 549_168_261]);
        assert_eq!(distribution.cents.iter().sum::<i64>(), 563_249_499);
    }

    #[test]
    fn test_single_claimant_receives_total() {
        let shares = apportion(dec("5632494.99"), &[1]).unwrap();
        assert_eq!(cents(&shares), vec![563_249_499]);
    }

    #[test]
    fn test_total_is_quantized_half_up() {
        let shares = apportion(dec("10.005"), &[1, 1]).unwrap();
        assert_eq!(cents(&shares), vec![501, 500]);
    }

    #[test]
    fn test_ties_go_to_earlier_claimants() {
        let shares = apportion(dec("0.02"), &[1, 1, 1]).unwrap();
        assert_eq!(cents(&shares), vec![1, 1, 0]);
    }

    #[test]
    fn test_equal_weights_differ_by_at_most_one_cent() {
        let shares = apportion(dec("100.00"), &[3, 3, 3]).unwrap();
        assert_eq!(cents(&shares), vec![3334, 3333, 3333]);
    }

    #[test]
    fn test_larger_remainder_wins_over_input_order() {
        // 10 cents over [1, 2]: ideals 3.33 and 6.67, second claimant gets the cent
        let distribution = distribute_cents(10, &[1, 2]).unwrap();
        assert_eq!(distribution.cents, vec![3, 7]);
        assert_eq!(distribution.awarded, vec![1]);
    }

    #[test]
    fn test_zero_weight_claimant_gets_nothing() {
        let shares = apportion(dec("1.00"), &[0, 3, 0]).unwrap();
        assert_eq!(cents(&shares), vec![0, 100, 0]);
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let shares = apportion(Decimal::ZERO, &[1, 2]).unwrap();
        assert_eq!(cents(&shares), vec![0, 0]);
    }

    #[test]
    fn test_exact_division_has_no_leftover() {
        let distribution = distribute_cents(120, &[1, 2, 3, 6]).unwrap();
        assert_eq!(distribution.leftover_cents, 0);
        assert!(distribution.awarded.is_empty());
        assert_eq!(distribution.cents, vec![10, 20, 30, 60]);
    }

    #[test]
    fn test_no_weights() {
        assert!(matches!(
            apportion(dec("1.00"), &[]),
            Err(EngineError::NoWeights)
        ));
    }

    #[test]
    fn test_all_zero_weights() {
        assert!(matches!(
            apportion(dec("1.00"), &[0, 0]),
            Err(EngineError::NonPositiveWeightSum)
        ));
    }

    #[test]
    fn test_weights_are_checked_before_amount() {
        assert!(matches!(
            apportion(dec("-1.00"), &[]),
            Err(EngineError::NoWeights)
        ));
    }

    #[test]
    fn test_negative_total_rejected() {
        assert!(matches!(
            apportion(dec("-1.00"), &[1]),
            Err(EngineError::NegativeAmount { .. })
        ));
        assert!(matches!(
            distribute_cents(-1, &[1]),
            Err(EngineError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let distribution = distribute_cents(i64::MAX, &[u32::MAX, u32::MAX, 1]).unwrap();
        assert_eq!(distribution.cents.iter().sum::<i64>(), i64::MAX);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let weights = [7, 13, 13, 1, 120, 45];
        let first = apportion(dec("98765.43"), &weights).unwrap();
        let second = apportion(dec("98765.43"), &weights).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_calculate_apportionment_records_audit_step() {
        let result =
            calculate_apportionment(MonetaryAmount::from_cents(563_249_499), &[1, 2, 117], 3)
                .unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "largest_remainder_apportionment");
        assert_eq!(result.audit_step.output["leftover_cents"], 2);
        assert_eq!(
            result.audit_step.output["awarded_indices"],
            serde_json::json!([0, 1])
        );
        assert!(result.audit_step.reasoning.contains("2 leftover cent(s)"));
        assert_eq!(cents(&result.shares), vec![4_693_746, 9_387_492, 549_168_261]);
    }
}
