//! End-to-end rateio calculation.
//!
//! Ties the parser, the apportionment and the formatter together: a settlement
//! amount typed as text is split across claimants weighted by months worked.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, Claimant, ClaimantShare, MonetaryAmount, RateioResult, RateioSummary,
};

use super::apportionment::calculate_apportionment;
use super::currency_format::{format_amount, format_currency};
use super::decimal_text::parse_decimal_text;

/// Weighting criterion reported in every rateio summary.
pub const RATEIO_CRITERION: &str = "months_worked";

/// Splits the settlement amount in `total_text` across `claimants`.
///
/// The parsed total is quantized to cents (round half up) and the shares add
/// up to exactly that amount. Shares come back in the order of `claimants`.
///
/// # Errors
///
/// - `NoWeights` if there are no claimants
/// - `EmptyInput`, `InvalidFormat` or `NonPositive` if the total does not parse
/// - `NonPositiveWeightSum` if every claimant has zero months
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::calculate_rateio;
/// use rateio_engine::models::Claimant;
///
/// let claimants = vec![
///     Claimant::new("a", "Ana", 1),
///     Claimant::new("b", "Bruno", 2),
///     Claimant::new("c", "Carla", 117),
/// ];
/// let result = calculate_rateio("5.632.494,99", &claimants).unwrap();
///
/// assert_eq!(result.shares[0].share_formatted, "R$ 46.937,46");
/// assert_eq!(result.shares[1].share_formatted, "R$ 93.874,92");
/// assert_eq!(result.shares[2].share_formatted, "R$ 5.491.682,61");
/// assert_eq!(result.distributed(), result.summary.available);
/// ```
pub fn calculate_rateio(total_text: &str, claimants: &[Claimant]) -> EngineResult<RateioResult> {
    if claimants.is_empty() {
        return Err(EngineError::NoWeights);
    }

    let mut audit_steps = Vec::with_capacity(3);

    let total = parse_decimal_text(total_text)?;
    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "parse_total".to_string(),
        rule_name: "Parse Settlement Amount".to_string(),
        input: serde_json::json!({ "text": total_text }),
        output: serde_json::json!({ "total": total.to_string() }),
        reasoning: format!("Read '{}' as {}", total_text.trim(), total),
    });

    let available = MonetaryAmount::from_decimal(total)?;
    audit_steps.push(quantize_step(total, available, 2));

    let weights: Vec<u32> = claimants.iter().map(|c| c.months_worked).collect();
    let apportionment = calculate_apportionment(available, &weights, 3)?;
    audit_steps.push(apportionment.audit_step);

    let shares = claimants
        .iter()
        .zip(apportionment.shares)
        .map(|(claimant, share)| ClaimantShare {
            claimant_id: claimant.id.clone(),
            name: claimant.name.clone(),
            months_worked: claimant.months_worked,
            share,
            share_formatted: format_amount(share),
        })
        .collect();

    let summary = RateioSummary {
        criterion: RATEIO_CRITERION.to_string(),
        claimant_count: claimants.len(),
        total,
        available,
        weight_sum: apportionment.distribution.weight_sum,
        total_formatted: format_currency(total),
        available_formatted: format_amount(available),
    };

    Ok(RateioResult {
        shares,
        summary,
        audit_steps,
    })
}

fn quantize_step(total: Decimal, available: MonetaryAmount, step_number: u32) -> AuditStep {
    let reasoning = if available.to_decimal() == total {
        format!("{} is already a whole number of cents", total)
    } else {
        format!("{} rounded half up to {}", total, available)
    };

    AuditStep {
        step_number,
        rule_id: "quantize_total".to_string(),
        rule_name: "Quantize To Cents".to_string(),
        input: serde_json::json!({ "total": total.to_string() }),
        output: serde_json::json!({
            "available": available.to_string(),
            "available_cents": available.cents()
        }),
        reasoning,
    }
}
