use shared::{ChildEligibility, ExtraAllowanceRequest, ExtraAllowanceResponse};
use tracing::{debug, info};

/// Check, for every child, whether `allowance + extra` reaches the highest
/// allowance seen before the extra was handed out.
///
/// The maximum is taken once over the original values. Sums are computed in
/// `i128` so no combination of `i64` inputs can wrap.
pub fn can_reach_max(allowances: &[i64], extra: i64) -> Vec<bool> {
    match max_allowance(allowances) {
        Some(max_original) => reach_flags(allowances, extra, max_original),
        None => Vec::new(),
    }
}

fn reach_flags(allowances: &[i64], extra: i64, max_original: i64) -> Vec<bool> {
    allowances
        .iter()
        .map(|&allowance| final_amount(allowance, extra) >= i128::from(max_original))
        .collect()
}

/// Highest allowance, or None for an empty list
fn max_allowance(allowances: &[i64]) -> Option<i64> {
    if allowances.is_empty() {
        return None;
    }
    Some(allowances.iter().copied().fold(i64::MIN, i64::max))
}

fn final_amount(allowance: i64, extra: i64) -> i128 {
    i128::from(allowance) + i128::from(extra)
}

/// Service wrapper that turns a request into a full eligibility report
#[derive(Clone, Default)]
pub struct EligibilityService;

impl EligibilityService {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, request: &ExtraAllowanceRequest) -> ExtraAllowanceResponse {
        info!(
            "Evaluating {} allowances with extra {}",
            request.allowances.len(),
            request.extra
        );

        let max_original = max_allowance(&request.allowances);
        let results = match max_original {
            Some(max) => reach_flags(&request.allowances, request.extra, max),
            None => Vec::new(),
        };

        let children: Vec<ChildEligibility> = request
            .allowances
            .iter()
            .zip(&results)
            .enumerate()
            .map(|(index, (&allowance, &reached))| {
                let final_amount = final_amount(allowance, request.extra);
                debug!(
                    "Child {}: allowance={} final={} reaches_max={}",
                    index, allowance, final_amount, reached
                );
                ChildEligibility {
                    index,
                    allowance,
                    final_amount,
                    can_reach_max: reached,
                }
            })
            .collect();

        let reached_count = results.iter().filter(|r| **r).count();
        info!(
            "{} of {} children reach the original max {:?}",
            reached_count,
            results.len(),
            max_original
        );

        ExtraAllowanceResponse {
            max_original,
            extra: request.extra,
            results,
            children,
        }
    }
}
