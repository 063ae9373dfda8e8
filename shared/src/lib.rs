use serde::{Deserialize, Serialize};

/// Request to check which children reach the top allowance after an extra amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraAllowanceRequest {
    /// Current allowance of each child, in order
    pub allowances: Vec<i64>,
    /// Amount added to every child's allowance (may be negative)
    #[serde(default)]
    pub extra: i64,
}

/// Per-child row of an eligibility report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildEligibility {
    /// Position of the child in the request
    pub index: usize,
    pub allowance: i64,
    /// Allowance plus extra, widened so it cannot overflow
    pub final_amount: i128,
    pub can_reach_max: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraAllowanceResponse {
    /// Highest allowance before the extra was added; None when there are no children
    pub max_original: Option<i64>,
    pub extra: i64,
    /// One flag per child, aligned with the request
    pub results: Vec<bool>,
    pub children: Vec<ChildEligibility>,
}

impl ExtraAllowanceResponse {
    /// Render the flags as space separated `true`/`false` tokens
    pub fn to_tokens(&self) -> String {
        self.results
            .iter()
            .map(|reached| if *reached { "true" } else { "false" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_extra_defaults_to_zero() {
        let request: ExtraAllowanceRequest =
            serde_json::from_str(r#"{"allowances": [3, -4, 7]}"#).unwrap();
        assert_eq!(request.allowances, vec![3, -4, 7]);
        assert_eq!(request.extra, 0);
    }

    #[test]
    fn test_request_rejects_missing_allowances() {
        let result = serde_json::from_str::<ExtraAllowanceRequest>(r#"{"extra": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_tokens() {
        let response = ExtraAllowanceResponse {
            max_original: Some(50),
            extra: 20,
            results: vec![false, true, false],
            children: Vec::new(),
        };
        assert_eq!(response.to_tokens(), "false true false");
    }

    #[test]
    fn test_to_tokens_empty() {
        let response = ExtraAllowanceResponse {
            max_original: None,
            extra: 5,
            results: Vec::new(),
            children: Vec::new(),
        };
        assert_eq!(response.to_tokens(), "");
    }

    #[test]
    fn test_response_json_shape() {
        let response = ExtraAllowanceResponse {
            max_original: Some(5),
            extra: -10,
            results: vec![false],
            children: vec![ChildEligibility {
                index: 0,
                allowance: 5,
                final_amount: -5,
                can_reach_max: false,
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["max_original"], 5);
        assert_eq!(value["results"], serde_json::json!([false]));
        assert_eq!(value["children"][0]["final_amount"], -5);
    }
}
