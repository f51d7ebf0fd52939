// Result of the concurrent fan-out/join demo

use serde::{Deserialize, Serialize};

/// Combined output of the two downstream calls
///
/// Each field is filled from its own task, so the order in which the calls
/// finish never changes which field a response lands in. Constructed per
/// request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResult {
    pub service1: String,
    pub service2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let result = JoinResult {
            service1: "a".to_string(),
            service2: "b".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "service1": "a", "service2": "b" })
        );
    }
}
