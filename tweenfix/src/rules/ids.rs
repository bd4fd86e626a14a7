//! Centralized Rule IDs for tweenfix.

/// Detection: `animate` block with a 3+-entry keyframe array
pub const RULE_ID_KEYFRAME_SCAN: &str = "TWF-001";

/// Injection: first transition inside a `<motion.*>` block
pub const RULE_ID_MOTION_BLOCK: &str = "TWF-101";
/// Injection: transition directly following a flagged `animate` block
pub const RULE_ID_ADJACENT_PAIR: &str = "TWF-102";

/// Fallback: exact known declaration texts
pub const RULE_ID_LITERAL_TABLE: &str = "TWF-201";
