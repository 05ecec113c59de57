use crate::types::Timestamp;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_monotone_enough() {
        let a = now_millis();
        let b = now_millis();
        assert!(b >= a);
        // 2024-01-01 00:00:00 UTC
        assert!(a > 1_704_067_200_000);
    }
}
