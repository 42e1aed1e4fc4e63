use rand::Rng;

/// Custom epoch for ID generation: 2024-01-01 00:00:00 UTC.
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Current Unix time in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generates a time-ordered unique ID.
///
/// Layout: 41 bits of milliseconds since [`EPOCH_MS`] followed by 12 random
/// bits. IDs sort by creation time and stay well inside the positive i64
/// range, which keeps them safe for JSON number encoding.
pub fn snowflake_id() -> i64 {
    let elapsed = now_millis() - EPOCH_MS;
    let random = rand::thread_rng().gen_range(0..0x1000_i64);
    (elapsed << 12) | random
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_ids_are_positive_and_ordered() {
        let a = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = snowflake_id();
        assert!(a > 0);
        assert!(b > a);
    }

    #[test]
    fn now_millis_is_reasonable() {
        // Later than 2024-01-01, earlier than 2100.
        let now = now_millis();
        assert!(now > EPOCH_MS);
        assert!(now < 4_102_444_800_000);
    }
}
