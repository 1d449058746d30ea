//! fetchの古い応答を捨てるためのリクエストトークン
//!
//! 同じ画面で重なって発行されたfetchは後勝ちにしたいが、到着順は
//! 発行順と一致しない。発行ごとに単調増加のトークンを払い出し、
//! 応答側は自分のトークンが最新のときだけ状態へ反映する。

/// 単調増加トークンの発行器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenGate {
    latest: u64,
}

impl TokenGate {
    pub fn new() -> Self {
        TokenGate::default()
    }

    /// 新しいfetchのトークンを払い出す（以後これが最新になる）
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// このトークンの応答をまだ反映してよいか
    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_monotonic() {
        let mut gate = TokenGate::new();
        let first = gate.issue();
        let second = gate.issue();
        assert!(second > first);
    }

    #[test]
    fn test_latest_token_is_current() {
        let mut gate = TokenGate::new();
        let token = gate.issue();
        assert!(gate.is_current(token));
    }

    #[test]
    fn test_stale_token_is_rejected() {
        // 先に発行されたfetchの応答が後から届いても反映されない
        let mut gate = TokenGate::new();
        let stale = gate.issue();
        let fresh = gate.issue();
        assert!(!gate.is_current(stale));
        assert!(gate.is_current(fresh));
    }

    #[test]
    fn test_out_of_order_arrival() {
        // 後発のfetchが先に到着 → 反映、先発が遅れて到着 → 破棄
        let mut gate = TokenGate::new();
        let slow = gate.issue();
        let fast = gate.issue();

        assert!(gate.is_current(fast)); // 後発の応答が先に届いて反映される
        assert!(!gate.is_current(slow)); // 遅れて届いた先発は破棄
    }

    #[test]
    fn test_zero_is_never_current_after_issue() {
        let mut gate = TokenGate::new();
        gate.issue();
        assert!(!gate.is_current(0));
    }
}
