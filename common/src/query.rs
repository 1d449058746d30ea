//! クエリ文字列の組み立て
//!
//! 認識しているフィルタキーだけを、値が指定されているときに限って
//! 付与する（未指定 ⇒ パラメータなし ⇒ サーバーはその軸で絞らない）。
//! ステータス値は空白を含むのでエンコードを通す。

use crate::filter::is_unset;

/// 一覧エンドポイント用のクエリビルダ
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        QueryString::default()
    }

    /// 常に付与するパラメータ（page, limit, ロールスコープなど）
    pub fn push(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// 未指定（空文字または "all"）なら付与しない
    pub fn push_opt(&mut self, key: &str, value: &str) -> &mut Self {
        if !is_unset(value) {
            self.push(key, value);
        }
        self
    }

    /// "?a=b&c=d" 形式。パラメータが1つもなければ空文字
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        format!("?{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_yields_empty_string() {
        assert_eq!(QueryString::new().build(), "");
    }

    #[test]
    fn test_push_always_appends() {
        let mut q = QueryString::new();
        q.push("page", "2").push("limit", "7");
        assert_eq!(q.build(), "?page=2&limit=7");
    }

    #[test]
    fn test_push_opt_skips_empty() {
        let mut q = QueryString::new();
        q.push("page", "1").push_opt("status", "");
        assert_eq!(q.build(), "?page=1");
    }

    #[test]
    fn test_push_opt_skips_all_sentinel() {
        let mut q = QueryString::new();
        q.push("page", "1").push_opt("status", "all");
        assert_eq!(q.build(), "?page=1");
    }

    #[test]
    fn test_push_opt_appends_real_value() {
        let mut q = QueryString::new();
        q.push_opt("status", "Scheduled").push_opt("doctor", "d-1");
        assert_eq!(q.build(), "?status=Scheduled&doctor=d-1");
    }

    #[test]
    fn test_status_with_space_is_encoded() {
        let mut q = QueryString::new();
        q.push_opt("status", "In Progress");
        assert_eq!(q.build(), "?status=In+Progress");
    }

    #[test]
    fn test_roles_csv() {
        let mut q = QueryString::new();
        q.push("roles", "doctor,patient");
        assert_eq!(q.build(), "?roles=doctor%2Cpatient");
    }
}
