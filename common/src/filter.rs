//! 一覧画面のクライアント側絞り込み
//!
//! 取得済みページ内のアイテムに対する純粋関数。検索・ステータス・
//! 日付の各条件は独立で、未指定の条件は素通し、指定された条件は
//! ANDで合成される。結果は毎回導出し、items側には書き戻さない。

use chrono::NaiveDate;

/// 画面ごとのアクティブな絞り込み条件
///
/// `status` と `category` は空文字または "all" が未指定を表す。
/// `person` は関連エンティティ（患者・医師）のID、`category` は
/// レポート種別など画面固有の区分で、どちらもサーバー側フィルタに回す。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub status: String,
    pub date: String,
    pub person: String,
    pub category: String,
}

impl FilterState {
    /// 全条件を一括で未指定に戻す
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && is_unset(&self.status)
            && self.date.is_empty()
            && self.person.is_empty()
            && is_unset(&self.category)
    }
}

/// フィルタ値が「未指定」か（空文字または "all" センチネル）
pub fn is_unset(value: &str) -> bool {
    value.is_empty() || value == "all"
}

/// 一覧の1レコード
///
/// 絞り込みに使う表示フィールドだけを画面ごとに公開する
pub trait ListRecord {
    /// 安定した一意ID
    fn id(&self) -> &str;

    /// ワイヤー上のステータス文字列
    fn status_label(&self) -> &str;

    /// 検索対象テキスト（氏名・タイトル・説明など画面固有）
    fn search_text(&self) -> String;

    /// 日付フィルタの対象値。日付を持たない画面は None
    fn event_date(&self) -> Option<&str> {
        None
    }
}

/// 文字列からカレンダー日付を取り出す
///
/// "2026-08-06" と "2026-08-06T09:30:00.000Z" の両形式を受け付ける
/// （先頭10文字だけを見るので時刻・タイムゾーンは無視される）
pub fn calendar_date(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// 取得済みアイテム列に FilterState を適用して表示対象を導出する
pub fn derive_visible<T: ListRecord + Clone>(items: &[T], filters: &FilterState) -> Vec<T> {
    let needle = filters.search.trim().to_lowercase();
    let want_date = if filters.date.is_empty() {
        None
    } else {
        calendar_date(&filters.date)
    };

    items
        .iter()
        .filter(|item| {
            if !needle.is_empty() && !item.search_text().to_lowercase().contains(&needle) {
                return false;
            }
            if !is_unset(&filters.status) && item.status_label() != filters.status {
                return false;
            }
            if let Some(want) = want_date {
                match item.event_date().and_then(calendar_date) {
                    Some(have) if have == want => {}
                    _ => return false,
                }
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        status: String,
        date: Option<String>,
    }

    impl Row {
        fn new(id: &str, name: &str, status: &str, date: Option<&str>) -> Self {
            Row {
                id: id.to_string(),
                name: name.to_string(),
                status: status.to_string(),
                date: date.map(|d| d.to_string()),
            }
        }
    }

    impl ListRecord for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn status_label(&self) -> &str {
            &self.status
        }

        fn search_text(&self) -> String {
            self.name.clone()
        }

        fn event_date(&self) -> Option<&str> {
            self.date.as_deref()
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new("1", "Ann Kimura", "Scheduled", Some("2026-08-06T09:00:00.000Z")),
            Row::new("2", "Bob Tanaka", "Completed", Some("2026-08-07")),
            Row::new("3", "Carla Abe", "Scheduled", Some("2026-08-07")),
        ]
    }

    // =============================================
    // derive_visible テスト
    // =============================================

    #[test]
    fn test_no_filters_passes_everything() {
        let items = sample();
        let visible = derive_visible(&items, &FilterState::default());
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_status_exact_match() {
        let items = sample();
        let filters = FilterState {
            status: "Scheduled".to_string(),
            ..Default::default()
        };
        let visible = derive_visible(&items, &filters);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.status == "Scheduled"));
    }

    #[test]
    fn test_status_all_sentinel_is_noop() {
        let items = sample();
        let filters = FilterState {
            status: "all".to_string(),
            ..Default::default()
        };
        assert_eq!(derive_visible(&items, &filters).len(), 3);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let items = sample();
        let filters = FilterState {
            search: "ann".to_string(),
            ..Default::default()
        };
        let visible = derive_visible(&items, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_search_whitespace_only_is_noop() {
        let items = sample();
        let filters = FilterState {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(derive_visible(&items, &filters).len(), 3);
    }

    #[test]
    fn test_date_equality_ignores_time() {
        let items = sample();
        let filters = FilterState {
            date: "2026-08-06".to_string(),
            ..Default::default()
        };
        let visible = derive_visible(&items, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_date_filter_drops_dateless_rows() {
        let items = vec![
            Row::new("1", "Ann", "Scheduled", None),
            Row::new("2", "Bob", "Scheduled", Some("2026-08-06")),
        ];
        let filters = FilterState {
            date: "2026-08-06".to_string(),
            ..Default::default()
        };
        let visible = derive_visible(&items, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_combined_filters_are_anded() {
        let items = sample();
        let filters = FilterState {
            search: "a".to_string(), // Ann, Tanaka, Carla 全員に含まれる
            status: "Scheduled".to_string(),
            date: "2026-08-07".to_string(),
            ..Default::default()
        };
        let visible = derive_visible(&items, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let items = sample();
        let filters = FilterState {
            search: "存在しない名前".to_string(),
            ..Default::default()
        };
        assert!(derive_visible(&items, &filters).is_empty());
    }

    #[test]
    fn test_derive_visible_is_pure() {
        // 元の items には手を入れない
        let items = sample();
        let filters = FilterState {
            status: "Completed".to_string(),
            ..Default::default()
        };
        let _ = derive_visible(&items, &filters);
        assert_eq!(items.len(), 3);
    }

    // =============================================
    // calendar_date テスト
    // =============================================

    #[test]
    fn test_calendar_date_plain() {
        let d = calendar_date("2026-08-06").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
    }

    #[test]
    fn test_calendar_date_iso_datetime() {
        let d = calendar_date("2026-08-06T23:59:59.000Z").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
    }

    #[test]
    fn test_calendar_date_invalid() {
        assert!(calendar_date("").is_none());
        assert!(calendar_date("not a date").is_none());
        assert!(calendar_date("2026-13-01").is_none());
    }

    // =============================================
    // FilterState テスト
    // =============================================

    #[test]
    fn test_is_unset() {
        assert!(is_unset(""));
        assert!(is_unset("all"));
        assert!(!is_unset("Scheduled"));
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut filters = FilterState {
            search: "ann".to_string(),
            status: "Scheduled".to_string(),
            date: "2026-08-06".to_string(),
            person: "d-1".to_string(),
            category: "Lab".to_string(),
        };
        filters.clear();
        assert!(filters.is_empty());
        assert_eq!(filters, FilterState::default());
    }
}
