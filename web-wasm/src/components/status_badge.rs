//! ステータスバッジ

use leptos::prelude::*;

/// ワイヤー上のステータス文字列→表示ラベル
///
/// 未知の値はそのまま表示する（一覧を落とさない）
pub fn status_label_ja(status: &str) -> &str {
    match status {
        "Scheduled" => "予約済み",
        "In Progress" => "進行中",
        "Completed" => "完了",
        "Cancelled" => "キャンセル",
        "Pending" => "未着手",
        "Active" => "有効",
        "Discontinued" => "中止",
        "Draft" => "下書き",
        "Reviewed" => "確認済み",
        "Archived" => "保管",
        "Operational" => "稼働中",
        "Maintenance" => "点検中",
        "Out of Service" => "停止中",
        other => other,
    }
}

/// ステータス文字列からCSSクラスを作る（空白はハイフンに潰す）
pub fn status_class(status: &str) -> String {
    format!(
        "status-badge status-{}",
        status.to_lowercase().replace(' ', "-")
    )
}

#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let class = status_class(&status);
    let label = status_label_ja(&status).to_string();

    view! { <span class=class>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(status_label_ja("Scheduled"), "予約済み");
        assert_eq!(status_label_ja("In Progress"), "進行中");
        assert_eq!(status_label_ja("Out of Service"), "停止中");
    }

    #[test]
    fn test_unknown_label_passes_through() {
        assert_eq!(status_label_ja("Rescheduled"), "Rescheduled");
    }

    #[test]
    fn test_status_class_slug() {
        assert_eq!(
            status_class("In Progress"),
            "status-badge status-in-progress"
        );
        assert_eq!(
            status_class("Out of Service"),
            "status-badge status-out-of-service"
        );
    }
}
