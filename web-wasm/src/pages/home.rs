//! ホーム画面（静的コンテンツ）

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page home">
            <div class="hero">
                <h2>"地域医療をひとつの画面で"</h2>
                <p>
                    "MediBoardは予約・ケアタスク・処方・医療レポート・検査機器を"
                    "一元管理する病院向けダッシュボードです。"
                </p>
            </div>
            <div class="feature-grid">
                <div class="feature-card">
                    <h3>"予約管理"</h3>
                    <p>"受付から診察完了までのステータスをひと目で追跡できます。"</p>
                </div>
                <div class="feature-card">
                    <h3>"ケアタスク"</h3>
                    <p>"看護業務の割り当てと進捗を病棟単位で管理します。"</p>
                </div>
                <div class="feature-card">
                    <h3>"処方・レポート"</h3>
                    <p>"処方の有効期限と検査レポートのレビュー状況を管理します。"</p>
                </div>
                <div class="feature-card">
                    <h3>"検査機器"</h3>
                    <p>"機器の稼働状態と点検スケジュールを記録します。"</p>
                </div>
            </div>
        </section>
    }
}
