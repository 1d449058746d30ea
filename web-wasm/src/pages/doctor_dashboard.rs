//! 医師ダッシュボード
//!
//! 本日の予約と自分のレポートの2つのサブ一覧。どちらも医師IDで
//! スコープした同じ一覧パターンのインスタンス。

use leptos::prelude::*;
use leptos::task::spawn_local;

use mediboard_common::{
    Appointment, AppointmentStatus, FilterState, MedicalReport, User,
};

use crate::api;
use crate::components::status_badge::status_label_ja;
use crate::components::toast::use_toasts;
use crate::components::{Spinner, StatusBadge};
use crate::list_vm::ListVm;
use crate::pages::{date_part, today_iso};

#[component]
pub fn DoctorDashboardPage(user: User) -> impl IntoView {
    let toasts = use_toasts();
    let doctor_id = StoredValue::new(user.id.clone());

    // 本日の予約（日付フィルタを今日に固定）
    let appointments: ListVm<Appointment> = ListVm::new();
    appointments.filters.set(FilterState {
        date: today_iso(),
        ..Default::default()
    });

    let load_appointments = move || {
        appointments.load(move |page, filters| async move {
            let doctor_id = doctor_id.get_value();
            api::appointments::list(page, &filters, Some(&doctor_id), None).await
        });
    };

    {
        let load_appointments = load_appointments.clone();
        Effect::new(move |_| {
            appointments.page.get();
            appointments.filters.get();
            load_appointments();
        });
    }

    // 自分のレポート（直近ページ）
    let reports: ListVm<MedicalReport> = ListVm::new();
    let load_reports = move || {
        reports.load(move |page, filters| async move {
            let doctor_id = doctor_id.get_value();
            api::reports::list(page, &filters, Some(&doctor_id)).await
        });
    };

    {
        let load_reports = load_reports.clone();
        Effect::new(move |_| {
            reports.page.get();
            reports.filters.get();
            load_reports();
        });
    }

    let on_status_change = {
        let load_appointments = load_appointments.clone();
        move |id: String, status: AppointmentStatus| {
            let load_appointments = load_appointments.clone();
            spawn_local(async move {
                match api::appointments::update_status(&id, status).await {
                    Ok(()) => {
                        toasts.success("予約ステータスを更新しました");
                        load_appointments();
                    }
                    Err(e) => toasts.error(e.user_message()),
                }
            });
        }
    };

    let today_total = move || appointments.items.get().len();
    let today_done = move || {
        appointments
            .items
            .get()
            .iter()
            .filter(|a| a.status == "Completed")
            .count()
    };
    let report_total = move || reports.pagination.get().total;

    view! {
        <section class="page">
            <div class="page-header">
                <h2>{format!("{} 先生のダッシュボード", user.full_name())}</h2>
            </div>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-value">{move || today_total().to_string()}</span>
                    <span class="stat-label">"本日の予約"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || today_done().to_string()}</span>
                    <span class="stat-label">"本日の完了"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || report_total().to_string()}</span>
                    <span class="stat-label">"作成レポート"</span>
                </div>
            </div>

            <div class="dashboard-section">
                <h3>"本日の予約"</h3>
                <Show when=move || appointments.loading.get()>
                    <Spinner />
                </Show>
                <Show
                    when=move || !appointments.items.get().is_empty()
                    fallback=move || {
                        view! {
                            <Show when=move || !appointments.loading.get()>
                                <p class="text-muted">"本日の予約はありません"</p>
                            </Show>
                        }
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"時刻"</th>
                                <th>"患者"</th>
                                <th>"理由"</th>
                                <th>"ステータス"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || appointments.items.get()
                                key=|apt| format!("{}:{}", apt.id, apt.status)
                                children=move |apt| {
                                    let on_status_change = on_status_change.clone();
                                    let status = apt.status.clone();
                                    let row_id = apt.id.clone();
                                    view! {
                                        <tr>
                                            <td>{apt.time.clone()}</td>
                                            <td>{apt.patient.full_name()}</td>
                                            <td>{apt.reason.clone()}</td>
                                            <td>
                                                <select
                                                    class="status-select"
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        if let Some(s) = AppointmentStatus::ALL
                                                            .iter()
                                                            .find(|s| s.as_str() == value)
                                                        {
                                                            on_status_change(row_id.clone(), *s);
                                                        }
                                                    }
                                                >
                                                    {AppointmentStatus::ALL
                                                        .iter()
                                                        .map(|s| {
                                                            let selected = s.as_str() == status;
                                                            view! {
                                                                <option value=s.as_str() selected=selected>
                                                                    {status_label_ja(s.as_str())}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>

            <div class="dashboard-section">
                <h3>"最近のレポート"</h3>
                <Show when=move || reports.loading.get()>
                    <Spinner />
                </Show>
                <Show
                    when=move || !reports.items.get().is_empty()
                    fallback=move || {
                        view! {
                            <Show when=move || !reports.loading.get()>
                                <p class="text-muted">"レポートはまだありません"</p>
                            </Show>
                        }
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"日付"</th>
                                <th>"患者"</th>
                                <th>"タイトル"</th>
                                <th>"ステータス"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || reports.items.get()
                                key=|report| format!("{}:{}", report.id, report.status)
                                children=move |report| {
                                    view! {
                                        <tr>
                                            <td>{date_part(&report.date).to_string()}</td>
                                            <td>{report.patient.full_name()}</td>
                                            <td>{report.title.clone()}</td>
                                            <td>
                                                <StatusBadge status=report.status.clone() />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </section>
    }
}
