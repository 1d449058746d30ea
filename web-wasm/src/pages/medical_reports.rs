//! 医療レポート一覧画面
//!
//! サーバー側ページングあり。医師は自分のレポートに限定される。
//! 種別フィルタはサーバー側、検索・ステータスはクライアント側でも
//! 重ねて適用する。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mediboard_common::{
    can_create, can_delete, can_update_status, MedicalReport, ReportDraft, ReportStatus, Role,
    Screen, User,
};

use crate::api;
use crate::components::status_badge::status_label_ja;
use crate::components::toast::use_toasts;
use crate::components::{Modal, Pager, Spinner, StatusBadge};
use crate::list_vm::ListVm;
use crate::pages::{date_part, today_iso};

const REPORT_TYPES: [(&str, &str); 5] = [
    ("Lab", "検査"),
    ("Radiology", "画像診断"),
    ("Consultation", "診察記録"),
    ("Surgery", "手術記録"),
    ("Discharge Summary", "退院サマリー"),
];

fn report_type_label(report_type: &str) -> &str {
    REPORT_TYPES
        .iter()
        .find(|(value, _)| *value == report_type)
        .map(|(_, label)| *label)
        .unwrap_or(report_type)
}

#[component]
pub fn MedicalReportsPage(user: User, role: Role) -> impl IntoView {
    let vm: ListVm<MedicalReport> = ListVm::new();
    let toasts = use_toasts();

    let doctor_scope = StoredValue::new((role == Role::Doctor).then(|| user.id.clone()));

    let load = move || {
        vm.load(move |page, filters| async move {
            let doctor_scope = doctor_scope.get_value();
            api::reports::list(page, &filters, doctor_scope.as_deref()).await
        });
    };

    {
        let load = load.clone();
        Effect::new(move |_| {
            vm.page.get();
            vm.filters.get();
            load();
        });
    }

    let (patients, set_patients) = signal(Vec::<User>::new());
    let (doctors, set_doctors) = signal(Vec::<User>::new());
    let show_doctor_filter = role == Role::Admin;
    if show_doctor_filter || can_create(role, Screen::MedicalReports) {
        spawn_local(async move {
            match api::users::by_roles(&["patient"]).await {
                Ok(list) => set_patients.set(list),
                Err(e) => console::error!(format!("患者一覧の取得に失敗: {}", e)),
            }
            match api::users::by_roles(&["doctor"]).await {
                Ok(list) => set_doctors.set(list),
                Err(e) => console::error!(format!("医師一覧の取得に失敗: {}", e)),
            }
        });
    }

    let on_status_change = {
        let load = load.clone();
        move |id: String, status: ReportStatus| {
            let load = load.clone();
            spawn_local(async move {
                match api::reports::update_status(&id, status).await {
                    Ok(()) => {
                        toasts.success("レポートのステータスを更新しました");
                        load();
                    }
                    Err(e) => toasts.error(e.user_message()),
                }
            });
        }
    };

    let on_delete = {
        let load = load.clone();
        move |id: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("このレポートを削除しますか？")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::reports::remove(&id).await {
                    Ok(()) => {
                        toasts.success("レポートを削除しました");
                        load();
                    }
                    Err(e) => toasts.error(e.user_message()),
                }
            });
        }
    };

    let (show_form, set_show_form) = signal(false);
    let (draft, set_draft) = signal(ReportDraft::default());

    let open_form = move |_| {
        set_draft.set(ReportDraft {
            date: today_iso(),
            ..Default::default()
        });
        set_show_form.set(true);
    };

    let reset_form = move || {
        set_show_form.set(false);
        set_draft.set(ReportDraft::default());
    };

    let on_submit = {
        let load = load.clone();
        let doctor_scope = doctor_scope.clone();
        move |_| {
            let mut current = draft.get_untracked();
            // 医師が作成する場合は自分が作成者になる
            if let Some(id) = &doctor_scope.get_value() {
                current.doctor = id.clone();
            }
            if let Err(e) = current.validate() {
                toasts.error(e.user_message());
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::reports::create(&current).await {
                    Ok(()) => {
                        toasts.success("レポートを作成しました");
                        reset_form();
                        if vm.page.get_untracked() == 1 {
                            load();
                        } else {
                            vm.set_page(1);
                        }
                    }
                    Err(e) => toasts.error(e.user_message()),
                }
            });
        }
    };

    let visible = Memo::new(move |_| vm.visible());
    let allow_update = can_update_status(role, Screen::MedicalReports);
    let allow_delete = can_delete(role, Screen::MedicalReports);
    let show_doctor_select = role != Role::Doctor;

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"医療レポート"</h2>
                <Show when=move || can_create(role, Screen::MedicalReports)>
                    <button class="btn btn-primary" on:click=open_form>
                        "新規レポート"
                    </button>
                </Show>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="患者名・タイトルで検索..."
                    prop:value=move || vm.filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.set_filter(|f| f.search = value);
                    }
                />
                <select
                    class="filter-select"
                    prop:value=move || {
                        let category = vm.filters.get().category;
                        if category.is_empty() { "all".to_string() } else { category }
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.set_filter(|f| f.category = value);
                    }
                >
                    <option value="all" selected=move || vm.filters.get().category.is_empty()>
                        "すべての種別"
                    </option>
                    {REPORT_TYPES
                        .iter()
                        .map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option
                                    value=value
                                    selected=move || vm.filters.get().category == value
                                >
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <select
                    class="filter-select"
                    prop:value=move || {
                        let status = vm.filters.get().status;
                        if status.is_empty() { "all".to_string() } else { status }
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.set_filter(|f| f.status = value);
                    }
                >
                    <option value="all" selected=move || vm.filters.get().status.is_empty()>
                        "すべてのステータス"
                    </option>
                    {ReportStatus::ALL
                        .iter()
                        .map(|s| {
                            let s = *s;
                            view! {
                                <option
                                    value=s.as_str()
                                    selected=move || vm.filters.get().status == s.as_str()
                                >
                                    {status_label_ja(s.as_str())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <Show when=move || show_doctor_filter>
                    <select
                        class="filter-select"
                        prop:value=move || {
                            let person = vm.filters.get().person;
                            if person.is_empty() { "all".to_string() } else { person }
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.set_filter(|f| f.person = value);
                        }
                    >
                        <option value="all" selected=move || vm.filters.get().person.is_empty()>
                            "すべての医師"
                        </option>
                        <For
                            each=move || doctors.get()
                            key=|d| d.id.clone()
                            children=move |doctor| {
                                let id = doctor.id.clone();
                                view! {
                                    <option
                                        value=doctor.id.clone()
                                        selected=move || vm.filters.get().person == id
                                    >
                                        {doctor.full_name()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </Show>
                <button class="btn btn-small btn-tertiary" on:click=move |_| vm.clear_filters()>
                    "条件をクリア"
                </button>
            </div>

            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <Show when=move || !vm.loading.get()>
                            <p class="text-muted">"該当するレポートがありません"</p>
                        </Show>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"患者"</th>
                            <th>"タイトル"</th>
                            <th>"種別"</th>
                            <th>"医師"</th>
                            <th>"日付"</th>
                            <th>"ステータス"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|report| format!("{}:{}", report.id, report.status)
                            children=move |report| {
                                let on_status_change = on_status_change.clone();
                                let on_delete = on_delete.clone();
                                let status = report.status.clone();
                                let row_id = report.id.clone();
                                let delete_id = report.id.clone();
                                view! {
                                    <tr>
                                        <td>{report.patient.full_name()}</td>
                                        <td>{report.title.clone()}</td>
                                        <td>{report_type_label(&report.report_type).to_string()}</td>
                                        <td>{report.doctor.full_name()}</td>
                                        <td>{date_part(&report.date).to_string()}</td>
                                        <td>
                                            {if allow_update {
                                                view! {
                                                    <select
                                                        class="status-select"
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            if let Some(s) = ReportStatus::ALL
                                                                .iter()
                                                                .find(|s| s.as_str() == value)
                                                            {
                                                                on_status_change(row_id.clone(), *s);
                                                            }
                                                        }
                                                    >
                                                        {ReportStatus::ALL
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
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <StatusBadge status=report.status.clone() /> }
                                                    .into_any()
                                            }}
                                        </td>
                                        <td>
                                            <Show when=move || allow_delete>
                                                <button
                                                    class="btn btn-small btn-danger"
                                                    on:click={
                                                        let on_delete = on_delete.clone();
                                                        let delete_id = delete_id.clone();
                                                        move |_| on_delete(delete_id.clone())
                                                    }
                                                >
                                                    "削除"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Pager pagination=vm.pagination.read_only() on_page=move |p| vm.set_page(p) />

            <Modal title="新規レポート" open=show_form on_close=move |_| reset_form()>
                <div class="form-group">
                    <label>"患者"</label>
                    <select
                        prop:value=move || draft.get().patient
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.patient = value);
                        }
                    >
                        <option value="" selected=move || draft.get().patient.is_empty()>
                            "患者を選択..."
                        </option>
                        <For
                            each=move || patients.get()
                            key=|p| p.id.clone()
                            children=move |patient| {
                                let id = patient.id.clone();
                                view! {
                                    <option
                                        value=patient.id.clone()
                                        selected=move || draft.get().patient == id
                                    >
                                        {patient.full_name()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
                <Show when=move || show_doctor_select>
                    <div class="form-group">
                        <label>"医師"</label>
                        <select
                            prop:value=move || draft.get().doctor
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.update(|d| d.doctor = value);
                            }
                        >
                            <option value="" selected=move || draft.get().doctor.is_empty()>
                                "医師を選択..."
                            </option>
                            <For
                                each=move || doctors.get()
                                key=|d| d.id.clone()
                                children=move |doctor| {
                                    let id = doctor.id.clone();
                                    view! {
                                        <option
                                            value=doctor.id.clone()
                                            selected=move || draft.get().doctor == id
                                        >
                                            {doctor.full_name()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                </Show>
                <div class="form-group">
                    <label>"タイトル"</label>
                    <input
                        type="text"
                        placeholder="例: 血液検査結果"
                        prop:value=move || draft.get().title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.title = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"種別"</label>
                    <select
                        prop:value=move || draft.get().report_type
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.report_type = value);
                        }
                    >
                        <option value="" selected=move || draft.get().report_type.is_empty()>
                            "種別を選択..."
                        </option>
                        {REPORT_TYPES
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <option
                                        value=value
                                        selected=move || draft.get().report_type == value
                                    >
                                        {*label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"日付"</label>
                    <input
                        type="date"
                        prop:value=move || draft.get().date
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.date = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"所見"</label>
                    <textarea
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.description = value);
                        }
                    ></textarea>
                </div>
                <div class="form-actions">
                    <button class="btn btn-secondary" on:click=move |_| reset_form()>
                        "キャンセル"
                    </button>
                    <button class="btn btn-primary" on:click=on_submit.clone()>
                        "作成"
                    </button>
                </div>
            </Modal>
        </section>
    }
}
