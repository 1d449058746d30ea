//! 予約一覧画面
//!
//! ListVmの最も手厚いインスタンス。検索・ステータス・日付・医師の
//! 4条件フィルタ、サーバー側ページング、ステータス更新、作成モーダル、
//! 削除（確認ダイアログ付き）を備える。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mediboard_common::{
    can_create, can_delete, can_update_status, Appointment, AppointmentDraft, AppointmentStatus,
    Role, Screen, User,
};

use crate::api;
use crate::components::status_badge::status_label_ja;
use crate::components::toast::use_toasts;
use crate::components::{Modal, Pager, Spinner, StatusBadge};
use crate::list_vm::ListVm;
use crate::pages::date_part;

#[component]
pub fn AppointmentsPage(user: User, role: Role) -> impl IntoView {
    let vm: ListVm<Appointment> = ListVm::new();
    let toasts = use_toasts();

    // 医師・患者は自分に紐づく予約だけを見る
    let doctor_scope = StoredValue::new((role == Role::Doctor).then(|| user.id.clone()));
    let patient_scope = StoredValue::new((role == Role::Patient).then(|| user.id.clone()));

    let load = move || {
        vm.load(move |page, filters| async move {
            let doctor_scope = doctor_scope.get_value();
            let patient_scope = patient_scope.get_value();
            api::appointments::list(
                page,
                &filters,
                doctor_scope.as_deref(),
                patient_scope.as_deref(),
            )
            .await
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

    // フォームのセレクト用に患者・医師を読み込む
    let (patients, set_patients) = signal(Vec::<User>::new());
    let (doctors, set_doctors) = signal(Vec::<User>::new());
    let show_doctor_filter = matches!(role, Role::Admin | Role::Receptionist);
    if show_doctor_filter || can_create(role, Screen::Appointments) {
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
        move |id: String, status: AppointmentStatus| {
            let load = load.clone();
            spawn_local(async move {
                match api::appointments::update_status(&id, status).await {
                    Ok(()) => {
                        toasts.success("予約ステータスを更新しました");
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
                    w.confirm_with_message("この予約を削除しますか？")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::appointments::remove(&id).await {
                    Ok(()) => {
                        toasts.success("予約を削除しました");
                        load();
                    }
                    Err(e) => toasts.error(e.user_message()),
                }
            });
        }
    };

    // 作成モーダル
    let (show_form, set_show_form) = signal(false);
    let (draft, set_draft) = signal(AppointmentDraft::default());

    let reset_form = move || {
        set_show_form.set(false);
        set_draft.set(AppointmentDraft::default());
    };

    let on_submit = {
        let load = load.clone();
        move |_| {
            let current = draft.get_untracked();
            if let Err(e) = current.validate() {
                // 必須項目が欠けている間はネットワーク呼び出しをしない
                toasts.error(e.user_message());
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::appointments::create(&current).await {
                    Ok(()) => {
                        toasts.success("予約を作成しました");
                        set_show_form.set(false);
                        set_draft.set(AppointmentDraft::default());
                        // 新しい順に並ぶので1ページ目に戻して見えるようにする
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
    let allow_update = can_update_status(role, Screen::Appointments);
    let allow_delete = can_delete(role, Screen::Appointments);

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"予約管理"</h2>
                <Show when=move || can_create(role, Screen::Appointments)>
                    <button class="btn btn-primary" on:click=move |_| set_show_form.set(true)>
                        "新規予約"
                    </button>
                </Show>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="患者名・医師名・理由で検索..."
                    prop:value=move || vm.filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.set_filter(|f| f.search = value);
                    }
                />
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
                    {AppointmentStatus::ALL
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
                <input
                    type="date"
                    class="filter-date"
                    prop:value=move || vm.filters.get().date
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.set_filter(|f| f.date = value);
                    }
                />
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
                            <p class="text-muted">"該当する予約がありません"</p>
                        </Show>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"患者"</th>
                            <th>"医師"</th>
                            <th>"日付"</th>
                            <th>"時刻"</th>
                            <th>"理由"</th>
                            <th>"ステータス"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|apt| format!("{}:{}", apt.id, apt.status)
                            children=move |apt| {
                                let on_status_change = on_status_change.clone();
                                let on_delete = on_delete.clone();
                                let status = apt.status.clone();
                                let row_id = apt.id.clone();
                                let delete_id = apt.id.clone();
                                view! {
                                    <tr>
                                        <td>{apt.patient.full_name()}</td>
                                        <td>{apt.doctor.full_name()}</td>
                                        <td>{date_part(&apt.date).to_string()}</td>
                                        <td>{apt.time.clone()}</td>
                                        <td>{apt.reason.clone()}</td>
                                        <td>
                                            {if allow_update {
                                                view! {
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
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <StatusBadge status=apt.status.clone() /> }
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

            <Modal title="新規予約" open=show_form on_close=move |_| reset_form()>
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
                    <label>"時刻"</label>
                    <input
                        type="time"
                        prop:value=move || draft.get().time
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.time = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"診察理由"</label>
                    <input
                        type="text"
                        placeholder="例: 定期検診"
                        prop:value=move || draft.get().reason
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.reason = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"メモ"</label>
                    <textarea
                        prop:value=move || draft.get().notes
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.notes = value);
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
