//! 処方一覧画面
//!
//! 患者は自分宛の処方を読み取り専用で見る。医師は自分の処方を管理する。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mediboard_common::{
    can_create, can_delete, can_update_status, Prescription, PrescriptionDraft,
    PrescriptionStatus, Role, Screen, User,
};

use crate::api;
use crate::components::status_badge::status_label_ja;
use crate::components::toast::use_toasts;
use crate::components::{Modal, Pager, Spinner, StatusBadge};
use crate::list_vm::ListVm;
use crate::pages::date_part;

#[component]
pub fn PrescriptionsPage(user: User, role: Role) -> impl IntoView {
    let vm: ListVm<Prescription> = ListVm::new();
    let toasts = use_toasts();

    let doctor_scope = StoredValue::new((role == Role::Doctor).then(|| user.id.clone()));
    let patient_scope = StoredValue::new((role == Role::Patient).then(|| user.id.clone()));

    let load = move || {
        vm.load(move |page, filters| async move {
            let doctor_scope = doctor_scope.get_value();
            let patient_scope = patient_scope.get_value();
            api::prescriptions::list(
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

    let (patients, set_patients) = signal(Vec::<User>::new());
    let show_patient_filter = matches!(role, Role::Admin | Role::Doctor);
    if show_patient_filter || can_create(role, Screen::Prescriptions) {
        spawn_local(async move {
            match api::users::by_roles(&["patient"]).await {
                Ok(list) => set_patients.set(list),
                Err(e) => console::error!(format!("患者一覧の取得に失敗: {}", e)),
            }
        });
    }

    let on_status_change = {
        let load = load.clone();
        move |id: String, status: PrescriptionStatus| {
            let load = load.clone();
            spawn_local(async move {
                match api::prescriptions::update_status(&id, status).await {
                    Ok(()) => {
                        toasts.success("処方ステータスを更新しました");
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
                    w.confirm_with_message("この処方を削除しますか？")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::prescriptions::remove(&id).await {
                    Ok(()) => {
                        toasts.success("処方を削除しました");
                        load();
                    }
                    Err(e) => toasts.error(e.user_message()),
                }
            });
        }
    };

    let (show_form, set_show_form) = signal(false);
    let (draft, set_draft) = signal(PrescriptionDraft::default());

    let reset_form = move || {
        set_show_form.set(false);
        set_draft.set(PrescriptionDraft::default());
    };

    let on_submit = {
        let load = load.clone();
        let doctor_scope = doctor_scope.clone();
        move |_| {
            let mut current = draft.get_untracked();
            // 医師が作成する場合は自分が処方医になる
            if let Some(id) = &doctor_scope.get_value() {
                current.doctor = id.clone();
            }
            if let Err(e) = current.validate() {
                toasts.error(e.user_message());
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::prescriptions::create(&current).await {
                    Ok(()) => {
                        toasts.success("処方を作成しました");
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
    let allow_update = can_update_status(role, Screen::Prescriptions);
    let allow_delete = can_delete(role, Screen::Prescriptions);

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"処方管理"</h2>
                <Show when=move || can_create(role, Screen::Prescriptions)>
                    <button class="btn btn-primary" on:click=move |_| set_show_form.set(true)>
                        "新規処方"
                    </button>
                </Show>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="患者名・薬剤名で検索..."
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
                    {PrescriptionStatus::ALL
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
                <Show when=move || show_patient_filter>
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
                            "すべての患者"
                        </option>
                        <For
                            each=move || patients.get()
                            key=|p| p.id.clone()
                            children=move |patient| {
                                let id = patient.id.clone();
                                view! {
                                    <option
                                        value=patient.id.clone()
                                        selected=move || vm.filters.get().person == id
                                    >
                                        {patient.full_name()}
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
                            <p class="text-muted">"該当する処方がありません"</p>
                        </Show>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"患者"</th>
                            <th>"薬剤"</th>
                            <th>"用量"</th>
                            <th>"頻度"</th>
                            <th>"開始日"</th>
                            <th>"ステータス"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|rx| format!("{}:{}", rx.id, rx.status)
                            children=move |rx| {
                                let on_status_change = on_status_change.clone();
                                let on_delete = on_delete.clone();
                                let status = rx.status.clone();
                                let row_id = rx.id.clone();
                                let delete_id = rx.id.clone();
                                view! {
                                    <tr>
                                        <td>{rx.patient.full_name()}</td>
                                        <td>{rx.medication.clone()}</td>
                                        <td>{rx.dosage.clone()}</td>
                                        <td>{rx.frequency.clone()}</td>
                                        <td>{date_part(&rx.start_date).to_string()}</td>
                                        <td>
                                            {if allow_update {
                                                view! {
                                                    <select
                                                        class="status-select"
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            if let Some(s) = PrescriptionStatus::ALL
                                                                .iter()
                                                                .find(|s| s.as_str() == value)
                                                            {
                                                                on_status_change(row_id.clone(), *s);
                                                            }
                                                        }
                                                    >
                                                        {PrescriptionStatus::ALL
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
                                                view! { <StatusBadge status=rx.status.clone() /> }
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

            <Modal title="新規処方" open=show_form on_close=move |_| reset_form()>
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
                    <label>"薬剤名"</label>
                    <input
                        type="text"
                        placeholder="例: アモキシシリン"
                        prop:value=move || draft.get().medication
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.medication = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"用量"</label>
                    <input
                        type="text"
                        placeholder="例: 250mg"
                        prop:value=move || draft.get().dosage
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.dosage = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"頻度"</label>
                    <input
                        type="text"
                        placeholder="例: 1日3回 毎食後"
                        prop:value=move || draft.get().frequency
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.frequency = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"日数"</label>
                    <input
                        type="text"
                        placeholder="例: 7日分"
                        prop:value=move || draft.get().duration
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.duration = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"服薬指示"</label>
                    <textarea
                        prop:value=move || draft.get().instructions
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.instructions = value);
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
