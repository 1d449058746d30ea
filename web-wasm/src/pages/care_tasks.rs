//! ケアタスク一覧画面
//!
//! エンドポイントはページングなしの素配列を返すので、絞り込みは
//! すべてクライアント側で行う。ステータス変更はPATCH。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mediboard_common::{
    can_create, can_delete, can_update_status, CareTask, CareTaskDraft, Role, Screen, TaskStatus,
    User,
};

use crate::api;
use crate::components::status_badge::status_label_ja;
use crate::components::toast::use_toasts;
use crate::components::{Modal, Spinner, StatusBadge};
use crate::list_vm::ListVm;
use crate::pages::date_part;

fn priority_label(priority: &str) -> &str {
    match priority {
        "High" => "高",
        "Medium" => "中",
        "Low" => "低",
        other => other,
    }
}

#[component]
pub fn CareTasksPage(role: Role) -> impl IntoView {
    let vm: ListVm<CareTask> = ListVm::new();
    let toasts = use_toasts();

    let load = move || {
        vm.load(|_page, _filters| async move { api::care_tasks::list().await });
    };

    Effect::new(move |_| {
        vm.page.get();
        vm.filters.get();
        load();
    });

    let (patients, set_patients) = signal(Vec::<User>::new());
    let (nurses, set_nurses) = signal(Vec::<User>::new());
    if can_create(role, Screen::CareTasks) {
        spawn_local(async move {
            match api::users::by_roles(&["patient"]).await {
                Ok(list) => set_patients.set(list),
                Err(e) => console::error!(format!("患者一覧の取得に失敗: {}", e)),
            }
            match api::users::by_roles(&["nurse"]).await {
                Ok(list) => set_nurses.set(list),
                Err(e) => console::error!(format!("看護師一覧の取得に失敗: {}", e)),
            }
        });
    }

    let on_status_change = move |id: String, status: TaskStatus| {
        spawn_local(async move {
            match api::care_tasks::update_status(&id, status).await {
                Ok(()) => {
                    toasts.success("タスクのステータスを更新しました");
                    load();
                }
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    let on_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("このタスクを削除しますか？")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::care_tasks::remove(&id).await {
                Ok(()) => {
                    toasts.success("タスクを削除しました");
                    load();
                }
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    let (show_form, set_show_form) = signal(false);
    let (draft, set_draft) = signal(CareTaskDraft::default());

    let reset_form = move || {
        set_show_form.set(false);
        set_draft.set(CareTaskDraft::default());
    };

    let on_submit = move |_| {
        let current = draft.get_untracked();
        if let Err(e) = current.validate() {
            toasts.error(e.user_message());
            return;
        }
        spawn_local(async move {
            match api::care_tasks::create(&current).await {
                Ok(()) => {
                    toasts.success("タスクを作成しました");
                    reset_form();
                    load();
                }
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    let visible = Memo::new(move |_| vm.visible());
    let allow_update = can_update_status(role, Screen::CareTasks);
    let allow_delete = can_delete(role, Screen::CareTasks);

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"ケアタスク"</h2>
                <Show when=move || can_create(role, Screen::CareTasks)>
                    <button class="btn btn-primary" on:click=move |_| set_show_form.set(true)>
                        "新規タスク"
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
                    {TaskStatus::ALL
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
                            <p class="text-muted">"該当するタスクがありません"</p>
                        </Show>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"患者"</th>
                            <th>"タイトル"</th>
                            <th>"担当"</th>
                            <th>"期限"</th>
                            <th>"優先度"</th>
                            <th>"ステータス"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|task| format!("{}:{}", task.id, task.status)
                            children=move |task| {
                                let status = task.status.clone();
                                let row_id = task.id.clone();
                                let delete_id = task.id.clone();
                                view! {
                                    <tr>
                                        <td>{task.patient.full_name()}</td>
                                        <td>{task.title.clone()}</td>
                                        <td>{task.assigned_to.full_name()}</td>
                                        <td>{date_part(&task.due_date).to_string()}</td>
                                        <td>{priority_label(&task.priority).to_string()}</td>
                                        <td>
                                            {if allow_update {
                                                view! {
                                                    <select
                                                        class="status-select"
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            if let Some(s) = TaskStatus::ALL
                                                                .iter()
                                                                .find(|s| s.as_str() == value)
                                                            {
                                                                on_status_change(row_id.clone(), *s);
                                                            }
                                                        }
                                                    >
                                                        {TaskStatus::ALL
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
                                                view! { <StatusBadge status=task.status.clone() /> }
                                                    .into_any()
                                            }}
                                        </td>
                                        <td>
                                            <Show when=move || allow_delete>
                                                <button
                                                    class="btn btn-small btn-danger"
                                                    on:click={
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

            <Modal title="新規タスク" open=show_form on_close=move |_| reset_form()>
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
                    <label>"担当看護師"</label>
                    <select
                        prop:value=move || draft.get().assigned_to
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.assigned_to = value);
                        }
                    >
                        <option value="" selected=move || draft.get().assigned_to.is_empty()>
                            "担当を選択..."
                        </option>
                        <For
                            each=move || nurses.get()
                            key=|n| n.id.clone()
                            children=move |nurse| {
                                let id = nurse.id.clone();
                                view! {
                                    <option
                                        value=nurse.id.clone()
                                        selected=move || draft.get().assigned_to == id
                                    >
                                        {nurse.full_name()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
                <div class="form-group">
                    <label>"タイトル"</label>
                    <input
                        type="text"
                        placeholder="例: バイタル測定"
                        prop:value=move || draft.get().title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.title = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"内容"</label>
                    <textarea
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.description = value);
                        }
                    ></textarea>
                </div>
                <div class="form-group">
                    <label>"期限"</label>
                    <input
                        type="date"
                        prop:value=move || draft.get().due_date
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.due_date = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"優先度"</label>
                    <select
                        prop:value=move || draft.get().priority
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.priority = value);
                        }
                    >
                        <option value="" selected=move || draft.get().priority.is_empty()>
                            "選択..."
                        </option>
                        <option value="High">"高"</option>
                        <option value="Medium">"中"</option>
                        <option value="Low">"低"</option>
                    </select>
                </div>
                <div class="form-actions">
                    <button class="btn btn-secondary" on:click=move |_| reset_form()>
                        "キャンセル"
                    </button>
                    <button class="btn btn-primary" on:click=on_submit>
                        "作成"
                    </button>
                </div>
            </Modal>
        </section>
    }
}
