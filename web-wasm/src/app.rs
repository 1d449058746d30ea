//! アプリケーションルート
//!
//! 画面切替はメモリ上のenumで行う（URLルーティングはスコープ外）。
//! ログインユーザーはセッション境界（localStorage）から受け取り、
//! 認証そのものはここでは扱わない。

use gloo::storage::{LocalStorage, Storage};
use leptos::prelude::*;

use mediboard_common::{default_screen, Role, Screen, User};

use crate::components::toast::Toasts;
use crate::components::{NavBar, ToastStack};
use crate::pages::{
    AppointmentsPage, CareTasksPage, DoctorDashboardPage, EquipmentPage, HomePage,
    MedicalReportsPage, PrescriptionsPage,
};

const SESSION_USER_KEY: &str = "mediboard.user";

/// セッションのユーザーを読む。なければゲスト（患者扱い）
fn session_user() -> User {
    LocalStorage::get::<User>(SESSION_USER_KEY).unwrap_or_else(|_| User {
        id: "guest".to_string(),
        first_name: "ゲスト".to_string(),
        last_name: String::new(),
        email: String::new(),
        role: "patient".to_string(),
    })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let user = session_user();
    let role = Role::parse(&user.role);
    let (screen, set_screen) = signal(default_screen(role));

    provide_context(Toasts::new());

    let nav_user = user.clone();
    view! {
        <div class="container">
            <NavBar user=nav_user role=role screen=screen on_navigate=move |s| set_screen.set(s) />

            <main class="content">
                {move || {
                    let user = user.clone();
                    match screen.get() {
                        Screen::Home => view! { <HomePage /> }.into_any(),
                        Screen::DoctorDashboard => {
                            view! { <DoctorDashboardPage user=user /> }.into_any()
                        }
                        Screen::Appointments => {
                            view! { <AppointmentsPage user=user role=role /> }.into_any()
                        }
                        Screen::CareTasks => view! { <CareTasksPage role=role /> }.into_any(),
                        Screen::Prescriptions => {
                            view! { <PrescriptionsPage user=user role=role /> }.into_any()
                        }
                        Screen::MedicalReports => {
                            view! { <MedicalReportsPage user=user role=role /> }.into_any()
                        }
                        Screen::Equipment => view! { <EquipmentPage role=role /> }.into_any(),
                    }
                }}
            </main>

            <ToastStack />
        </div>
    }
}
