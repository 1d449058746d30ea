//! 画面

pub mod appointments;
pub mod care_tasks;
pub mod doctor_dashboard;
pub mod equipment;
pub mod home;
pub mod medical_reports;
pub mod prescriptions;

pub use appointments::AppointmentsPage;
pub use care_tasks::CareTasksPage;
pub use doctor_dashboard::DoctorDashboardPage;
pub use equipment::EquipmentPage;
pub use home::HomePage;
pub use medical_reports::MedicalReportsPage;
pub use prescriptions::PrescriptionsPage;

/// ISO日時文字列から日付部分だけを取り出す（表示用）
pub(crate) fn date_part(value: &str) -> &str {
    value.get(..10).unwrap_or(value)
}

/// 今日の日付（YYYY-MM-DD）
pub(crate) fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}
