//! ロールと画面構成
//!
//! ロール→メニューは静的なルックアップテーブル、操作可否は純粋な
//! 述語関数。クラス階層は作らない。

/// ログインユーザーのロール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Doctor,
    Nurse,
    Receptionist,
    Patient,
}

impl Role {
    /// セッションのロール文字列をパースする
    ///
    /// 大文字小文字は無視。未知の文字列は最小権限のPatient扱い
    pub fn parse(value: &str) -> Role {
        match value.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "doctor" => Role::Doctor,
            "nurse" => Role::Nurse,
            "receptionist" => Role::Receptionist,
            _ => Role::Patient,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::Receptionist => "receptionist",
            Role::Patient => "patient",
        }
    }

    /// 表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "管理者",
            Role::Doctor => "医師",
            Role::Nurse => "看護師",
            Role::Receptionist => "受付",
            Role::Patient => "患者",
        }
    }
}

/// アプリ内の画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    DoctorDashboard,
    Appointments,
    CareTasks,
    Prescriptions,
    MedicalReports,
    Equipment,
}

impl Screen {
    /// ナビゲーション表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "ホーム",
            Screen::DoctorDashboard => "ダッシュボード",
            Screen::Appointments => "予約",
            Screen::CareTasks => "ケアタスク",
            Screen::Prescriptions => "処方",
            Screen::MedicalReports => "医療レポート",
            Screen::Equipment => "検査機器",
        }
    }
}

/// ロールごとのナビゲーションメニュー
pub fn menu_for(role: Role) -> &'static [Screen] {
    use Screen::*;
    match role {
        Role::Admin => &[
            Home,
            Appointments,
            CareTasks,
            Prescriptions,
            MedicalReports,
            Equipment,
        ],
        Role::Doctor => &[Home, DoctorDashboard, Appointments, MedicalReports, Prescriptions],
        Role::Nurse => &[Home, CareTasks, Appointments, Equipment],
        Role::Receptionist => &[Home, Appointments],
        Role::Patient => &[Home, Appointments, Prescriptions],
    }
}

/// ログイン直後に開く画面
pub fn default_screen(role: Role) -> Screen {
    match role {
        Role::Doctor => Screen::DoctorDashboard,
        _ => Screen::Home,
    }
}

/// 新規作成を出せるか
pub fn can_create(role: Role, screen: Screen) -> bool {
    match screen {
        Screen::Appointments => matches!(role, Role::Admin | Role::Receptionist),
        Screen::CareTasks => matches!(role, Role::Admin | Role::Nurse),
        Screen::Prescriptions => matches!(role, Role::Admin | Role::Doctor),
        Screen::MedicalReports => matches!(role, Role::Admin | Role::Doctor),
        Screen::Equipment => matches!(role, Role::Admin),
        Screen::Home | Screen::DoctorDashboard => false,
    }
}

/// ステータス変更を出せるか
pub fn can_update_status(role: Role, screen: Screen) -> bool {
    match screen {
        Screen::Appointments => matches!(role, Role::Admin | Role::Receptionist | Role::Doctor),
        Screen::CareTasks => matches!(role, Role::Admin | Role::Nurse),
        Screen::Prescriptions => matches!(role, Role::Admin | Role::Doctor),
        Screen::MedicalReports => matches!(role, Role::Admin | Role::Doctor),
        Screen::Equipment => matches!(role, Role::Admin | Role::Nurse),
        Screen::Home | Screen::DoctorDashboard => false,
    }
}

/// 削除を出せるか
pub fn can_delete(role: Role, screen: Screen) -> bool {
    match screen {
        Screen::Appointments => matches!(role, Role::Admin | Role::Receptionist),
        Screen::CareTasks => matches!(role, Role::Admin),
        Screen::Prescriptions => matches!(role, Role::Admin),
        Screen::MedicalReports => matches!(role, Role::Admin | Role::Doctor),
        Screen::Equipment => matches!(role, Role::Admin),
        Screen::Home | Screen::DoctorDashboard => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Doctor"), Role::Doctor);
        assert_eq!(Role::parse("NURSE"), Role::Nurse);
        assert_eq!(Role::parse(" receptionist "), Role::Receptionist);
        assert_eq!(Role::parse("patient"), Role::Patient);
    }

    #[test]
    fn test_role_parse_unknown_falls_back_to_patient() {
        assert_eq!(Role::parse("superuser"), Role::Patient);
        assert_eq!(Role::parse(""), Role::Patient);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            Role::Admin,
            Role::Doctor,
            Role::Nurse,
            Role::Receptionist,
            Role::Patient,
        ] {
            assert_eq!(Role::parse(role.as_str()), role);
        }
    }

    #[test]
    fn test_menu_always_starts_with_home() {
        for role in [
            Role::Admin,
            Role::Doctor,
            Role::Nurse,
            Role::Receptionist,
            Role::Patient,
        ] {
            assert_eq!(menu_for(role)[0], Screen::Home);
        }
    }

    #[test]
    fn test_menu_admin_has_all_collections() {
        let menu = menu_for(Role::Admin);
        assert!(menu.contains(&Screen::Appointments));
        assert!(menu.contains(&Screen::CareTasks));
        assert!(menu.contains(&Screen::Prescriptions));
        assert!(menu.contains(&Screen::MedicalReports));
        assert!(menu.contains(&Screen::Equipment));
        // ダッシュボードは医師専用
        assert!(!menu.contains(&Screen::DoctorDashboard));
    }

    #[test]
    fn test_menu_doctor_has_dashboard() {
        let menu = menu_for(Role::Doctor);
        assert!(menu.contains(&Screen::DoctorDashboard));
        assert!(menu.contains(&Screen::MedicalReports));
        assert!(!menu.contains(&Screen::Equipment));
    }

    #[test]
    fn test_menu_patient_is_read_only_surface() {
        let menu = menu_for(Role::Patient);
        assert!(menu.contains(&Screen::Appointments));
        assert!(menu.contains(&Screen::Prescriptions));
        assert!(!menu.contains(&Screen::CareTasks));
        assert!(!menu.contains(&Screen::MedicalReports));
    }

    #[test]
    fn test_default_screen() {
        assert_eq!(default_screen(Role::Doctor), Screen::DoctorDashboard);
        assert_eq!(default_screen(Role::Admin), Screen::Home);
        assert_eq!(default_screen(Role::Patient), Screen::Home);
    }

    #[test]
    fn test_patient_has_no_mutations() {
        for screen in [
            Screen::Appointments,
            Screen::CareTasks,
            Screen::Prescriptions,
            Screen::MedicalReports,
            Screen::Equipment,
        ] {
            assert!(!can_create(Role::Patient, screen));
            assert!(!can_update_status(Role::Patient, screen));
            assert!(!can_delete(Role::Patient, screen));
        }
    }

    #[test]
    fn test_receptionist_manages_appointments_only() {
        assert!(can_create(Role::Receptionist, Screen::Appointments));
        assert!(can_update_status(Role::Receptionist, Screen::Appointments));
        assert!(can_delete(Role::Receptionist, Screen::Appointments));
        assert!(!can_create(Role::Receptionist, Screen::Prescriptions));
        assert!(!can_update_status(Role::Receptionist, Screen::Equipment));
    }

    #[test]
    fn test_nurse_owns_care_tasks() {
        assert!(can_create(Role::Nurse, Screen::CareTasks));
        assert!(can_update_status(Role::Nurse, Screen::CareTasks));
        assert!(!can_delete(Role::Nurse, Screen::CareTasks));
        assert!(can_update_status(Role::Nurse, Screen::Equipment));
        assert!(!can_create(Role::Nurse, Screen::Equipment));
    }

    #[test]
    fn test_doctor_updates_but_prescribes_and_reports() {
        assert!(can_update_status(Role::Doctor, Screen::Appointments));
        assert!(!can_create(Role::Doctor, Screen::Appointments));
        assert!(can_create(Role::Doctor, Screen::Prescriptions));
        assert!(can_create(Role::Doctor, Screen::MedicalReports));
        assert!(can_delete(Role::Doctor, Screen::MedicalReports));
    }

    #[test]
    fn test_static_screens_have_no_actions() {
        for role in [Role::Admin, Role::Doctor] {
            assert!(!can_create(role, Screen::Home));
            assert!(!can_update_status(role, Screen::DoctorDashboard));
        }
    }
}
