//! ドメインレコードの型定義
//!
//! バックエンドから取得するレコード群。サーバー側スキーマが正で、
//! クライアントは表示と絞り込みに必要な最小限の形だけを仮定する。
//! 欠けたフィールドはデフォルト値で埋める（#[serde(default)]）。
//!
//! ステータスは取得時には文字列のまま保持し（未知の値で一覧全体が
//! 落ちないように）、更新系APIに渡すときだけ各画面のenumを通す。

use serde::{Deserialize, Serialize};

use crate::filter::ListRecord;

/// 埋め込みの参照サブオブジェクト（患者・医師・担当者）
///
/// バックエンドが二次参照を避けるためインラインで返してくる
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl PersonRef {
    /// 表示用フルネーム
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// ログインユーザー（セッション境界から受け取る）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// 予約
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appointment {
    #[serde(alias = "_id")]
    pub id: String,
    pub patient: PersonRef,
    pub doctor: PersonRef,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
    pub notes: String,
}

impl ListRecord for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &str {
        &self.status
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.patient.full_name(),
            self.doctor.full_name(),
            self.reason
        )
    }

    fn event_date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

/// ケアタスク
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareTask {
    #[serde(alias = "_id")]
    pub id: String,
    pub patient: PersonRef,
    pub assigned_to: PersonRef,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
    pub status: String,
}

impl ListRecord for CareTask {
    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &str {
        &self.status
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.patient.full_name(),
            self.title,
            self.description
        )
    }

    fn event_date(&self) -> Option<&str> {
        Some(&self.due_date)
    }
}

/// 処方
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prescription {
    #[serde(alias = "_id")]
    pub id: String,
    pub patient: PersonRef,
    pub doctor: PersonRef,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
    pub start_date: String,
    pub status: String,
}

impl ListRecord for Prescription {
    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &str {
        &self.status
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.patient.full_name(), self.medication)
    }

    fn event_date(&self) -> Option<&str> {
        Some(&self.start_date)
    }
}

/// 医療レポート
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalReport {
    #[serde(alias = "_id")]
    pub id: String,
    pub patient: PersonRef,
    pub doctor: PersonRef,
    pub title: String,
    pub report_type: String,
    pub description: String,
    pub date: String,
    pub status: String,
}

impl ListRecord for MedicalReport {
    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &str {
        &self.status
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.patient.full_name(),
            self.title,
            self.report_type
        )
    }

    fn event_date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

/// 検査機器
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub serial_number: String,
    pub status: String,
    pub notes: String,
}

impl ListRecord for Equipment {
    fn id(&self) -> &str {
        &self.id
    }

    fn status_label(&self) -> &str {
        &self.status
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.category, self.location, self.serial_number
        )
    }
}

/// 予約ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    /// ワイヤー上のステータス文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// ケアタスクステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

/// 処方ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrescriptionStatus {
    Active,
    Completed,
    Discontinued,
}

impl PrescriptionStatus {
    pub const ALL: [PrescriptionStatus; 3] = [
        PrescriptionStatus::Active,
        PrescriptionStatus::Completed,
        PrescriptionStatus::Discontinued,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "Active",
            PrescriptionStatus::Completed => "Completed",
            PrescriptionStatus::Discontinued => "Discontinued",
        }
    }
}

/// レポートステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Draft,
    Completed,
    Reviewed,
    Archived,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Draft,
        ReportStatus::Completed,
        ReportStatus::Reviewed,
        ReportStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Completed => "Completed",
            ReportStatus::Reviewed => "Reviewed",
            ReportStatus::Archived => "Archived",
        }
    }
}

/// 機器ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentStatus {
    Operational,
    Maintenance,
    OutOfService,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Operational,
        EquipmentStatus::Maintenance,
        EquipmentStatus::OutOfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "Operational",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::OutOfService => "Out of Service",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_ref_full_name() {
        let person = PersonRef {
            first_name: "Hanako".to_string(),
            last_name: "Sato".to_string(),
            ..Default::default()
        };
        assert_eq!(person.full_name(), "Hanako Sato");
    }

    #[test]
    fn test_person_ref_full_name_empty() {
        let person = PersonRef::default();
        assert_eq!(person.full_name(), "");
    }

    #[test]
    fn test_appointment_deserialize() {
        let json = r#"{
            "_id": "apt-1",
            "patient": {"_id": "p-1", "firstName": "Taro", "lastName": "Yamada"},
            "doctor": {"_id": "d-1", "firstName": "Jiro", "lastName": "Suzuki"},
            "date": "2026-08-06T00:00:00.000Z",
            "time": "09:30",
            "reason": "定期検診",
            "status": "Scheduled"
        }"#;

        let apt: Appointment = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(apt.id, "apt-1");
        assert_eq!(apt.patient.first_name, "Taro");
        assert_eq!(apt.doctor.last_name, "Suzuki");
        assert_eq!(apt.status, "Scheduled");
        assert_eq!(apt.notes, ""); // デフォルト値
    }

    #[test]
    fn test_appointment_deserialize_missing_fields() {
        // 最小限のフィールドだけでもデシリアライズできる
        let json = r#"{"_id": "apt-2"}"#;

        let apt: Appointment = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(apt.id, "apt-2");
        assert_eq!(apt.patient.full_name(), "");
        assert_eq!(apt.status, "");
    }

    #[test]
    fn test_appointment_deserialize_unknown_status() {
        // 未知のステータス文字列でもレコードは落ちない
        let json = r#"{"_id": "apt-3", "status": "Rescheduled"}"#;

        let apt: Appointment = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(apt.status, "Rescheduled");
    }

    #[test]
    fn test_appointment_id_plain_key() {
        // "_id" でなく "id" で返すバックエンドも受け付ける
        let json = r#"{"id": "apt-4"}"#;

        let apt: Appointment = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(apt.id, "apt-4");
    }

    #[test]
    fn test_appointment_search_text() {
        let apt = Appointment {
            patient: PersonRef {
                first_name: "Taro".to_string(),
                last_name: "Yamada".to_string(),
                ..Default::default()
            },
            reason: "頭痛".to_string(),
            ..Default::default()
        };
        let text = apt.search_text();
        assert!(text.contains("Taro Yamada"));
        assert!(text.contains("頭痛"));
    }

    #[test]
    fn test_care_task_deserialize() {
        let json = r#"{
            "_id": "task-1",
            "patient": {"firstName": "Ann", "lastName": "Lee"},
            "assignedTo": {"firstName": "Mei", "lastName": "Tan"},
            "title": "バイタル測定",
            "dueDate": "2026-08-07",
            "priority": "High",
            "status": "Pending"
        }"#;

        let task: CareTask = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(task.title, "バイタル測定");
        assert_eq!(task.assigned_to.first_name, "Mei");
        assert_eq!(task.event_date(), Some("2026-08-07"));
    }

    #[test]
    fn test_equipment_deserialize() {
        let json = r#"{
            "_id": "eq-1",
            "name": "MRIスキャナ",
            "category": "画像診断",
            "location": "放射線科",
            "serialNumber": "SN-0042",
            "status": "Operational"
        }"#;

        let eq: Equipment = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(eq.name, "MRIスキャナ");
        assert_eq!(eq.serial_number, "SN-0042");
        assert_eq!(eq.event_date(), None); // 機器に日付フィルタはない
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(AppointmentStatus::InProgress.as_str(), "In Progress");
        assert_eq!(TaskStatus::Pending.as_str(), "Pending");
        assert_eq!(PrescriptionStatus::Discontinued.as_str(), "Discontinued");
        assert_eq!(ReportStatus::Reviewed.as_str(), "Reviewed");
        assert_eq!(EquipmentStatus::OutOfService.as_str(), "Out of Service");
    }

    #[test]
    fn test_status_all_variants() {
        assert_eq!(AppointmentStatus::ALL.len(), 4);
        assert_eq!(TaskStatus::ALL.len(), 4);
        assert_eq!(PrescriptionStatus::ALL.len(), 3);
        assert_eq!(ReportStatus::ALL.len(), 4);
        assert_eq!(EquipmentStatus::ALL.len(), 3);
    }

    #[test]
    fn test_user_role_string() {
        let json = r#"{"_id": "u-1", "firstName": "Ken", "lastName": "Mori", "role": "doctor"}"#;
        let user: User = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(user.role, "doctor");
        assert_eq!(user.full_name(), "Ken Mori");
    }
}
