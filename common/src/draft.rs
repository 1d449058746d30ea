//! 新規作成フォームのドラフト
//!
//! ドラフトは送信までローカル専用の書き込み状態で、取得済みレコードと
//! 参照を共有しない。送信前に必須項目チェックを通し、失敗したら
//! ネットワーク呼び出しを発行しない。送信成功時は Default に戻す。

use serde::Serialize;

use crate::error::{Error, Result};

fn require(missing: &mut Vec<&'static str>, label: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(label);
    }
}

fn finish(missing: Vec<&'static str>) -> Result<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "必須項目が未入力です: {}",
            missing.join("、")
        )))
    }
}

/// 予約の作成ドラフト
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub notes: String,
}

impl AppointmentDraft {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        require(&mut missing, "患者", &self.patient);
        require(&mut missing, "医師", &self.doctor);
        require(&mut missing, "日付", &self.date);
        require(&mut missing, "時刻", &self.time);
        require(&mut missing, "診察理由", &self.reason);
        finish(missing)
    }
}

/// ケアタスクの作成ドラフト
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTaskDraft {
    pub patient: String,
    pub assigned_to: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

impl CareTaskDraft {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        require(&mut missing, "患者", &self.patient);
        require(&mut missing, "タイトル", &self.title);
        require(&mut missing, "期限", &self.due_date);
        finish(missing)
    }
}

/// 処方の作成ドラフト
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDraft {
    pub patient: String,
    pub doctor: String,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

impl PrescriptionDraft {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        require(&mut missing, "患者", &self.patient);
        require(&mut missing, "薬剤名", &self.medication);
        require(&mut missing, "用量", &self.dosage);
        require(&mut missing, "頻度", &self.frequency);
        finish(missing)
    }
}

/// 医療レポートの作成ドラフト
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub patient: String,
    pub doctor: String,
    pub title: String,
    pub report_type: String,
    pub description: String,
    pub date: String,
}

impl ReportDraft {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        require(&mut missing, "患者", &self.patient);
        require(&mut missing, "タイトル", &self.title);
        require(&mut missing, "レポート種別", &self.report_type);
        finish(missing)
    }
}

/// 検査機器の作成・編集ドラフト
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDraft {
    pub name: String,
    pub category: String,
    pub location: String,
    pub serial_number: String,
    pub status: String,
    pub notes: String,
}

impl EquipmentDraft {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        require(&mut missing, "機器名", &self.name);
        require(&mut missing, "分類", &self.category);
        require(&mut missing, "設置場所", &self.location);
        finish(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_appointment() -> AppointmentDraft {
        AppointmentDraft {
            patient: "p-1".to_string(),
            doctor: "d-1".to_string(),
            date: "2026-08-10".to_string(),
            time: "09:30".to_string(),
            reason: "定期検診".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_appointment_valid() {
        assert!(valid_appointment().validate().is_ok());
    }

    #[test]
    fn test_appointment_missing_single_field() {
        let draft = AppointmentDraft {
            reason: String::new(),
            ..valid_appointment()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.user_message().contains("診察理由"));
    }

    #[test]
    fn test_appointment_whitespace_is_missing() {
        // 空白だけの入力は未入力扱い
        let draft = AppointmentDraft {
            patient: "   ".to_string(),
            ..valid_appointment()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_appointment_missing_fields_all_listed() {
        let err = AppointmentDraft::default().validate().unwrap_err();
        let message = err.user_message();
        assert!(message.contains("患者"));
        assert!(message.contains("医師"));
        assert!(message.contains("日付"));
        assert!(message.contains("時刻"));
        assert!(message.contains("診察理由"));
    }

    #[test]
    fn test_appointment_notes_is_optional() {
        let draft = AppointmentDraft {
            notes: String::new(),
            ..valid_appointment()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_appointment_draft_serialize_camel_case() {
        let json = serde_json::to_string(&valid_appointment()).expect("シリアライズ失敗");
        assert!(json.contains("\"patient\":\"p-1\""));
        assert!(json.contains("\"reason\":\"定期検診\""));
    }

    #[test]
    fn test_care_task_required_fields() {
        let err = CareTaskDraft::default().validate().unwrap_err();
        let message = err.user_message();
        assert!(message.contains("患者"));
        assert!(message.contains("タイトル"));
        assert!(message.contains("期限"));
        // 担当者と優先度は任意
        assert!(!message.contains("担当"));
    }

    #[test]
    fn test_care_task_serialize_camel_case() {
        let draft = CareTaskDraft {
            due_date: "2026-08-09".to_string(),
            assigned_to: "n-1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).expect("シリアライズ失敗");
        assert!(json.contains("\"dueDate\":\"2026-08-09\""));
        assert!(json.contains("\"assignedTo\":\"n-1\""));
    }

    #[test]
    fn test_prescription_required_fields() {
        let draft = PrescriptionDraft {
            patient: "p-1".to_string(),
            medication: "アモキシシリン".to_string(),
            dosage: "250mg".to_string(),
            frequency: "1日3回".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
        assert!(PrescriptionDraft::default().validate().is_err());
    }

    #[test]
    fn test_report_required_fields() {
        let draft = ReportDraft {
            patient: "p-1".to_string(),
            title: "血液検査結果".to_string(),
            report_type: "Lab".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        let err = ReportDraft::default().validate().unwrap_err();
        assert!(err.user_message().contains("レポート種別"));
    }

    #[test]
    fn test_equipment_required_fields() {
        let draft = EquipmentDraft {
            name: "MRIスキャナ".to_string(),
            category: "画像診断".to_string(),
            location: "放射線科".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
        assert!(EquipmentDraft::default().validate().is_err());
    }

    #[test]
    fn test_draft_reset_equals_default() {
        // 送信成功後は Default に戻す運用なので、Default が空であること
        let draft = AppointmentDraft::default();
        assert!(draft.patient.is_empty());
        assert!(draft.date.is_empty());
    }
}
