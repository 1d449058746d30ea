//! MediBoard Common Library
//!
//! 一覧ビューモデルのドメイン型と純粋ロジック（WASM側と共有）

pub mod draft;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod query;
pub mod roles;
pub mod token;
pub mod types;

pub use draft::{
    AppointmentDraft, CareTaskDraft, EquipmentDraft, PrescriptionDraft, ReportDraft,
};
pub use error::{Error, Result};
pub use filter::{calendar_date, derive_visible, is_unset, FilterState, ListRecord};
pub use pagination::{decode_list_payload, PagedResult, PaginationState, PAGE_SIZE};
pub use query::QueryString;
pub use roles::{
    can_create, can_delete, can_update_status, default_screen, menu_for, Role, Screen,
};
pub use token::TokenGate;
pub use types::{
    Appointment, AppointmentStatus, CareTask, Equipment, EquipmentStatus, MedicalReport,
    PersonRef, Prescription, PrescriptionStatus, ReportStatus, TaskStatus, User,
};
