use crate::modules::shifts::core::session::BreakKind;

#[derive(Debug, Clone)]
pub struct StartBreak {
    pub user_id: String,
    pub kind: BreakKind,
    pub notes: Option<String>,
}
