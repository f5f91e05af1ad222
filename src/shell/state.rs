use crate::modules::leads::adapters::outbound::leads::in_memory::{
    InMemoryAuditLedger, InMemoryLeads, InMemoryStatusCatalog,
};
use crate::modules::leads::adapters::outbound::leads::{AuditLedger, LeadStore, StatusCatalog};
use crate::modules::leads::core::transition::TransitionRecorder;
use crate::modules::leads::use_cases::lead_history::handler::LeadHistoryHandler;
use crate::modules::leads::use_cases::update_lead::handler::UpdateLeadHandler;
use crate::modules::meetings::adapters::outbound::meetings::MeetingStore;
use crate::modules::meetings::adapters::outbound::meetings::in_memory::InMemoryMeetings;
use crate::modules::meetings::use_cases::end_meeting::handler::EndMeetingHandler;
use crate::modules::meetings::use_cases::start_meeting::handler::StartMeetingHandler;
use crate::modules::shifts::adapters::outbound::sessions::ShiftSessionStore;
use crate::modules::shifts::adapters::outbound::sessions::in_memory::InMemoryShiftSessions;
use crate::modules::shifts::use_cases::end_break::handler::EndBreakHandler;
use crate::modules::shifts::use_cases::end_shift::handler::EndShiftHandler;
use crate::modules::shifts::use_cases::shift_status::handler::ShiftStatusHandler;
use crate::modules::shifts::use_cases::start_break::handler::StartBreakHandler;
use crate::modules::shifts::use_cases::start_shift::handler::StartShiftHandler;
use crate::shared::infrastructure::clock::{Clock, SystemClock};
use crate::shared::infrastructure::media_gateway::MediaGateway;
use crate::shared::infrastructure::media_gateway::in_memory::InMemoryMediaGateway;
use crate::shell::config::AppConfig;
use std::sync::Arc;
use std::time::Duration;

/// Infrastructure the use-case handlers are wired onto.
pub struct Dependencies {
    pub sessions: Arc<dyn ShiftSessionStore>,
    pub meetings: Arc<dyn MeetingStore>,
    pub leads: Arc<dyn LeadStore>,
    pub statuses: Arc<dyn StatusCatalog>,
    pub ledger: Arc<dyn AuditLedger>,
    pub media: Arc<dyn MediaGateway>,
    pub clock: Arc<dyn Clock>,
}

impl Dependencies {
    pub fn in_memory() -> Self {
        Self {
            sessions: Arc::new(InMemoryShiftSessions::new()),
            meetings: Arc::new(InMemoryMeetings::new()),
            leads: Arc::new(InMemoryLeads::new()),
            statuses: Arc::new(InMemoryStatusCatalog::with_default_seed()),
            ledger: Arc::new(InMemoryAuditLedger::new()),
            media: Arc::new(InMemoryMediaGateway::new()),
            clock: Arc::new(SystemClock),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub start_shift: Arc<StartShiftHandler>,
    pub start_break: Arc<StartBreakHandler>,
    pub end_break: Arc<EndBreakHandler>,
    pub end_shift: Arc<EndShiftHandler>,
    pub shift_status: Arc<ShiftStatusHandler>,
    pub start_meeting: Arc<StartMeetingHandler>,
    pub end_meeting: Arc<EndMeetingHandler>,
    pub update_lead: Arc<UpdateLeadHandler>,
    pub lead_history: Arc<LeadHistoryHandler>,
}

impl AppState {
    pub fn new(config: &AppConfig, deps: Dependencies) -> Self {
        let upload_timeout = Duration::from_secs(config.upload_timeout_secs);
        let ttl = config.signed_url_ttl_minutes;
        let recorder = Arc::new(TransitionRecorder::new(
            deps.ledger.clone(),
            deps.clock.clone(),
        ));

        Self {
            start_shift: Arc::new(StartShiftHandler::new(
                deps.sessions.clone(),
                deps.media.clone(),
                deps.clock.clone(),
                upload_timeout,
                ttl,
            )),
            start_break: Arc::new(StartBreakHandler::new(
                deps.sessions.clone(),
                deps.clock.clone(),
            )),
            end_break: Arc::new(EndBreakHandler::new(
                deps.sessions.clone(),
                deps.clock.clone(),
            )),
            end_shift: Arc::new(EndShiftHandler::new(
                deps.sessions.clone(),
                deps.media.clone(),
                deps.clock.clone(),
                upload_timeout,
                ttl,
            )),
            shift_status: Arc::new(ShiftStatusHandler::new(
                deps.sessions.clone(),
                deps.clock.clone(),
            )),
            start_meeting: Arc::new(StartMeetingHandler::new(
                deps.meetings.clone(),
                deps.leads.clone(),
                deps.media.clone(),
                deps.clock.clone(),
                upload_timeout,
                ttl,
            )),
            end_meeting: Arc::new(EndMeetingHandler::new(
                deps.meetings.clone(),
                deps.leads.clone(),
                deps.statuses.clone(),
                recorder.clone(),
                deps.media.clone(),
                deps.clock.clone(),
                upload_timeout,
                ttl,
            )),
            update_lead: Arc::new(UpdateLeadHandler::new(
                deps.leads.clone(),
                deps.statuses.clone(),
                recorder,
                deps.clock.clone(),
            )),
            lead_history: Arc::new(LeadHistoryHandler::new(deps.ledger.clone())),
        }
    }
}
