use crate::modules::leads::adapters::outbound::leads::{LeadStore, StatusCatalog};
use crate::modules::leads::core::audit::{ACTION_UPDATE, UNKNOWN_STATUS};
use crate::modules::leads::core::lead::Lead;
use crate::modules::leads::core::transition::TransitionRecorder;
use crate::modules::leads::use_cases::error::LeadError;
use crate::modules::leads::use_cases::update_lead::command::UpdateLead;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;

pub struct UpdateLeadHandler {
    leads: Arc<dyn LeadStore>,
    statuses: Arc<dyn StatusCatalog>,
    recorder: Arc<TransitionRecorder>,
    clock: Arc<dyn Clock>,
}

impl UpdateLeadHandler {
    pub fn new(
        leads: Arc<dyn LeadStore>,
        statuses: Arc<dyn StatusCatalog>,
        recorder: Arc<TransitionRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            leads,
            statuses,
            recorder,
            clock,
        }
    }

    pub async fn handle(&self, command: UpdateLead) -> Result<Lead, LeadError> {
        let mut lead = self
            .leads
            .get(&command.lead_id)
            .await?
            .ok_or(LeadError::NotFound)?;

        // The before-name must be read before the status is overwritten.
        let status_change = match command.lead_status {
            Some(new_status) if new_status != lead.lead_status => {
                let before = self
                    .statuses
                    .resolve_name(lead.lead_status)
                    .await?
                    .unwrap_or_else(|| UNKNOWN_STATUS.to_string());
                let after = self
                    .statuses
                    .resolve_name(new_status)
                    .await?
                    .unwrap_or_else(|| UNKNOWN_STATUS.to_string());
                lead.lead_status = new_status;
                if self.statuses.is_terminal(new_status).await? {
                    lead.completed_at = Some(self.clock.now());
                }
                Some((before, after))
            }
            _ => None,
        };

        if let Some(plan_interest) = command.plan_interest {
            lead.plan_interest = Some(plan_interest);
        }
        if let Some(next_follow_up_date) = command.next_follow_up_date {
            lead.next_follow_up_date = Some(next_follow_up_date);
        }
        if let Some(meeting_notes) = command.meeting_notes {
            lead.meeting_notes = Some(meeting_notes);
        }

        self.leads.update(lead.clone()).await?;

        if let Some((before, after)) = status_change {
            self.recorder
                .record(
                    &lead.id,
                    &command.acting_user_id,
                    &before,
                    &after,
                    ACTION_UPDATE,
                    command.note,
                )
                .await?;
        }

        Ok(lead)
    }
}
