//! Signup form submissions.
//!
//! A submission starts by putting the submit button into its loading state
//! and handing the host a [`SubmitPlan`]. The host runs the plan and reports
//! back with the [`Submission`] context, which carries everything the
//! continuation needs (audience, original button label, ticket) so nothing
//! is captured from the submit handler's scope.
//!
//! At most one submission per form is in flight. It runs to completion even
//! if the visitor closes the modal in the meantime.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::audience::Audience;
use crate::config::{Config, TransportMode};
use crate::consts::{FAILURE_ALERT, SENDING_LABEL};
use crate::effect::Effect;
use crate::error::PageError;
use crate::schedule::{Scheduler, Ticket};
use crate::transport::{DispatchOutcome, WebhookRequest};

/// Flat field name → value mapping sent to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    /// Build from form fields, adding `type`. A field named `type` is
    /// overwritten.
    pub fn from_fields(audience: Audience, fields: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map: BTreeMap<String, String> = fields.into_iter().collect();
        map.insert("type".to_owned(), audience.type_label().to_owned());
        Self(map)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    /// No endpoint configured: wait, then succeed.
    Simulate { delay_ms: u32 },
    Post(WebhookRequest),
}

/// Context for one in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub audience: Audience,
    pub original_label: String,
    ticket: Ticket<Audience>,
}

#[derive(Debug)]
pub struct FormController {
    endpoint: String,
    mode: TransportMode,
    simulated: bool,
    simulated_delay_ms: u32,
    in_flight: Scheduler<Audience>,
}

impl FormController {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            mode: config.transport,
            simulated: config.is_simulated(),
            simulated_delay_ms: config.simulated_delay_ms,
            in_flight: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn in_flight(&self, audience: Audience) -> bool {
        self.in_flight.is_pending(audience)
    }

    /// Start a submission. Returns no effects if one is already in flight
    /// for this form.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded; the button is left
    /// untouched in that case.
    pub fn begin(
        &mut self,
        audience: Audience,
        original_label: String,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Vec<Effect>, PageError> {
        if self.in_flight(audience) {
            log::debug!("{} already submitting, ignoring", audience.form_id());
            return Ok(Vec::new());
        }

        let payload = Payload::from_fields(audience, fields);
        let plan = if self.simulated {
            log::warn!("webhook endpoint not configured, simulating success");
            SubmitPlan::Simulate { delay_ms: self.simulated_delay_ms }
        } else {
            SubmitPlan::Post(WebhookRequest {
                endpoint: self.endpoint.clone(),
                mode: self.mode,
                body: payload.to_json()?,
            })
        };

        let ticket = self.in_flight.issue(audience);
        let submission = Submission { audience, original_label, ticket };
        Ok(vec![
            Effect::SetSubmitButton { audience, label: SENDING_LABEL.to_owned(), disabled: true },
            Effect::Dispatch { submission, plan },
        ])
    }

    /// The plan for `submission` finished with `outcome`.
    pub fn finish(&mut self, submission: Submission, outcome: &DispatchOutcome) -> Vec<Effect> {
        let audience = submission.audience;
        if !self.in_flight.settle(&submission.ticket) {
            log::debug!("{} finished twice, ignoring", audience.form_id());
            return Vec::new();
        }

        let mut effects = Vec::new();
        if outcome.is_success() {
            log::info!("{} submission {outcome}", audience.form_id());
            effects.push(Effect::ShowSuccess(audience));
        } else {
            log::error!("{} submission {outcome}", audience.form_id());
            effects.push(Effect::Alert(FAILURE_ALERT.to_owned()));
        }
        effects.push(Effect::SetSubmitButton { audience, label: submission.original_label, disabled: false });
        effects
    }
}
