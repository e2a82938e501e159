//! Three-step ticket submission wizard: details, classification, review.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::ticket::NewTicket;
use crate::domain::types::{TicketDescription, TicketTitle, UserId};
use crate::forms::ticket::TicketForm;
use crate::forms::{FormError, field_messages};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SubmissionStep {
    Details,
    Classification,
    Review,
}

impl SubmissionStep {
    pub const COUNT: u8 = 3;

    /// One-based position of the step.
    pub const fn number(self) -> u8 {
        match self {
            SubmissionStep::Details => 1,
            SubmissionStep::Classification => 2,
            SubmissionStep::Review => 3,
        }
    }

    /// Fields checked before leaving the step.
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            SubmissionStep::Details => &["title", "description"],
            SubmissionStep::Classification => &["category", "priority"],
            SubmissionStep::Review => &[],
        }
    }

    const fn next(self) -> Self {
        match self {
            SubmissionStep::Details => SubmissionStep::Classification,
            SubmissionStep::Classification | SubmissionStep::Review => SubmissionStep::Review,
        }
    }

    const fn previous(self) -> Self {
        match self {
            SubmissionStep::Details | SubmissionStep::Classification => SubmissionStep::Details,
            SubmissionStep::Review => SubmissionStep::Classification,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionWizard {
    step: SubmissionStep,
    form: TicketForm,
    errors: BTreeMap<String, String>,
}

impl Default for SubmissionWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionWizard {
    pub fn new() -> Self {
        Self {
            step: SubmissionStep::Details,
            form: TicketForm::default(),
            errors: BTreeMap::new(),
        }
    }

    pub fn step(&self) -> SubmissionStep {
        self.step
    }

    pub fn form(&self) -> &TicketForm {
        &self.form
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn progress_percent(&self) -> u8 {
        let percent = f64::from(self.step.number()) / f64::from(SubmissionStep::COUNT) * 100.0;
        percent.round() as u8
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
        self.errors.remove("title");
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
        self.errors.remove("description");
    }

    pub fn select_category(&mut self, category: Option<i64>) {
        self.form.category = category;
        self.errors.remove("category");
    }

    pub fn select_priority(&mut self, priority: Option<i64>) {
        self.form.priority = priority;
        self.errors.remove("priority");
    }

    fn validate_fields(&mut self, fields: &[&str]) -> bool {
        let all = match self.form.check() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => field_messages(&errors),
        };
        self.errors = all
            .into_iter()
            .filter(|(field, _)| fields.contains(&field.as_str()))
            .collect();
        self.errors.is_empty()
    }

    /// Checks the fields of the current step, recording their messages.
    pub fn validate_step(&mut self) -> bool {
        self.validate_fields(self.step.fields())
    }

    /// Moves forward when the current step is valid. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if !self.validate_step() || self.step == SubmissionStep::Review {
            return false;
        }
        self.step = self.step.next();
        true
    }

    pub fn previous(&mut self) {
        self.step = self.step.previous();
    }

    /// Validates every step and builds an `OPEN` ticket created `now` on
    /// behalf of `user`. On failure the wizard returns to the first step
    /// holding an error.
    pub fn submit(
        &mut self,
        user: Option<UserId>,
        now: DateTime<Utc>,
    ) -> Result<NewTicket, FormError> {
        if let Err(errors) = self.form.check() {
            self.errors = field_messages(&errors);
            if let Some(step) = [SubmissionStep::Details, SubmissionStep::Classification]
                .into_iter()
                .find(|step| step.fields().iter().any(|f| self.errors.contains_key(*f)))
            {
                self.step = step;
            }
            return Err(errors.into());
        }
        self.errors.clear();

        let (category, priority, _) = self.form.relations()?;
        let ticket = NewTicket::new(
            TicketTitle::new(self.form.title.as_str())?,
            TicketDescription::new(self.form.description.as_str())?,
            category,
            priority,
            user,
        );
        Ok(ticket.created_at(now))
    }
}
