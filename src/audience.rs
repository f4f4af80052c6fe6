//! The two signup audiences. Each owns one modal and one form.

#[cfg(test)]
#[path = "audience_test.rs"]
mod audience_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Clinic,
    Partner,
}

impl Audience {
    pub const ALL: [Self; 2] = [Self::Clinic, Self::Partner];

    /// Element id of the modal overlay.
    #[must_use]
    pub fn modal_id(self) -> &'static str {
        match self {
            Self::Clinic => "modal-clinic",
            Self::Partner => "modal-partner",
        }
    }

    /// Element id of the signup form.
    #[must_use]
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Clinic => "form-clinic",
            Self::Partner => "form-partner",
        }
    }

    /// Value of the `type` field added to the webhook payload.
    #[must_use]
    pub fn type_label(self) -> &'static str {
        match self {
            Self::Clinic => "Clinic",
            Self::Partner => "Partner",
        }
    }

    #[must_use]
    pub fn from_modal_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.modal_id() == id)
    }

    /// Map a link target to the modal it opens.
    #[must_use]
    pub fn from_trigger_href(href: &str) -> Option<Self> {
        match href {
            "#clinic-signup" | "#contact" => Some(Self::Clinic),
            "#partner-signup" | "#partners" => Some(Self::Partner),
            _ => None,
        }
    }
}
