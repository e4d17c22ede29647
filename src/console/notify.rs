//! Toast notifications.
//!
//! A [`Toast`] is plain data; the renderer decides how to show it.

use std::fmt;

/// Whether a toast reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// The action went through.
    Success,
    /// The action failed; the operator may retry it.
    Error,
}

/// A mutating action on a resource, used to word toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A record was created.
    Add,
    /// A record was edited.
    Update,
    /// A record was removed.
    Delete,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A transient notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Short title, e.g. "Success".
    pub header: String,
    /// The message body.
    pub message: String,
    /// Success or error.
    pub kind: ToastKind,
}

impl Toast {
    /// Creates a success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            header: "Success".to_string(),
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    /// Creates an error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            header: "Error".to_string(),
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// Words the toast shown after a mutation resolves.
    ///
    /// Error toasts carry no backend detail.
    ///
    /// ```rust
    /// use boxinator_admin::console::{Mutation, Toast};
    ///
    /// let toast = Toast::for_mutation("Country", Mutation::Add, true);
    /// assert_eq!(toast.message, "Country was added successfully.");
    ///
    /// let toast = Toast::for_mutation("Country", Mutation::Delete, false);
    /// assert_eq!(toast.message, "Unable to delete country record.");
    /// ```
    #[must_use]
    pub fn for_mutation(resource: &str, mutation: Mutation, succeeded: bool) -> Self {
        let lower = resource.to_lowercase();
        if succeeded {
            match mutation {
                Mutation::Add => Self::success(format!("{resource} was added successfully.")),
                Mutation::Update => {
                    Self::success(format!("{resource} record was updated successfully."))
                }
                Mutation::Delete => {
                    Self::success(format!("{resource} record was deleted successfully."))
                }
            }
        } else {
            match mutation {
                Mutation::Update => Self::error(format!("Unable to update {lower} record details.")),
                Mutation::Add | Mutation::Delete => {
                    Self::error(format!("Unable to {mutation} {lower} record."))
                }
            }
        }
    }

    /// Returns `true` for success toasts.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.kind, ToastKind::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_error_headers() {
        assert_eq!(Toast::success("ok").header, "Success");
        assert_eq!(Toast::error("no").header, "Error");
        assert!(!Toast::error("no").is_success());
    }

    #[test]
    fn test_mutation_wording() {
        assert_eq!(
            Toast::for_mutation("Shipment", Mutation::Update, true).message,
            "Shipment record was updated successfully."
        );
        assert_eq!(
            Toast::for_mutation("Shipment", Mutation::Update, false).message,
            "Unable to update shipment record details."
        );
        assert_eq!(
            Toast::for_mutation("Account", Mutation::Add, false).message,
            "Unable to add account record."
        );
    }
}
