use crate::error::{AppError, Severity};

/// A message for the modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        match err.severity() {
            Severity::Warning => Notice::warning(err.to_string()),
            _ => Notice::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omissions_become_warnings() {
        let n = Notice::from(&AppError::NoDataset);
        assert_eq!(n.severity, Severity::Warning);
        assert_eq!(n.title, "Warning");
        assert!(n.message.contains("CSV"));
    }

    #[test]
    fn io_failures_become_errors() {
        let err = AppError::Load(vp_data::DataError::Empty);
        let n = Notice::from(&err);
        assert_eq!(n.severity, Severity::Error);
        assert!(n.message.contains("No columns"));
    }
}
