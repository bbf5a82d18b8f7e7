/// The current sign-in session.
///
/// Holds the opaque credential passed through to the external AI service.
/// Absent at startup unless restored from the environment; cleared on logout.
/// Never written to disk.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credential: Option<String>,
}

impl Session {
    /// A session restored from previously stored state, if any.
    pub fn restored(credential: Option<String>) -> Self {
        Self { credential }
    }

    pub fn store(&mut self, credential: impl Into<String>) {
        self.credential = Some(credential.into());
    }

    pub fn clear(&mut self) {
        self.credential = None;
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_unless_restored() {
        assert!(!Session::default().is_authenticated());
        assert!(Session::restored(Some("key".into())).is_authenticated());
    }

    #[test]
    fn clear_forgets_the_credential() {
        let mut session = Session::restored(Some("key".into()));
        session.clear();
        assert_eq!(session.credential(), None);
    }
}
