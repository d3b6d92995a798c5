//! Resolved-or-not state for values computed once per job

/// A value that is either still pending or has been resolved
///
/// Failed resolutions leave the slot pending, so a later attempt runs again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resolution<T> {
    #[default]
    Pending,
    Resolved(T),
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Pending => None,
        }
    }

    /// Return the resolved value, running `resolve` first if still pending
    pub fn get_or_try_resolve<E>(
        &mut self,
        resolve: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        if let Resolution::Pending = self {
            *self = Resolution::Resolved(resolve()?);
        }
        match self {
            Resolution::Resolved(value) => Ok(value),
            Resolution::Pending => unreachable!("resolution was just stored"),
        }
    }
}
