use crate::{JobId, JobItem};

/// The job shown in the detail view, if any.
///
/// The id may point at an item outside the current results; that simply
/// resolves to no item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    active: Option<JobId>,
}

impl Selection {
    pub fn select(&mut self, id: Option<JobId>) {
        self.active = id;
    }

    pub fn active_id(&self) -> Option<JobId> {
        self.active
    }

    pub fn active_item<'a>(&self, items: &'a [JobItem]) -> Option<&'a JobItem> {
        let id = self.active?;
        items.iter().find(|item| item.id == id)
    }
}
