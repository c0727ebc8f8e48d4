use crate::shared::entity::{Entity, ID};

/// A user that can be responsible for `ReminderRecord`s and receive
/// follow up tasks.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Default::default(),
            name,
            email,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
