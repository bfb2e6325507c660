use super::{email::Email, password::Password};

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub email: Email,
    pub password: Password,
}

impl User {
    pub fn new(email: Email, password: Password) -> Self {
        User { email, password }
    }
}
