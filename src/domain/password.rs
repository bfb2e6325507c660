use crate::validation::is_valid_password;

#[derive(PartialEq, Debug, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        match is_valid_password(&password) {
            true => Ok(Password(password)),
            false => Err(
                "Password is not valid, must be at least 8 characters long with at least one uppercase letter and one digit.".to_string(),
            ),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
