use crate::app_state::AppState;
use crate::domain::{Email, Password, User, UserStoreError};
use crate::errors::{LoginError, SignupError};

pub struct AuthService {}
impl AuthService {
    pub fn new() -> Self {
        AuthService {}
    }

    pub async fn signup(
        state: AppState,
        email: Email,
        password: Password,
    ) -> Result<(), SignupError> {
        let user = User::new(email.clone(), password);
        let result = state.user_store.write().await.add_user(user).await;
        result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                SignupError::UserAlreadyExists(email.as_ref().to_string())
            }
            _ => SignupError::InternalServerError,
        })?;
        Ok(())
    }

    pub async fn login(
        state: AppState,
        email: Email,
        password: Password,
    ) -> Result<User, LoginError> {
        match state
            .user_store
            .read()
            .await
            .validate_user(&email, &password)
            .await
        {
            Err(UserStoreError::UserNotFound) => {
                Err(LoginError::UserNotFound(email.as_ref().to_string()))
            }
            Err(UserStoreError::InvalidCredentials) => Err(LoginError::IncorrectCredentials),
            Err(_) => Err(LoginError::InternalServerError),
            Ok(user) => Ok(user),
        }
    }
}
