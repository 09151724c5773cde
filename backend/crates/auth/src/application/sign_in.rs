//! Sign In Use Case
//!
//! Checks credentials and issues an access token.

use std::sync::{Arc, OnceLock};

use kernel::identity::Identity;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed access token
    pub token: String,
    /// Identity embedded in the token
    pub identity: Identity,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (Some(user_name), Some(password)) = (input.user_name, input.password) else {
            return Err(AuthError::missing_fields());
        };

        // Names or passwords that could never have been registered are
        // plain credential failures, not validation errors
        let user_name = UserName::new(user_name).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.user_repo.find_by_user_name(&user_name).await?;
        let pepper = self.config.pepper().map(<[u8]>::to_vec);

        let Some(user) = user else {
            // Burn the same hashing time as a real check
            let _ = tokio::task::spawn_blocking(move || {
                dummy_hash(pepper.as_deref())
                    .map(|hash| hash.verify(&raw_password, pepper.as_deref()))
            })
            .await;
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify_blocking(raw_password, pepper).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = user.identity();
        let token = self.tokens.issue(&identity)?;

        tracing::info!(
            user_id = %identity.user_id,
            user_name = %identity.user_name,
            "User logged in"
        );

        Ok(SignInOutput { token, identity })
    }
}

/// Hash verified against when the user name is unknown
fn dummy_hash(pepper: Option<&[u8]>) -> Option<&'static UserPassword> {
    static DUMMY: OnceLock<Option<UserPassword>> = OnceLock::new();

    DUMMY
        .get_or_init(|| {
            RawPassword::new("dummy-password-for-timing".to_string())
                .and_then(|raw| UserPassword::from_raw(&raw, pepper))
                .ok()
        })
        .as_ref()
}
