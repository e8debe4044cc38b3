use sawt_core::auth::{FirebaseAuthClient, FirestoreProfileStore};
use sawt_core::config::ClientConfig;
use sawt_core::{AuthDispatcher, AuthMode, CredentialForm};

use crate::commands::common::{authenticate, print_profile, resolve_password};
use crate::error::CliError;

type FirebaseDispatcher = AuthDispatcher<FirebaseAuthClient, FirestoreProfileStore>;

pub async fn run_login(
    email: String,
    password: Option<String>,
    as_json: bool,
) -> Result<(), CliError> {
    let password = resolve_password(password, |var| std::env::var(var).ok());
    let form = CredentialForm::with_credentials(AuthMode::Login, email, password, "");
    run_form(form, as_json).await
}

pub async fn run_signup(
    email: String,
    name: String,
    password: Option<String>,
    as_json: bool,
) -> Result<(), CliError> {
    let password = resolve_password(password, |var| std::env::var(var).ok());
    let form = CredentialForm::with_credentials(AuthMode::Signup, email, password, name);
    run_form(form, as_json).await
}

async fn run_form(form: CredentialForm, as_json: bool) -> Result<(), CliError> {
    let dispatcher = firebase_dispatcher(&ClientConfig::from_env()?)?;
    let profile = authenticate(&dispatcher, form).await?;
    print_profile(&profile, as_json)
}

pub fn firebase_dispatcher(config: &ClientConfig) -> Result<FirebaseDispatcher, CliError> {
    let firebase = config.firebase()?.ok_or(CliError::FirebaseNotConfigured)?;
    let provider = FirebaseAuthClient::new(&firebase)?;
    let store = FirestoreProfileStore::new(&firebase, config.users_collection())?;
    Ok(AuthDispatcher::new(provider, store, config.admin_policy()))
}
