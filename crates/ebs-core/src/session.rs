//! Session state and the user/admin authentication flows.
//!
//! Identity lives only in memory; the server-side cookie (held by the
//! client's cookie jar) is the real credential. Logout is best-effort:
//! the local identity is cleared even when the server call fails.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::json;

use crate::api::ApiClient;
use crate::validate;

/// Profile returned by the user login/register/update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Profile returned when registering an admin account.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Admin session marker. The authenticate endpoint acknowledges with a bare
/// success string rather than a profile, so only the submitted email is
/// retained client-side.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
}

/// Who the process is currently signed in as. Never both at once.
#[derive(Debug, Clone)]
pub enum Identity {
    User(UserProfile),
    Admin(AdminSession),
}

/// Holds the current identity and the API client whose cookie jar backs it.
pub struct Session {
    api: ApiClient,
    identity: Option<Identity>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            identity: None,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.identity {
            Some(Identity::User(user)) => Some(user),
            _ => None,
        }
    }

    pub fn admin(&self) -> Option<&AdminSession> {
        match &self.identity {
            Some(Identity::Admin(admin)) => Some(admin),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_identity(&mut self, identity: Option<Identity>) {
        self.identity = identity;
    }

    /// POST /api/users/login; stores and returns the server profile.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile> {
        let errors = validate::login_form(email, password);
        if !errors.is_empty() {
            bail!(validate::format_errors(&errors));
        }
        let profile: UserProfile = self
            .api
            .post(
                &["api", "users", "login"],
                &json!({ "email": email, "password": password }),
            )
            .await
            .context("login failed")?;
        tracing::info!(user = %profile.name, "user session established");
        self.identity = Some(Identity::User(profile.clone()));
        Ok(profile)
    }

    /// POST /api/users/register. Does not authenticate; the caller is
    /// expected to log in afterwards.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        let errors = validate::register_form(name, email, password);
        if !errors.is_empty() {
            bail!(validate::format_errors(&errors));
        }
        self.api
            .post(
                &["api", "users", "register"],
                &json!({ "name": name, "email": email, "password": password }),
            )
            .await
            .context("registration failed")
    }

    /// Probes GET /api/users/home. A 200 means the cookie still maps to a
    /// live server session; the reply is a welcome string, not a profile,
    /// so no identity can be reconstructed from it.
    pub async fn refresh(&self) -> Option<String> {
        match self.api.get_text(&["api", "users", "home"]).await {
            Ok(welcome) => Some(welcome),
            Err(err) => {
                tracing::debug!(%err, "no restorable session");
                None
            }
        }
    }

    /// Best-effort logout: the server call may fail, the local identity is
    /// cleared regardless. Admin sessions have no server-side logout.
    pub async fn logout(&mut self) {
        if matches!(self.identity, Some(Identity::User(_))) {
            if let Err(err) = self.api.post_empty_text(&["api", "users", "logout"]).await {
                tracing::warn!(%err, "logout request failed; clearing local session anyway");
            }
        }
        self.identity = None;
    }

    /// PUT /api/users/update/{id}. The password is omitted from the payload
    /// when not supplied, which keeps the current one.
    pub async fn update_profile(
        &mut self,
        name: &str,
        email: &str,
        new_password: Option<&str>,
    ) -> Result<UserProfile> {
        let user = match &self.identity {
            Some(Identity::User(user)) => user.clone(),
            _ => bail!("not signed in as a user"),
        };
        let mut payload = json!({ "id": user.id, "name": name, "email": email });
        if let Some(password) = new_password {
            payload["password"] = json!(password);
        }
        let id = user.id.to_string();
        let updated: UserProfile = self
            .api
            .put(&["api", "users", "update", id.as_str()], &payload)
            .await
            .context("profile update failed")?;
        self.identity = Some(Identity::User(updated.clone()));
        Ok(updated)
    }

    /// DELETE /api/users/delete/{id}; clears the identity on success.
    pub async fn delete_account(&mut self) -> Result<()> {
        let user = match &self.identity {
            Some(Identity::User(user)) => user.clone(),
            _ => bail!("not signed in as a user"),
        };
        let id = user.id.to_string();
        self.api
            .delete_text(&["api", "users", "delete", id.as_str()])
            .await
            .context("account deletion failed")?;
        self.identity = None;
        Ok(())
    }

    /// POST /api/admins/authenticate; on success only the email is kept as
    /// the admin identity.
    pub async fn admin_login(&mut self, email: &str, password: &str) -> Result<()> {
        let errors = validate::login_form(email, password);
        if !errors.is_empty() {
            bail!(validate::format_errors(&errors));
        }
        self.api
            .post_text(
                &["api", "admins", "authenticate"],
                &json!({ "email": email, "password": password }),
            )
            .await
            .context("admin login failed")?;
        tracing::info!(admin = %email, "admin session established");
        self.identity = Some(Identity::Admin(AdminSession {
            email: email.to_string(),
        }));
        Ok(())
    }

    /// POST /api/admins. Does not authenticate.
    pub async fn admin_register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AdminProfile> {
        let errors = validate::register_form(name, email, password);
        if !errors.is_empty() {
            bail!(validate::format_errors(&errors));
        }
        self.api
            .post(
                &["api", "admins"],
                &json!({ "name": name, "email": email, "password": password }),
            )
            .await
            .context("admin registration failed")
    }
}
