use crate::client::{Result, Session};
use crate::models::{Me, Thing, User};
use reqwest::Method;

const NO_FORM: &[(&str, &str)] = &[];

impl Session {
    /// Public profile of `username`.
    pub async fn user(&self, username: &str) -> Result<User> {
        let path = format!("/user/{}/about", username);
        let json = self.call(Method::GET, &path, NO_FORM).await?;

        let about: Thing<User> = serde_json::from_value(json)?;
        Ok(about.data)
    }

    /// Profile of the logged-in account.
    pub async fn me(&self) -> Result<Me> {
        let json = self.call(Method::GET, "/api/v1/me", NO_FORM).await?;
        Ok(serde_json::from_value(json)?)
    }
}
