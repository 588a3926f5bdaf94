use serde::Deserialize;

/// Public profile of a Reddit account.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub id: String,
    pub is_friend: bool,
    pub is_mod: bool,
    pub is_gold: bool,
    pub has_verified_email: bool,
    pub hidden_from_robots: bool,
    pub link_karma: i64,
    pub comment_karma: i64,
    pub created_utc: f64,
}

impl User {
    pub fn total_karma(&self) -> i64 {
        self.link_karma + self.comment_karma
    }
}

/// The logged-in account: the public profile plus owner-only flags.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Me {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub over_18: bool,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub is_employee: bool,
}

impl std::ops::Deref for Me {
    type Target = User;

    fn deref(&self) -> &User {
        &self.user
    }
}
