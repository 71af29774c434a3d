use crate::{Bucket, Store, CONFIG, USER};

/// Who is looking at the page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    user: Bucket,
    config: Bucket,
    is_admin: bool,
}

impl Session {
    pub fn new(user: Bucket, config: Bucket, is_admin: bool) -> Session {
        Session {
            user,
            config,
            is_admin,
        }
    }

    pub fn load<S: Store + ?Sized>(store: &S, is_admin: bool) -> Session {
        Session::new(Bucket::load(store, USER), Bucket::load(store, CONFIG), is_admin)
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Name displayed on comments written by the page owner: the logged-in
    /// user's name, else the one configured for the page
    pub fn admin_name(&self) -> Option<String> {
        self.user
            .get::<String>("name")
            .or_else(|| self.config.get::<String>("name"))
    }
}
