/// The four mutually exclusive top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Welcome,
    Login,
    Register,
    Dashboard,
}

impl View {
    /// `None` means "no particular view", which is the welcome screen.
    pub fn or_welcome(target: Option<View>) -> View {
        target.unwrap_or(View::Welcome)
    }
}

/// Which navigation links are shown. Mirrors the session state only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLinks {
    pub login: bool,
    pub register: bool,
    pub dashboard: bool,
    pub logout: bool,
}

impl NavLinks {
    pub fn for_session(authenticated: bool) -> Self {
        Self {
            login: !authenticated,
            register: !authenticated,
            dashboard: authenticated,
            logout: authenticated,
        }
    }
}
