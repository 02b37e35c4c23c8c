//! Auth form table: which forms are intercepted and where they go.

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    CreateAccount,
    VerifyCode,
}

impl AuthForm {
    pub const ALL: [AuthForm; 3] = [AuthForm::Login, AuthForm::CreateAccount, AuthForm::VerifyCode];

    pub fn form_id(self) -> &'static str {
        match self {
            AuthForm::Login => "login-form",
            AuthForm::CreateAccount => "create-account-form",
            AuthForm::VerifyCode => "verify-code-form",
        }
    }

    pub fn redirect(self, cfg: &SiteConfig) -> &str {
        match self {
            AuthForm::Login => &cfg.redirects.login,
            AuthForm::CreateAccount => &cfg.redirects.create_account,
            AuthForm::VerifyCode => &cfg.redirects.verify_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flow() {
        let cfg = SiteConfig::default();
        assert_eq!(AuthForm::CreateAccount.redirect(&cfg), "verify-code.html");
        assert_eq!(AuthForm::VerifyCode.redirect(&cfg), "login.html");
        assert_eq!(AuthForm::Login.redirect(&cfg), "../index.html");
    }

    #[test]
    fn form_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = AuthForm::ALL.iter().map(|f| f.form_id()).collect();
        assert_eq!(ids.len(), AuthForm::ALL.len());
    }
}
