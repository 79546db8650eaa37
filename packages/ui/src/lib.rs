//! This crate contains all shared UI for the workspace: the session context,
//! the role guard, form validation, and the building blocks the dashboard
//! views assemble.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session_ctx;
pub use session_ctx::{make_store, use_session, SessionHandle, SessionProvider};

mod guard;
pub use guard::{redirect, use_role_guard, Guard};

pub mod validation;
pub use validation::{
    password_strength, strength_color, strength_label, validate_cv, validate_email,
    validate_password, validate_phone, validate_photo,
};

mod wizard;
pub use wizard::{Field, FieldError, SignupForm, WIZARD_STEPS};

mod skills;
pub use skills::SKILLS;

mod components;
pub use components::{
    AlertBanner, AlertSeverity, PasswordStrengthBar, Snackbar, Spinner, StarRating,
};

mod shell;
pub use shell::{NavDrawer, NotificationMenu};
