mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod verify_email;
pub use verify_email::VerifyEmail;

mod reset_request;
pub use reset_request::ResetRequest;

mod reset_confirm;
pub use reset_confirm::ResetConfirm;

mod client_dashboard;
pub use client_dashboard::ClientDashboard;

mod freelancer_dashboard;
pub use freelancer_dashboard::FreelancerDashboard;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod profile;
pub use profile::{AdminProfile, ClientProfile, FreelancerProfile};

mod profile_edit;
pub use profile_edit::{EditAdminProfile, EditClientProfile, EditFreelancerProfile};

mod files;
pub(crate) use files::picked_file;

mod lists;
pub(crate) use lists::{apply_decision, remove_notification};
