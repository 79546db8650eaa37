use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AdminDashboard, AdminProfile, ClientDashboard, ClientProfile, EditAdminProfile,
    EditClientProfile, EditFreelancerProfile, FreelancerDashboard, FreelancerProfile, Home, Login,
    ResetConfirm, ResetRequest, Signup, VerifyEmail,
};

mod style;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/verification-email?:status&:email")]
    VerifyEmail { status: String, email: String },
    #[route("/mot-de-passe/demande-reinitialisation")]
    ResetRequest {},
    #[route("/mot-de-passe/reinitialiser/:jeton?:status")]
    ResetConfirm { jeton: String, status: String },
    #[route("/client/dashboard")]
    ClientDashboard {},
    #[route("/freelancer/dashboard")]
    FreelancerDashboard {},
    #[route("/administrateur/dashboard")]
    AdminDashboard {},
    #[route("/client/profile")]
    ClientProfile {},
    #[route("/freelancer/profile")]
    FreelancerProfile {},
    #[route("/administrateur/profile")]
    AdminProfile {},
    #[route("/client/profil/edit")]
    EditClientProfile {},
    #[route("/freelancer/profil/edit")]
    EditFreelancerProfile {},
    #[route("/admin/profil/edit")]
    EditAdminProfile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { {style::BASE_CSS} }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
