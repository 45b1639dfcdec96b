use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAuth, RequireHr},
    pages::{
        AttendancePage, DashboardPage, HomePage, LeavesPage, LoginPage, PanelPage, PayrollPage,
        ProfileDetailPage, ProfilesPage,
    },
    state::auth::AuthProvider,
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/panel" view=ProtectedPanel/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/profiles" view=ProtectedProfiles/>
                    <Route path="/profiles/:id" view=ProtectedProfileDetail/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                    <Route path="/leaves" view=ProtectedLeaves/>
                    <Route path="/payroll" view=ProtectedPayroll/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedPanel() -> impl IntoView {
    view! { <RequireAuth><PanelPage/></RequireAuth> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireHr><DashboardPage/></RequireHr> }
}

#[component]
fn ProtectedProfiles() -> impl IntoView {
    view! { <RequireHr><ProfilesPage/></RequireHr> }
}

#[component]
fn ProtectedProfileDetail() -> impl IntoView {
    view! { <RequireHr><ProfileDetailPage/></RequireHr> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireHr><AttendancePage/></RequireHr> }
}

#[component]
fn ProtectedLeaves() -> impl IntoView {
    view! { <RequireHr><LeavesPage/></RequireHr> }
}

#[component]
fn ProtectedPayroll() -> impl IntoView {
    view! { <RequireHr><PayrollPage/></RequireHr> }
}
