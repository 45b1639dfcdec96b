use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    utils::storage as storage_utils,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// The signed-in identity. Pages never read localStorage themselves; the
/// employee id always travels from here into API calls as an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub employee_id: i64,
    pub role: String,
}

impl Session {
    pub fn is_hr(&self) -> bool {
        self.role == "HR"
    }

    /// Rebuilds a session from the raw stored pair. A stale or hand-edited
    /// `employeeId` that does not parse yields no session.
    fn from_stored(employee_id: &str, role: String) -> Option<Self> {
        let employee_id = employee_id.parse::<i64>().ok()?;
        Some(Self { employee_id, role })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

fn restore_session() -> Option<Session> {
    let (employee_id, role) = storage_utils::read_session_keys()?;
    Session::from_stored(&employee_id, role)
}

fn persist_session(session: &Session) -> Result<(), ApiError> {
    storage_utils::write_session_keys(&session.employee_id.to_string(), &session.role)
        .map_err(ApiError::Storage)
}

fn discard_session() {
    storage_utils::clear_session_keys();
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        session: restore_session(),
        loading: false,
    });
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api_client.login(&request).await {
        Ok(response) => {
            let session = Session {
                employee_id: response.id,
                role: response.role,
            };
            persist_session(&session)?;
            set_auth_state.update(|state| {
                state.session = Some(session.clone());
                state.loading = false;
            });
            Ok(session)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    discard_session();
    set_auth_state.update(|state| {
        state.session = None;
        state.loading = false;
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn hr_role_is_recognized() {
        let hr = Session {
            employee_id: 1,
            role: "HR".into(),
        };
        let employee = Session {
            employee_id: 2,
            role: "USER".into(),
        };
        assert!(hr.is_hr());
        assert!(!employee.is_hr());
    }

    #[test]
    fn default_state_is_signed_out() {
        assert!(!AuthState::default().is_authenticated());
    }

    #[test]
    fn stored_pair_rebuilds_session_only_when_id_parses() {
        let session = Session::from_stored("7", "HR".into()).unwrap();
        assert_eq!(session.employee_id, 7);
        assert!(session.is_hr());

        assert!(Session::from_stored("siedem", "HR".into()).is_none());
    }
}
