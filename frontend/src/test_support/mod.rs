#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::auth::{AuthState, Session};
    use leptos::*;

    pub fn hr_session() -> Session {
        Session {
            employee_id: 1,
            role: "HR".into(),
        }
    }

    pub fn employee_session() -> Session {
        Session {
            employee_id: 7,
            role: "USER".into(),
        }
    }

    pub fn provide_auth(
        session: Option<Session>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            session,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
