//! localStorage access for the session keys. The backend issues no token;
//! the signed-in identity is the `employeeId`/`role` pair written after
//! login and cleared on logout or a 401.

use web_sys::Storage;

pub const EMPLOYEE_ID_KEY: &str = "employeeId";
pub const ROLE_KEY: &str = "role";

pub fn local_storage() -> Result<Storage, String> {
    web_sys::window()
        .ok_or_else(|| "brak obiektu window".to_string())?
        .local_storage()
        .map_err(|_| "localStorage niedostępny".to_string())?
        .ok_or_else(|| "localStorage niedostępny".to_string())
}

/// Persisted session pair, `None` when either key is missing.
pub fn read_session_keys() -> Option<(String, String)> {
    let storage = local_storage().ok()?;
    let employee_id = storage.get_item(EMPLOYEE_ID_KEY).ok().flatten()?;
    let role = storage.get_item(ROLE_KEY).ok().flatten()?;
    Some((employee_id, role))
}

pub fn write_session_keys(employee_id: &str, role: &str) -> Result<(), String> {
    let storage = local_storage()?;
    storage
        .set_item(EMPLOYEE_ID_KEY, employee_id)
        .map_err(|_| format!("zapis {EMPLOYEE_ID_KEY}"))?;
    storage
        .set_item(ROLE_KEY, role)
        .map_err(|_| format!("zapis {ROLE_KEY}"))?;
    Ok(())
}

pub fn clear_session_keys() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(EMPLOYEE_ID_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
