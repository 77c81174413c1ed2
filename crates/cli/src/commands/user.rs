//! `amazin user ...`

use amazin_core::UserId;
use amazin_storefront::session::{CurrentUser, StoreError, UserStore};

use crate::terminal::say;

/// Print the active user id.
pub fn show(storage: &dyn UserStore, default: &str) {
    say(CurrentUser::resolve(storage, default).as_str());
}

/// Persist a new active user id.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn set(storage: &dyn UserStore, id: &str) -> Result<(), StoreError> {
    let user_id = UserId::new(id);
    CurrentUser::store(storage, &user_id)?;
    say(&format!("Active user is now {user_id}"));
    Ok(())
}

/// Forget the stored user id so the default applies again.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn clear(storage: &dyn UserStore, default: &str) -> Result<(), StoreError> {
    CurrentUser::clear(storage)?;
    say(&format!("Active user is now {default}"));
    Ok(())
}
