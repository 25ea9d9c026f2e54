//! User display formatting

use crate::models::User;

/// Format user details for display
pub fn format_user_details(user: &User) -> String {
    format!(
        "User:     {}\nCycle:    {}\nSince:    {}\n",
        user.username,
        user.recurrence.as_str().to_lowercase(),
        user.created_at.format("%Y-%m-%d")
    )
}

/// Format a list of users, one per line
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users registered.\n".to_string();
    }

    users
        .iter()
        .map(|u| format!("{:20} {}\n", u.username, u.recurrence.as_str().to_lowercase()))
        .collect()
}
