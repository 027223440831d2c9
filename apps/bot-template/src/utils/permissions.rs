use serenity::all::Permissions;

/// Human-readable names of every permission set in `perms`, e.g. `"Manage Messages"`.
pub fn permission_names(perms: Permissions) -> Vec<String> {
    perms
        .get_permission_names()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_every_set_permission() {
        let names = permission_names(Permissions::KICK_MEMBERS | Permissions::MANAGE_MESSAGES);

        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Kick Members".to_string()));
        assert!(names.contains(&"Manage Messages".to_string()));
    }

    #[test]
    fn empty_set_has_no_names() {
        assert!(permission_names(Permissions::empty()).is_empty());
    }
}
