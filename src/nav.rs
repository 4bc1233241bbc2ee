//! Navigation registry and the visibility rules applied to it.
//!
//! The registry is an explicit construction function rather than a mutable
//! static: callers pass the chat flag once at load and get an owned,
//! immutable list back.

use crate::session::UserInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    pub requires_admin: bool,
}

impl NavEntry {
    const fn new(label: &'static str, route: &'static str, icon: &'static str) -> Self {
        NavEntry {
            label,
            route,
            icon,
            requires_admin: false,
        }
    }

    const fn admin(label: &'static str, route: &'static str, icon: &'static str) -> Self {
        NavEntry {
            label,
            route,
            icon,
            requires_admin: true,
        }
    }
}

pub const HOME_LABEL: &str = "Home";

/// Entries an anonymous session never sees, independent of the admin flag.
const ANONYMOUS_HIDDEN: [&str; 7] = [
    "Channels",
    "Tokens",
    "Redemption",
    "Top Up",
    "Users",
    "Logs",
    "Settings",
];

/// Ordered registry. The chat entry slots in right after Home when the
/// operator has configured a chat link.
pub fn nav_entries(chat_enabled: bool) -> Vec<NavEntry> {
    let mut entries = vec![
        NavEntry::new(HOME_LABEL, "/", "globe"),
        NavEntry::admin("Channels", "/channel", "sitemap"),
        NavEntry::new("Tokens", "/token", "key"),
        NavEntry::admin("Redemption", "/redemption", "sync"),
        NavEntry::new("Top Up", "/topup", "cart"),
        NavEntry::admin("Users", "/user", "user"),
        NavEntry::new("Logs", "/log", "book"),
        NavEntry::new("Settings", "/setting", "setting"),
        NavEntry::new("Models", "/about", "info"),
    ];
    if chat_enabled {
        entries.insert(1, NavEntry::new("Chat", "/chat", "comments"));
    }
    entries
}

/// Visibility rules, first match wins. The anonymous-hidden set and the
/// admin flag overlap for some entries; both checks are kept, in this
/// order, on purpose.
pub fn should_show(entry: &NavEntry, user: Option<&UserInfo>) -> bool {
    if entry.label == HOME_LABEL && user.is_some() {
        return false;
    }
    if user.is_none() && ANONYMOUS_HIDDEN.contains(&entry.label) {
        return false;
    }
    if entry.requires_admin && !user.map_or(false, UserInfo::is_admin) {
        return false;
    }
    true
}

/// Active highlighting is an exact path match, nothing prefix-based.
pub fn is_active(path: &str, entry: &NavEntry) -> bool {
    path == entry.route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: i32) -> UserInfo {
        UserInfo {
            id: 1,
            username: "test".to_string(),
            display_name: String::new(),
            role,
            quota: 0,
            group: String::new(),
        }
    }

    #[test]
    fn test_routes_unique() {
        let entries = nav_entries(true);
        let mut routes: Vec<&str> = entries.iter().map(|e| e.route).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), entries.len());
    }

    #[test]
    fn test_chat_entry_insertion() {
        let without = nav_entries(false);
        assert!(without.iter().all(|e| e.label != "Chat"));

        let with = nav_entries(true);
        assert_eq!(with[1].label, "Chat");
        assert_eq!(with[1].route, "/chat");

        // Every base entry keeps its relative order around the insertion.
        let base_order: Vec<&str> = without.iter().map(|e| e.label).collect();
        let with_order: Vec<&str> = with
            .iter()
            .map(|e| e.label)
            .filter(|l| *l != "Chat")
            .collect();
        assert_eq!(base_order, with_order);
    }

    #[test]
    fn test_admin_entries_hidden_from_non_admin() {
        let user = user_with_role(1);
        for entry in nav_entries(true).iter().filter(|e| e.requires_admin) {
            assert!(
                !should_show(entry, Some(&user)),
                "{} shown to non-admin",
                entry.label
            );
        }
    }

    #[test]
    fn test_admin_entries_shown_to_admin() {
        let admin = user_with_role(10);
        for entry in nav_entries(true).iter().filter(|e| e.requires_admin) {
            assert!(should_show(entry, Some(&admin)), "{} hidden from admin", entry.label);
        }
    }

    #[test]
    fn test_anonymous_hidden_set() {
        for entry in nav_entries(true) {
            let expected = !ANONYMOUS_HIDDEN.contains(&entry.label) && !entry.requires_admin;
            assert_eq!(
                should_show(&entry, None),
                expected,
                "unexpected anonymous visibility for {}",
                entry.label
            );
        }
    }

    #[test]
    fn test_home_visible_only_when_anonymous() {
        let entries = nav_entries(false);
        let home = entries.iter().find(|e| e.label == HOME_LABEL).unwrap();
        assert!(should_show(home, None));
        assert!(!should_show(home, Some(&user_with_role(1))));
        assert!(!should_show(home, Some(&user_with_role(10))));
    }

    #[test]
    fn test_anonymous_sees_models_and_chat() {
        let entries = nav_entries(true);
        let visible: Vec<&str> = entries
            .iter()
            .filter(|e| should_show(e, None))
            .map(|e| e.label)
            .collect();
        assert_eq!(visible, vec!["Home", "Chat", "Models"]);
    }

    #[test]
    fn test_active_is_exact_match() {
        let entries = nav_entries(false);
        let active: Vec<&str> = entries
            .iter()
            .filter(|e| is_active("/topup", e))
            .map(|e| e.label)
            .collect();
        assert_eq!(active, vec!["Top Up"]);

        assert!(entries.iter().all(|e| !is_active("/topup/history", e)));
        assert!(entries.iter().all(|e| !is_active("/nowhere", e)));
    }
}
