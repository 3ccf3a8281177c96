//! GitHub Actions workflow commands

/// `::error title=<title>::<message>` with workflow-command escaping
pub fn github_actions_error(message: &str, title: Option<&str>) -> String {
    let props = match title {
        Some(title) => format!(" title={}", escape_property(title)),
        None => String::new(),
    };
    format!("::error{}::{}", props, escape_data(message))
}

pub fn is_github_actions(get_env: impl Fn(&str) -> Option<String>) -> bool {
    get_env("GITHUB_ACTIONS").is_some_and(|v| v == "true")
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
