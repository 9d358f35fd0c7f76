use crate::error::{LauncherError, Result};
use std::env;
use std::path::PathBuf;

/// Replaces `$VAR` and `${VAR}` with values from `lookup`. Unset variables
/// expand to an empty string, the way a shell would.
pub fn expand_with<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => {
                    // unterminated, keep as written
                    out.push('$');
                    rest = after;
                    continue;
                }
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        if name.is_empty() {
            out.push('$');
        } else {
            out.push_str(&lookup(name).unwrap_or_default());
        }
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

/// Variable lookup backed by the process environment.
pub fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Returns the first candidate that exists on disk after expansion.
///
/// Order is precedence: explicit paths go before defaults.
pub fn find_first_existing<I, S, F>(what: &'static str, templates: I, lookup: F) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    let mut checked = Vec::new();
    for template in templates {
        let resolved = PathBuf::from(expand_with(template.as_ref(), &lookup));
        log::debug!("Checking {} for {}", resolved.display(), what);
        if resolved.exists() {
            return Ok(resolved);
        }
        checked.push(resolved);
    }
    Err(LauncherError::NotFound {
        what,
        candidates: checked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn expands_plain_and_braced_variables() {
        let lookup = vars(&[("HOME", "/home/fleet"), ("X", "rm")]);
        assert_eq!(
            expand_with("$HOME/.steam/${X}/bin", &lookup),
            "/home/fleet/.steam/rm/bin"
        );
    }

    #[test]
    fn unset_variables_expand_to_nothing() {
        let lookup = vars(&[]);
        assert_eq!(expand_with("$NOPE/steam", &lookup), "/steam");
        assert_eq!(expand_with("a$", &lookup), "a$");
        assert_eq!(expand_with("${OPEN", &lookup), "${OPEN");
    }

    #[test]
    fn first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second");
        let third = dir.path().join("third");
        fs::create_dir(&second).unwrap();
        fs::create_dir(&third).unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let lookup = vars(&[("ROOT", root.as_str())]);
        let found = find_first_existing(
            "Steam",
            ["$ROOT/first", "$ROOT/second", "$ROOT/third"],
            &lookup,
        )
        .unwrap();

        assert_eq!(found, second);
    }

    #[test]
    fn no_existing_candidate_reports_everything_checked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let lookup = vars(&[("ROOT", root.as_str())]);

        let err = find_first_existing("Steam", ["$ROOT/a", "$ROOT/b"], &lookup).unwrap_err();
        match err {
            LauncherError::NotFound { what, candidates } => {
                assert_eq!(what, "Steam");
                assert_eq!(candidates, vec![dir.path().join("a"), dir.path().join("b")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_candidate_list_is_not_found() {
        let err = find_first_existing("Steam", Vec::<String>::new(), vars(&[])).unwrap_err();
        assert!(matches!(err, LauncherError::NotFound { .. }));
    }
}
