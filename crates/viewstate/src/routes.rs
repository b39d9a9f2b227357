use std::fmt;

/// Named UI views reachable by URL path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    /// The interactive space map.
    Map,
    /// Backend health check.
    Ping,
}

impl Route {
    pub fn view_name(self) -> &'static str {
        match self {
            Route::Map => "Home",
            Route::Ping => "Ping",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.view_name())
    }
}

/// Static path → view table.
pub const ROUTES: &[(&str, Route)] = &[("/", Route::Map), ("/ping", Route::Ping)];

/// Pure lookup; unknown paths are the caller's 404.
pub fn lookup(path: &str) -> Option<Route> {
    ROUTES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, route)| *route)
}

#[cfg(test)]
mod tests {
    use super::{Route, lookup};

    #[test]
    fn known_paths_resolve() {
        assert_eq!(lookup("/"), Some(Route::Map));
        assert_eq!(lookup("/ping"), Some(Route::Ping));
    }

    #[test]
    fn unknown_path_is_none() {
        assert_eq!(lookup("/spaces"), None);
        assert_eq!(lookup(""), None);
    }
}
