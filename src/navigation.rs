use tracing::info;

/// Route of the results page that consumes the query string
pub const RESULTS_ROUTE: &str = "/properties";

/// Client-side navigation target
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// `application/x-www-form-urlencoded` pairs, spaces as `+`
pub fn encode_query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// `/properties?<query>`; the `?` stays even when the query is empty
pub fn results_path<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    format!("{}?{}", RESULTS_ROUTE, encode_query(pairs))
}

pub fn district_path(district: &str) -> String {
    results_path([("district", district)])
}

pub fn property_path(id: &str) -> String {
    format!("{}/{}", RESULTS_ROUTE, urlencoding::encode(id))
}

/// Prints the destination instead of rendering a results page
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        info!("Navigating to {}", path);
        println!("→ {}", path);
    }
}

#[cfg(test)]
pub mod recording {
    use super::Navigator;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingNavigator {
        pub visited: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn last(&self) -> Option<String> {
            self.visited.lock().unwrap().last().cloned()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_string());
        }
    }
}
