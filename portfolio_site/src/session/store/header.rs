use chrono::{DateTime, Utc};
use headers::HeaderMapExt;
use http::header::{HeaderMap, HeaderValue, SET_COOKIE};
use std::collections::HashMap;

use super::CookieStore;
use crate::session::config::SESSION_COOKIE_SECURE;
use crate::session::errors::SessionError;
use crate::session::types::{CookieOptions, DeleteOptions};
use crate::utils::{UtilError, http_date};

/// Cookie store backed by HTTP headers.
///
/// Reads come from the request `Cookie` header, writes are appended to a
/// response header map as `Set-Cookie` lines. Writes made during the request
/// are visible to later reads on the same store.
#[derive(Debug, Clone)]
pub struct HeaderCookieStore {
    jar: HashMap<String, String>,
    response: HeaderMap,
    secure: bool,
}

impl Default for HeaderCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderCookieStore {
    pub fn new() -> Self {
        Self {
            jar: HashMap::new(),
            response: HeaderMap::new(),
            secure: *SESSION_COOKIE_SECURE,
        }
    }

    /// Seed the store with the cookies sent by the client.
    pub fn from_request_headers(headers: &HeaderMap) -> Self {
        let mut store = Self::new();
        if let Some(cookies) = headers.typed_get::<headers::Cookie>() {
            for (name, value) in cookies.iter() {
                store.jar.insert(name.to_string(), value.to_string());
            }
        } else {
            tracing::trace!("No cookie header found");
        }
        store
    }

    /// Override the `Secure` attribute, e.g. for plain-HTTP development servers.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn response_headers(&self) -> &HeaderMap {
        &self.response
    }

    pub fn into_response_headers(self) -> HeaderMap {
        self.response
    }

    fn append_set_cookie(
        &mut self,
        name: &str,
        value: &str,
        path: &str,
        expires: DateTime<Utc>,
        max_age: Option<i64>,
    ) -> Result<(), SessionError> {
        validate_cookie_part(name, value)?;

        let mut cookie = format!("{name}={value}; Path={path}; Expires={}", http_date(expires));
        if let Some(max_age) = max_age {
            cookie.push_str(&format!("; Max-Age={max_age}"));
        }
        cookie.push_str("; HttpOnly; SameSite=Lax");
        if self.secure {
            cookie.push_str("; Secure");
        }

        let header_value: HeaderValue = cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?;
        self.response.append(SET_COOKIE, header_value);
        tracing::debug!("Set-Cookie: {cookie}");
        Ok(())
    }
}

fn validate_cookie_part(name: &str, value: &str) -> Result<(), SessionError> {
    let bad_name = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_ascii_control() || c.is_whitespace() || "()<>@,;:\\\"/[]?={}".contains(c));
    if bad_name {
        return Err(SessionError::Cookie(format!("Invalid cookie name: {name:?}")));
    }

    if value
        .chars()
        .any(|c| c.is_ascii_control() || c.is_whitespace() || matches!(c, '"' | ',' | ';' | '\\'))
    {
        return Err(SessionError::Cookie(format!(
            "Invalid value for cookie {name}"
        )));
    }
    Ok(())
}

impl CookieStore for HeaderCookieStore {
    fn set(&mut self, name: &str, value: &str, options: CookieOptions) -> Result<(), SessionError> {
        self.append_set_cookie(name, value, &options.path, options.expires, None)?;
        if options.expires > Utc::now() {
            self.jar.insert(name.to_string(), value.to_string());
        } else {
            self.jar.remove(name);
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.jar.get(name).map(String::as_str)
    }

    fn delete(&mut self, name: &str, options: DeleteOptions) -> Result<(), SessionError> {
        self.append_set_cookie(name, "", &options.path, DateTime::<Utc>::UNIX_EPOCH, Some(0))?;
        self.jar.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use http::header::COOKIE;

    fn set_cookie_lines(store: &HeaderCookieStore) -> Vec<String> {
        store
            .response_headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_reads_request_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "theme=dark; auth-session=abc123".parse().unwrap());

        let store = HeaderCookieStore::from_request_headers(&headers);

        assert_eq!(store.get("auth-session"), Some("abc123"));
        assert_eq!(store.get("theme"), Some("dark"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_no_cookie_header() {
        let store = HeaderCookieStore::from_request_headers(&HeaderMap::new());
        assert_eq!(store.get("auth-session"), None);
        assert!(store.response_headers().is_empty());
    }

    #[test]
    fn test_set_emits_set_cookie_header() {
        let expires = Utc.with_ymd_and_hms(2099, 1, 2, 3, 4, 5).unwrap();
        let mut store = HeaderCookieStore::new().with_secure(true);

        store
            .set("auth-session", "tok", CookieOptions::new("/", expires))
            .unwrap();

        assert_eq!(
            set_cookie_lines(&store),
            vec![
                "auth-session=tok; Path=/; Expires=Fri, 02 Jan 2099 03:04:05 GMT; HttpOnly; SameSite=Lax; Secure"
                    .to_string()
            ]
        );
        assert_eq!(store.get("auth-session"), Some("tok"));
    }

    #[test]
    fn test_insecure_store_omits_secure_attribute() {
        let mut store = HeaderCookieStore::new().with_secure(false);
        store
            .set(
                "auth-session",
                "tok",
                CookieOptions::new("/", Utc::now() + Duration::hours(1)),
            )
            .unwrap();

        let lines = set_cookie_lines(&store);
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].contains("Secure"));
    }

    #[test]
    fn test_delete_emits_expired_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "auth-session=abc123".parse().unwrap());
        let mut store = HeaderCookieStore::from_request_headers(&headers).with_secure(true);

        store
            .delete("auth-session", DeleteOptions::new("/"))
            .unwrap();

        assert_eq!(
            set_cookie_lines(&store),
            vec![
                "auth-session=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; HttpOnly; SameSite=Lax; Secure"
                    .to_string()
            ]
        );
        assert_eq!(store.get("auth-session"), None);
    }

    #[test]
    fn test_set_with_past_expiry_hides_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "auth-session=abc123".parse().unwrap());
        let mut store = HeaderCookieStore::from_request_headers(&headers);

        store
            .set(
                "auth-session",
                "abc123",
                CookieOptions::new("/", Utc::now() - Duration::days(1)),
            )
            .unwrap();

        assert_eq!(store.get("auth-session"), None);
        assert_eq!(set_cookie_lines(&store).len(), 1);
    }

    #[test]
    fn test_rejects_invalid_value() {
        let mut store = HeaderCookieStore::new();
        let result = store.set(
            "auth-session",
            "two words",
            CookieOptions::new("/", Utc::now() + Duration::hours(1)),
        );

        assert!(matches!(result, Err(SessionError::Cookie(_))));
        assert!(store.response_headers().is_empty());
    }

    #[test]
    fn test_rejects_invalid_name() {
        let mut store = HeaderCookieStore::new();
        let result = store.delete("bad;name", DeleteOptions::default());
        assert!(matches!(result, Err(SessionError::Cookie(_))));
    }
}
