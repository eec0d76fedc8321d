//! Server settings loaded via OrthoConfig.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use coursehub::domain::{IdentityValidationError, UserId};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
/// Seed location relative to the working directory.
const DEFAULT_CATALOGUE_PATH: &str = "fixtures/courses.json";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid listen host '{value}': expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid administrator id '{value}': {source}")]
    InvalidAdminId {
        value: String,
        #[source]
        source: IdentityValidationError,
    },
}

/// Settings for the HTTP server and its catalogue.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURSEHUB")]
pub struct ServerSettings {
    /// Listen address; defaults to all interfaces.
    pub host: Option<String>,
    /// Listen port; defaults to 8080.
    pub port: Option<u16>,
    /// Path to the JSON catalogue seed; defaults to `fixtures/courses.json`
    /// under the working directory.
    pub catalogue_path: Option<PathBuf>,
    /// Comma-separated administrator user ids.
    pub admin_ids: Option<String>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    pub fn catalogue_path(&self) -> PathBuf {
        self.catalogue_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOGUE_PATH))
    }

    /// Parse the configured administrator ids, ignoring blank entries.
    pub fn admin_ids(&self) -> Result<Vec<UserId>, SettingsError> {
        self.admin_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                UserId::new(raw).map_err(|source| SettingsError::InvalidAdminId {
                    value: raw.to_owned(),
                    source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "COURSEHUB_HOST",
        "COURSEHUB_PORT",
        "COURSEHUB_CATALOGUE_PATH",
        "COURSEHUB_ADMIN_IDS",
    ];

    fn load() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("coursehub")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load();

        assert_eq!(
            settings.bind_addr().expect("default bind"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
        let catalogue = settings.catalogue_path();
        assert!(catalogue.is_relative(), "default seed path is {}", catalogue.display());
        assert_eq!(catalogue, PathBuf::from("fixtures").join("courses.json"));
        assert!(settings.admin_ids().expect("no admins").is_empty());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("COURSEHUB_HOST", Some("127.0.0.1".to_owned())),
            ("COURSEHUB_PORT", Some("9090".to_owned())),
            ("COURSEHUB_CATALOGUE_PATH", Some("/tmp/courses.json".to_owned())),
            (
                "COURSEHUB_ADMIN_IDS",
                Some("123e4567-e89b-12d3-a456-426614174000, ".to_owned()),
            ),
        ]);

        let settings = load();

        assert_eq!(
            settings.bind_addr().expect("bind"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
        assert_eq!(settings.catalogue_path(), PathBuf::from("/tmp/courses.json"));
        let admins = settings.admin_ids().expect("admins");
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].as_ref(), "123e4567-e89b-12d3-a456-426614174000");
    }

    #[rstest]
    #[case::bad_host(Some("localhost"), None)]
    #[case::bad_admin(None, Some("not-a-uuid"))]
    fn invalid_values_are_reported(#[case] host: Option<&str>, #[case] admins: Option<&str>) {
        let settings = ServerSettings {
            host: host.map(str::to_owned),
            port: None,
            catalogue_path: None,
            admin_ids: admins.map(str::to_owned),
        };

        let failed = settings.bind_addr().is_err() || settings.admin_ids().is_err();

        assert!(failed);
    }
}
