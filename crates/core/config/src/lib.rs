use cached::proc_macro::cached;
use config::{Config, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Wardlens.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Wardlens.toml").exists() {
            builder = builder.add_source(File::new("Wardlens.toml", FileFormat::Toml));
        }

        // WARDLENS__ADMIN__API_KEY and friends override file values.
        builder = builder.add_source(
            Environment::with_prefix("WARDLENS")
                .prefix_separator("__")
                .separator("__"),
        );

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Admin {
    /// Key expected in the x-admin-api-key header
    ///
    /// An empty key means administration is not configured and the
    /// guarded routes refuse to run.
    pub api_key: String,
    /// Email the login endpoint accepts
    pub email: String,
    /// Password the login endpoint accepts
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiCors {
    pub allowed_origin: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiLimits {
    pub json_payload_mib: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub cors: ApiCors,
    pub limits: ApiLimits,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub admin: Admin,
    pub api: Api,
}

pub async fn init() {
    println!(
        ":: Wardlens Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}
