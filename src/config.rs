use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env = "BIND_HOST", long, default_value = "0.0.0.0")]
    pub host: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Not validated here, an empty key fails upstream
    #[clap(env, long, default_value = "")]
    pub geoapify_api_key: String,

    #[clap(env, long, default_value = "https://api.geoapify.com")]
    pub geoapify_base_url: String,

    /// Comma separated list of allowed CORS origins, any origin when unset
    #[clap(env, long)]
    pub origin_urls: Option<String>,

    /// Seeds price and rating synthesis so responses are reproducible
    #[clap(env, long)]
    pub rng_seed: Option<u64>,
}
